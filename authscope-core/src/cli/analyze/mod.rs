//! Terminal consumer for the analysis engine.
//!
//! Reads a log file (or stdin when no path is given), runs the engine over
//! the whole batch, and renders the result in one of three ways:
//! - **Summary mode**: metric lines plus the two top-10 offender tables
//! - **Events mode**: the raw parsed events, one per line
//! - **JSON mode**: the full report, for downstream tooling
//!
//! The engine never touches files or stdout; everything IO-shaped lives here.

mod render;
mod run;


pub use run::{AnalyzeInput, OutputMode, run_analyze};
