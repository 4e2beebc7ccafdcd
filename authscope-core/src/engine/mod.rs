//! Auth Log Analysis Pipeline
//!
//! This module turns one batch of already-decoded auth-log text into a report.
//!
//! Auth logs interleave many unrelated message types - cron sessions, sudo
//! invocations, preauth disconnects - and only the password accept/reject
//! lines carry the fields we aggregate. Lines that do not match the grammar
//! are skipped silently; they are data, not faults.
//!
//! The overall data processing architecture is:
//!
//! text
//! parse_line
//! AuthEvent
//! Aggregator
//! Summary
//!

mod aggregate;
mod constants;
mod error;
mod parse;
mod stream;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::{Aggregator, Summary, summarize};
pub use error::AnalyzeError;
pub use parse::parse_line;
pub use stream::events;
pub use types::{Action, AuthEvent};

use serde::Serialize;

/// Everything one analysis run produces: the full ordered event sequence for
/// raw-data display, plus the aggregate summary.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub events: Vec<AuthEvent>,
    pub summary: Summary,
}

/// Analyze one batch of decoded log text.
///
/// Never fails: a batch with no matching lines yields an empty event list and
/// an all-zero summary. Parsing and aggregation are fused into a single pass
/// over the lines.
pub fn analyze(text: &str) -> Report {
    let mut agg = Aggregator::new();
    let mut events = Vec::new();

    for event in stream::events(text.lines()) {
        agg.push(&event);
        events.push(event);
    }

    Report {
        events,
        summary: agg.finish(),
    }
}

/// Analyze raw log bytes, decoding them as UTF-8 first.
///
/// The engine does not guess at encodings: input that is not valid UTF-8 is
/// rejected with [`AnalyzeError::InputDecoding`] instead of being analyzed on
/// a best-effort basis.
pub fn analyze_bytes(bytes: &[u8]) -> Result<Report, AnalyzeError> {
    let text = std::str::from_utf8(bytes).map_err(AnalyzeError::input_decoding)?;

    Ok(analyze(text))
}
