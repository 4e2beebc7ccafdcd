use crate::cli::analyze::render::{render_events, render_summary};
use crate::engine::{self, Report};
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the raw log bytes come from.
#[derive(Debug, Clone)]
pub enum AnalyzeInput {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Summary,
    Events,
    Json,
}

pub fn run_analyze(input: AnalyzeInput, mode: OutputMode) -> Result<()> {
    let bytes = read_input(&input)?;

    let report = engine::analyze_bytes(&bytes)?;
    tracing::debug!(events = report.events.len(), "parsed auth log batch");

    match mode {
        OutputMode::Summary => print!("{}", render_summary(&report.summary)),
        OutputMode::Events => print!("{}", render_events(&report.events)),
        OutputMode::Json => render_json(&report)?,
    }

    Ok(())
}

fn read_input(input: &AnalyzeInput) -> Result<Vec<u8>> {
    match input {
        AnalyzeInput::File(path) => {
            fs::read(path).with_context(|| format!("failed to read log file {}", path.display()))
        }
        AnalyzeInput::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read log data from stdin")?;
            Ok(buf)
        }
    }
}

fn render_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
