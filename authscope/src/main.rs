use authscope_core::cli::analyze::{AnalyzeInput, OutputMode, run_analyze};
use authscope_core::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "authscope",
    version,
    about = "Authscope: SSH auth log analyzer"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze an auth log and report login statistics
    Analyze {
        /// Path to the auth log file (stdin when omitted)
        file: Option<PathBuf>,

        /// Print the parsed events instead of the summary
        #[arg(long)]
        events: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let (input, mode) = match cli.command {
        Some(Command::Analyze { file, events, json }) => {
            let input = match file {
                Some(path) => AnalyzeInput::File(path),
                None => AnalyzeInput::Stdin,
            };

            let mode = if json {
                OutputMode::Json
            } else if events {
                OutputMode::Events
            } else {
                OutputMode::Summary
            };

            (input, mode)
        }

        // Bare invocation: summarize whatever is piped in.
        None => (AnalyzeInput::Stdin, OutputMode::Summary),
    };

    if let Err(e) = run_analyze(input, mode) {
        eprintln!("analyze error: {e:#}");
        std::process::exit(1);
    }
}
