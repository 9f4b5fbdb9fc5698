use std::{num::NonZeroU32, path::PathBuf};

use clap::{Parser, Subcommand};

// ///////////// //
// CLI interface //
// ///////////// //

/// cups-lp - Lists print queues, printers and printer options, and submits or cancels jobs through the CUPS command line tools.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log every tool invocation.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists pending jobs, or finished ones with --completed.
    Queue {
        #[arg(long)]
        completed: bool,
        /// Only list jobs of this printer. Can be repeated.
        #[arg(short = 'd', long = "printer")]
        printers: Vec<String>,
    },
    /// Lists printer names.
    Printers,
    /// Lists the options of PRINTER, or of every printer.
    Options {
        printer: Option<String>,
    },
    /// Submits a job. The document is read from stdin when FILE is omitted.
    Print {
        file: Option<PathBuf>,
        #[arg(short = 'd', long)]
        printer: Option<String>,
        #[arg(short = 'n', long)]
        copies: Option<NonZeroU32>,
        #[arg(short = 'q', long)]
        priority: Option<i32>,
        /// Page ranges, e.g. 1-3,7.
        #[arg(short = 'P', long)]
        pages: Option<String>,
        /// Driver option as KEY=VALUE. Can be repeated.
        #[arg(short = 'o', long = "option", value_parser = parse_key_value)]
        options: Vec<(String, String)>,
    },
    /// Cancels one job, or all jobs with --all.
    Cancel {
        #[arg(conflicts_with = "all", required_unless_present = "all")]
        request_id: Option<String>,
        /// Cancel every job, only on PRINTER when given.
        #[arg(long, value_name = "PRINTER", num_args = 0..=1)]
        all: Option<Option<String>>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
