//! CLI argument definitions for the dynamic table editor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dyntable",
    version,
    about = "Edit a two-column label table stored on disk",
    long_about = "Edit a table whose rows pair a unique single-select label with a set of\n\
                  multi-select labels. Every change is saved immediately."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the saved table (overrides settings).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// How to treat label 1 values already used by another row.
    #[arg(long = "policy", value_enum, global = true)]
    pub policy: Option<PolicyArg>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show all rows with the label 1 values each row may take.
    Show,

    /// List both option vocabularies.
    Vocabulary,

    /// Append an empty row.
    AddRow,

    /// Delete one row.
    DeleteRow {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Delete every row.
    DeleteAll,

    /// Set or clear a row's label 1 value.
    SetLabel1 {
        #[arg(value_name = "ID")]
        id: u64,
        /// New value; omit to clear.
        #[arg(value_name = "VALUE")]
        value: Option<String>,
    },

    /// Replace a row's label 2 values.
    SetLabel2 {
        #[arg(value_name = "ID")]
        id: u64,
        #[arg(value_name = "VALUES")]
        values: Vec<String>,
    },

    /// Add a new label 2 option.
    AddOption {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List the label 1 values a row may take.
    Options {
        #[arg(value_name = "ID")]
        id: u64,
    },
}

/// CLI label 1 policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Reject,
    Permit,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
