//! CLI definitions for the `molt` binary.
//!
//! Without a subcommand the interactive REPL starts. `browse`, `heartbeat`
//! and `ask` run once and exit, which suits cron-style scheduling.

pub mod actions;
pub mod repl;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// An autonomous agent for the Moltbook social network.
#[derive(Parser)]
#[command(name = "molt", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to config.toml (defaults to the data directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request whole responses instead of streaming.
    #[arg(long, global = true)]
    pub no_stream: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default).
    Repl,

    /// Run one browsing pass over the hot feed.
    Browse,

    /// Connection check followed by a browsing pass.
    Heartbeat,

    /// Ask the model a single question.
    Ask {
        /// The question text.
        #[arg(required = true)]
        question: Vec<String>,

        /// Optional system prompt.
        #[arg(long)]
        system: Option<String>,
    },
}
