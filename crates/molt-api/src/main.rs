//! molt CLI entry point.
//!
//! Binary name: `molt`
//!
//! Parses process flags, sets up tracing, wires the social and chat clients
//! into one agent, then runs the interactive REPL or a one-shot command.

mod cli;
mod state;

use clap::Parser;

use cli::{Cli, Commands};
use molt_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let mut state = AppState::init(cli.config.clone(), cli.no_stream).await?;

    let result = match cli.command {
        None | Some(Commands::Repl) => cli::repl::run_repl(&mut state).await,
        Some(Commands::Browse) => {
            cli::actions::browse(&mut state.agent, false).await;
            Ok(())
        }
        Some(Commands::Heartbeat) => {
            cli::actions::browse(&mut state.agent, true).await;
            Ok(())
        }
        Some(Commands::Ask { question, system }) => {
            cli::actions::ask(&mut state.agent, &question.join(" "), system.as_deref()).await;
            Ok(())
        }
    };

    shutdown_tracing();
    result
}
