//! Agent actions shared by the REPL and the one-shot subcommands.

use chrono::Local;
use console::style;

use super::repl::observer::ConsoleObserver;
use super::repl::renderer::{self, Renderer};
use crate::state::MoltAgent;

/// Run a browsing pass (or a heartbeat) and print its progress and summary.
///
/// Failures are rendered as text; nothing is propagated.
pub async fn browse(agent: &mut MoltAgent, heartbeat: bool) {
    let mut observer = ConsoleObserver::new(agent.chat().streaming());

    let result = if heartbeat {
        println!();
        println!(
            "  {} {}",
            style("Heartbeat at").bold(),
            style(Local::now().format("%Y-%m-%d %H:%M:%S")).dim()
        );
        agent.heartbeat(&mut observer).await
    } else {
        agent.browse(&mut observer).await
    };

    match result {
        Ok(report) => renderer::print_report(&report),
        Err(e) => renderer::print_error(&e),
    }
}

/// Ask the model one question with the recent conversation as context.
///
/// Streamed answers are echoed as they arrive; whole answers are rendered
/// as markdown once complete.
pub async fn ask(agent: &mut MoltAgent, question: &str, system: Option<&str>) {
    let streaming = agent.chat().streaming();
    let mut observer = ConsoleObserver::new(streaming);

    observer.start_thinking();
    let answer = agent.ask(question, system, &mut observer).await;

    if answer.is_empty() {
        println!("  {}", style("(no answer)").dim());
    } else if !streaming {
        Renderer::new().print_answer(&answer);
    }
}
