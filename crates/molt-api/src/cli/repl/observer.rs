//! Console observer for model calls and browsing passes.
//!
//! Shows a thinking spinner until the first fragment arrives, echoes
//! streamed fragments, and prints per-post progress and decisions.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use molt_core::agent::browse::{ActionResult, BrowseObserver, ItemOutcome};
use molt_core::chat::aggregate::FragmentSink;
use molt_types::decision::Decision;
use molt_types::llm::ChatError;
use molt_types::social::{AgentProfile, Post};

use super::renderer::{print_streaming_token, truncate_chars};

/// Characters of a generated comment shown in progress output.
const COMMENT_PREVIEW: usize = 100;

pub struct ConsoleObserver {
    echo: bool,
    spinner: Option<ProgressBar>,
    streamed: bool,
}

impl ConsoleObserver {
    /// `echo` prints fragments as they arrive; turn it off when the reply
    /// comes back whole and is rendered afterwards.
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            spinner: None,
            streamed: false,
        }
    }

    pub fn start_thinking(&mut self) {
        self.stop_spinner();
        self.streamed = false;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl FragmentSink for ConsoleObserver {
    fn on_fragment(&mut self, text: &str) {
        self.stop_spinner();
        if !self.echo {
            return;
        }
        if !self.streamed {
            print!("  ");
            self.streamed = true;
        }
        print_streaming_token(text);
    }

    fn on_finish(&mut self) {
        self.stop_spinner();
        if self.streamed {
            println!();
            self.streamed = false;
        }
    }

    fn on_error(&mut self, error: &ChatError) {
        self.stop_spinner();
        if self.streamed {
            println!();
            self.streamed = false;
        }
        println!("  {} AI API error: {error}", style("x").red().bold());
    }
}

impl BrowseObserver for ConsoleObserver {
    fn on_profile(&mut self, profile: &AgentProfile) {
        println!(
            "  {} {}",
            style("Connected as").bold(),
            style(&profile.name).cyan().bold()
        );
    }

    fn on_feed(&mut self, count: usize) {
        println!("  {}", style(format!("Found {count} posts")).dim());
    }

    fn on_item(&mut self, index: usize, total: usize, post: &Post) {
        println!();
        println!("  {}", style(format!("--- Post {index}/{total} ---")).dim());
        println!("  {}  {}", style("Title:").bold(), post.title);
        println!("  {}  m/{}", style("Submolt:").bold(), post.submolt);
        println!("  {}  {}", style("Score:").bold(), post.score);
        self.start_thinking();
    }

    fn on_outcome(&mut self, outcome: &ItemOutcome) {
        self.stop_spinner();
        let line = decision_label(&outcome.decision);
        match &outcome.action {
            ActionResult::Failed(reason) => println!(
                "  {} {} {}",
                style("->").cyan(),
                line,
                style(format!("(failed: {reason})")).red()
            ),
            ActionResult::Applied | ActionResult::NotAttempted => {
                println!("  {} {}", style("->").cyan(), line)
            }
        }
    }
}

/// One-line description of what the agent decided.
fn decision_label(decision: &Decision) -> String {
    match decision {
        Decision::Upvote => "Upvoting".to_string(),
        Decision::Comment(text) => {
            format!("Commenting: {}", truncate_chars(text, COMMENT_PREVIEW))
        }
        Decision::Skip => "Skipping".to_string(),
        Decision::Unrecognized => "No clear decision, skipping".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_labels() {
        assert_eq!(decision_label(&Decision::Upvote), "Upvoting");
        assert_eq!(decision_label(&Decision::Skip), "Skipping");
        assert_eq!(
            decision_label(&Decision::Comment("Nice idea!".to_string())),
            "Commenting: Nice idea!"
        );
        assert!(decision_label(&Decision::Unrecognized).contains("No clear decision"));
    }

    #[test]
    fn test_long_comment_is_previewed() {
        let label = decision_label(&Decision::Comment("x".repeat(300)));
        assert!(label.ends_with("..."));
        assert_eq!(label.chars().count(), "Commenting: ".len() + COMMENT_PREVIEW);
    }

    #[test]
    fn test_silent_fragments_track_no_echo() {
        let mut observer = ConsoleObserver::new(false);
        observer.on_fragment("hello");
        assert!(!observer.streamed);
        observer.on_finish();
        assert!(observer.spinner.is_none());
    }
}
