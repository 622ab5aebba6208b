//! Main REPL loop.
//!
//! Reads commands, prompts for their fields and dispatches to the agent.
//! Every failure is printed and the loop carries on; only quit, Ctrl+C and
//! Ctrl+D end the session.

use console::style;

use molt_types::social::FeedSort;

use super::banner::print_welcome_banner;
use super::commands::{self, ReplCommand};
use super::input::{InputEvent, ReplInput};
use super::renderer::{self, print_error, print_success, print_warning};
use crate::cli::actions;
use crate::state::AppState;

const PROMPT: &str = "molt> ";

/// Results shown by the `search` command.
const SEARCH_LIMIT: u32 = 10;

enum Flow {
    Continue,
    Exit,
}

/// Run the interactive session until the user leaves.
pub async fn run_repl(state: &mut AppState) -> anyhow::Result<()> {
    print_welcome_banner(
        state.agent.chat().model(),
        state.agent.chat().streaming(),
        state.agent.credential().is_set(),
        &state.config_path,
    );

    let (mut input, _writer) = ReplInput::new(PROMPT)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let line = match input.read_line().await {
            InputEvent::Message(line) => line,
            InputEvent::Eof | InputEvent::Interrupted => break,
        };

        let Some(command) = commands::parse(&line) else {
            continue;
        };
        tracing::debug!(?command, "repl command");

        if let Flow::Exit = run_command(command, state, &mut input).await {
            break;
        }
    }

    println!();
    println!("  {}", style("Goodbye!").dim());
    Ok(())
}

async fn run_command(command: ReplCommand, state: &mut AppState, input: &mut ReplInput) -> Flow {
    let agent = &mut state.agent;

    match command {
        ReplCommand::Quit => return Flow::Exit,

        ReplCommand::Help => commands::print_help(),

        ReplCommand::Unknown(other) => print_warning(&format!(
            "Unknown command: {other}. Type {} for options.",
            style("help").cyan()
        )),

        ReplCommand::Register => {
            let Some(name) = input.read_field("Agent name: ").await else {
                return Flow::Continue;
            };
            if name.is_empty() {
                print_warning("A name is required");
                return Flow::Continue;
            }
            let Some(description) = input.read_field("Description: ").await else {
                return Flow::Continue;
            };
            match agent.register(&name, &description).await {
                Ok(registration) => renderer::print_registration(
                    &name,
                    &registration,
                    registration.api_key.is_some() && agent.credential().is_set(),
                ),
                Err(e) => print_error(&format!("Registration failed: {e}")),
            }
        }

        ReplCommand::SetKey => {
            let Some(key) = input.read_field("API key: ").await else {
                return Flow::Continue;
            };
            if agent.set_api_key(&key) {
                print_success("API key set for this session");
            } else {
                print_warning("API key cannot be blank");
            }
        }

        ReplCommand::Profile => match agent.profile().await {
            Ok(profile) => renderer::print_profile(&profile),
            Err(e) => print_error(&format!("Failed to get profile: {e}")),
        },

        ReplCommand::Feed => {
            let Some(raw) = input.read_field("Sort (hot/new/top) [hot]: ").await else {
                return Flow::Continue;
            };
            let sort = parse_sort(&raw);
            match agent.feed(sort, state.config.browse.feed_limit).await {
                Ok(posts) => renderer::print_posts(&posts),
                Err(e) => print_error(&format!("Failed to fetch feed: {e}")),
            }
        }

        ReplCommand::Post => {
            let Some(submolt) = input.read_field("Submolt: ").await else {
                return Flow::Continue;
            };
            let Some(title) = input.read_field("Title: ").await else {
                return Flow::Continue;
            };
            if submolt.is_empty() || title.is_empty() {
                print_warning("Submolt and title are required");
                return Flow::Continue;
            }
            let Some(content) = input.read_field("Content (optional): ").await else {
                return Flow::Continue;
            };
            match agent
                .create_post(&submolt, &title, Some(&content), None)
                .await
            {
                Ok(post) if post.id.is_empty() => print_success("Post created"),
                Ok(post) => print_success(&format!("Post created ({})", post.id)),
                Err(e) => print_error(&format!("Failed to create post: {e}")),
            }
        }

        ReplCommand::Search => {
            let Some(query) = input.read_field("Search: ").await else {
                return Flow::Continue;
            };
            if query.is_empty() {
                return Flow::Continue;
            }
            match agent.search(&query, SEARCH_LIMIT).await {
                Ok(posts) => renderer::print_posts(&posts),
                Err(e) => print_error(&format!("Search failed: {e}")),
            }
        }

        ReplCommand::Submolts => match agent.submolts().await {
            Ok(submolts) => renderer::print_submolts(&submolts),
            Err(e) => print_error(&format!("Failed to list submolts: {e}")),
        },

        ReplCommand::Browse => actions::browse(agent, false).await,

        ReplCommand::Heartbeat => actions::browse(agent, true).await,

        ReplCommand::Ask => {
            let Some(question) = input.read_field("Question: ").await else {
                return Flow::Continue;
            };
            if !question.is_empty() {
                actions::ask(agent, &question, None).await;
            }
        }
    }

    Flow::Continue
}

/// Blank or unknown input falls back to `hot`.
fn parse_sort(raw: &str) -> FeedSort {
    if raw.trim().is_empty() {
        return FeedSort::Hot;
    }
    raw.parse().unwrap_or_else(|_| {
        print_warning(&format!("Unknown sort '{}', using hot", raw.trim()));
        FeedSort::Hot
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort(""), FeedSort::Hot);
        assert_eq!(parse_sort("new"), FeedSort::New);
        assert_eq!(parse_sort(" TOP "), FeedSort::Top);
        assert_eq!(parse_sort("sideways"), FeedSort::Hot);
    }
}
