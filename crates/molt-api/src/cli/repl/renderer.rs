//! Console rendering for social data, browse summaries and model answers.
//!
//! Lists go through comfy-table, whole model answers through termimad.
//! Streaming answers bypass markdown and are printed token by token by the
//! observer.

use std::fmt::Display;
use std::io::Write;

use chrono::DateTime;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use termimad::MadSkin;

use molt_core::agent::browse::{ActionResult, BrowseReport};
use molt_types::social::{AgentProfile, Post, Registration, Submolt};

/// Widest title shown in post tables.
const TITLE_WIDTH: usize = 50;

/// Markdown renderer for whole (non-streamed) answers.
pub struct Renderer {
    skin: MadSkin,
}

impl Renderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self { skin }
    }

    pub fn render_markdown(&self, markdown: &str) -> String {
        format!("{}", self.skin.term_text(markdown))
    }

    pub fn print_answer(&self, markdown: &str) {
        println!();
        print!("{}", self.render_markdown(markdown));
        let _ = std::io::stdout().flush();
        println!();
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a token as it arrives, without a trailing newline.
pub fn print_streaming_token(token: &str) {
    print!("{token}");
    let _ = std::io::stdout().flush();
}

pub fn print_error(error: &dyn Display) {
    println!("  {} {error}", style("x").red().bold());
}

pub fn print_warning(message: &str) {
    println!("  {} {message}", style("!").yellow().bold());
}

pub fn print_success(message: &str) {
    println!("  {} {message}", style("+").green().bold());
}

pub fn print_profile(profile: &AgentProfile) {
    println!();
    println!("  {}", style(&profile.name).cyan().bold());
    if let Some(description) = profile.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  {}", style(description).dim());
    }
    println!();
    println!("  {}  {}", style("Karma:").bold(), profile.karma);
    if let Some(created) = profile.created_at.as_deref() {
        println!("  {}  {}", style("Created:").bold(), format_date(created));
    }
    println!();
}

pub fn print_registration(name: &str, registration: &Registration, key_adopted: bool) {
    println!();
    print_success(&format!("Registered {}", style(name).cyan().bold()));
    if key_adopted {
        println!("  {}", style("API key stored for this session").dim());
    } else {
        print_warning("The response carried no API key");
    }
    if let Some(url) = &registration.claim_url {
        println!("  {}  {}", style("Claim URL:").bold(), url);
    }
    if let Some(code) = &registration.verification_code {
        println!("  {}  {}", style("Verification code:").bold(), code);
    }
    println!();
}

pub fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("  {}", style("No posts found.").dim());
        return;
    }
    println!("{}", posts_table(posts));
}

pub fn print_submolts(submolts: &[Submolt]) {
    if submolts.is_empty() {
        println!("  {}", style("No submolts found.").dim());
        return;
    }
    println!("{}", submolts_table(submolts));
}

/// Summary line after a browsing pass.
pub fn print_report(report: &BrowseReport) {
    let failed = report
        .items
        .iter()
        .filter(|item| matches!(item.action, ActionResult::Failed(_)))
        .count();

    println!();
    println!(
        "  {} {} of {} posts considered: {} upvoted, {} commented, {} skipped",
        style("Done.").green().bold(),
        report.items.len(),
        report.feed_size,
        report.upvotes(),
        report.comments(),
        report.skipped(),
    );
    if failed > 0 {
        print_warning(&format!("{failed} action(s) failed"));
    }
    println!();
}

fn posts_table(posts: &[Post]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Score").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Author").fg(Color::White),
        Cell::new("Submolt").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for post in posts {
        let score = Cell::new(post.score);
        let score = if post.score > 0 {
            score.fg(Color::Green)
        } else if post.score < 0 {
            score.fg(Color::Red)
        } else {
            score
        };

        table.add_row(vec![
            score,
            Cell::new(truncate_chars(&post.title, TITLE_WIDTH)),
            Cell::new(&post.author),
            Cell::new(format!("m/{}", post.submolt)),
            Cell::new(&post.id).fg(Color::DarkGrey),
        ]);
    }

    table
}

fn submolts_table(submolts: &[Submolt]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for submolt in submolts {
        table.add_row(vec![
            Cell::new(format!("m/{}", submolt.name)).fg(Color::Cyan),
            Cell::new(submolt.description.as_deref().unwrap_or("")),
        ]);
    }

    table
}

/// Cut `text` to at most `max` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Show RFC 3339 timestamps as a date; anything else as-is.
fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
