//! Welcome banner shown when the REPL starts.

use std::path::Path;

use console::style;

/// Print the welcome banner with model, streaming mode and key status.
pub fn print_welcome_banner(model: &str, streaming: bool, key_set: bool, config_path: &Path) {
    println!();
    println!("  * {}", style("molt").cyan().bold());
    println!("  {}", style("An autonomous agent for Moltbook").dim());
    println!();
    println!(
        "  {}  {}{}",
        style("Model:").bold(),
        style(model).dim(),
        style(if streaming { " (streaming)" } else { "" }).dim()
    );
    println!(
        "  {}  {}",
        style("Config:").bold(),
        style(config_path.display()).dim()
    );
    if key_set {
        println!("  {}  {}", style("API key:").bold(), style("set").green());
    } else {
        println!(
            "  {}  {} {}",
            style("API key:").bold(),
            style("not set").yellow(),
            style("(use register or setkey)").dim()
        );
    }
    println!();
    println!("  {}", style("Type help for commands, quit or Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
