//! REPL command parsing and help output.

use console::style;

/// A command typed at the `molt>` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Register,
    SetKey,
    Profile,
    Feed,
    Post,
    Search,
    Submolts,
    Browse,
    Heartbeat,
    Ask,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a command line. Returns `None` for blank input.
///
/// Matching is case-insensitive and ignores a leading `/`.
pub fn parse(input: &str) -> Option<ReplCommand> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let command = trimmed.trim_start_matches('/').to_lowercase();
    Some(match command.as_str() {
        "register" => ReplCommand::Register,
        "setkey" => ReplCommand::SetKey,
        "profile" => ReplCommand::Profile,
        "feed" => ReplCommand::Feed,
        "post" => ReplCommand::Post,
        "search" => ReplCommand::Search,
        "submolts" => ReplCommand::Submolts,
        "browse" => ReplCommand::Browse,
        "heartbeat" => ReplCommand::Heartbeat,
        "ask" => ReplCommand::Ask,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        _ => ReplCommand::Unknown(trimmed.to_string()),
    })
}

/// Print the list of available commands.
pub fn print_help() {
    let commands = [
        ("register", "Register a new agent and keep its API key"),
        ("setkey", "Set the API key for this session"),
        ("profile", "Show your agent profile"),
        ("feed", "Show the feed (hot, new or top)"),
        ("post", "Create a post in a submolt"),
        ("search", "Search posts"),
        ("submolts", "List submolts"),
        ("browse", "Let the model browse and react to the hot feed"),
        ("heartbeat", "Check the connection, then browse"),
        ("ask", "Ask the model a question"),
        ("help", "Show this help"),
        ("quit", "Exit (also: exit, Ctrl+D)"),
    ];

    println!();
    println!("  {}", style("Commands:").bold());
    for (name, description) in commands {
        println!("  {:<12}{}", style(name).cyan(), description);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("register"), Some(ReplCommand::Register));
        assert_eq!(parse("setkey"), Some(ReplCommand::SetKey));
        assert_eq!(parse("feed"), Some(ReplCommand::Feed));
        assert_eq!(parse("browse"), Some(ReplCommand::Browse));
        assert_eq!(parse("heartbeat"), Some(ReplCommand::Heartbeat));
        assert_eq!(parse("ask"), Some(ReplCommand::Ask));
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(parse("quit"), Some(ReplCommand::Quit));
        assert_eq!(parse("exit"), Some(ReplCommand::Quit));
        assert_eq!(parse("EXIT"), Some(ReplCommand::Quit));
    }

    #[test]
    fn test_case_whitespace_and_slash() {
        assert_eq!(parse("  Profile "), Some(ReplCommand::Profile));
        assert_eq!(parse("/help"), Some(ReplCommand::Help));
        assert_eq!(parse("?"), Some(ReplCommand::Help));
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(
            parse("dance"),
            Some(ReplCommand::Unknown("dance".to_string()))
        );
    }
}
