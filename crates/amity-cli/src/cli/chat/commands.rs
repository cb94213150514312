//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for help, screen
//! clearing, progression status, and history review.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Show the current friendship level and progress.
    Level,
    /// Show recent conversation history.
    History,
    /// Exit the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    match trimmed.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/level" | "/lvl" => Some(ChatCommand::Level),
        "/history" => Some(ChatCommand::History),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}    {}", style("/help").cyan(), "Show this help message");
    println!("  {}   {}", style("/clear").cyan(), "Clear the screen");
    println!(
        "  {}   {}",
        style("/level").cyan(),
        "Show friendship level and progress"
    );
    println!(
        "  {} {}",
        style("/history").cyan(),
        "Show recent conversation history"
    );
    println!("  {}    {}", style("/exit").cyan(), "End the chat session");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_command() {
        assert_eq!(parse("hello there"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_parse_commands_and_aliases() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
        assert_eq!(parse("/LEVEL"), Some(ChatCommand::Level));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
        assert_eq!(parse("  /history  "), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse("/frobnicate"),
            Some(ChatCommand::Unknown("/frobnicate".to_string()))
        );
    }
}
