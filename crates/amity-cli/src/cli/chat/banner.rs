//! Welcome banner display for chat sessions.

use console::style;

use amity_core::catalog;
use amity_types::persona::CompanionProfile;

/// Print the welcome banner at the start of a conversation.
pub fn print_welcome_banner(profile: &CompanionProfile, model: &str) {
    let desc = catalog::descriptor(profile.persona());
    let first_level = catalog::level_descriptor(1)
        .map(|l| l.display_name)
        .unwrap_or("");

    println!();
    println!("  {}", style(profile.name()).cyan().bold());
    println!(
        "  {}",
        style(format!("{} · {}", desc.display_name, desc.short_description)).dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Level:").bold(),
        style(format!("1 · {first_level}")).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to leave").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
