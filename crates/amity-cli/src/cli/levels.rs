//! `amity levels` -- friendship ladder listing.

use console::style;

use amity_core::catalog;

/// Print the friendship ladder, styled or as JSON.
pub fn list_levels(json: bool) -> anyhow::Result<()> {
    let ladder: Vec<_> = (1..=catalog::max_level())
        .filter_map(|level| catalog::level_descriptor(level).ok())
        .collect();

    if json {
        let entries: Vec<_> = ladder
            .iter()
            .map(|desc| {
                let threshold = if desc.level == catalog::max_level() {
                    serde_json::Value::Null
                } else {
                    serde_json::json!(desc.messages_to_advance)
                };
                serde_json::json!({
                    "level": desc.level,
                    "display_name": desc.display_name,
                    "messages_to_advance": threshold,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("Friendship ladder").bold());
    println!();
    for desc in ladder {
        let threshold = if desc.level == catalog::max_level() {
            "terminal".to_string()
        } else {
            format!("{} messages", desc.messages_to_advance)
        };
        println!(
            "  {}  {}  {}",
            style(format!("{}.", desc.level)).cyan(),
            style(format!("{:<14}", desc.display_name)).bold(),
            style(threshold).dim()
        );
    }
    println!();
    Ok(())
}
