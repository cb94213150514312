//! `amity personas` -- catalog listing.

use console::style;

use amity_core::catalog;
use amity_types::persona::PersonaKind;

/// Print the available personalities, styled or as JSON.
pub fn list_personas(json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<_> = PersonaKind::ALL
            .iter()
            .map(|kind| {
                let desc = catalog::descriptor(*kind);
                serde_json::json!({
                    "key": kind.to_string(),
                    "display_name": desc.display_name,
                    "description": desc.short_description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("Personalities").bold());
    println!();
    for kind in PersonaKind::ALL {
        let desc = catalog::descriptor(kind);
        println!(
            "  {}  {}",
            style(format!("{:<12}", kind.to_string())).cyan(),
            style(desc.display_name).bold()
        );
        println!("              {}", style(desc.short_description).dim());
    }
    println!();
    Ok(())
}
