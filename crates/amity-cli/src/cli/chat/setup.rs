//! Interactive companion setup.
//!
//! Resolves the companion profile from CLI flags, prompting for whatever is
//! missing. Both the name and the personality are required before the first
//! session can be created.

use anyhow::Context;
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use amity_core::catalog;
use amity_types::persona::{CompanionProfile, PersonaKind};

/// Resolve a full profile from optional CLI flags.
///
/// Flag values are validated at this boundary: an unknown `--persona` key or
/// a blank `--name` is an error. Missing values are prompted interactively.
pub fn resolve_profile(
    name: Option<String>,
    persona: Option<String>,
) -> anyhow::Result<CompanionProfile> {
    let persona = match persona {
        Some(key) => catalog::lookup(&key)
            .with_context(|| format!("--persona '{key}' is not in the catalog"))?,
        None => prompt_persona()?,
    };

    let name = match name {
        Some(name) => name,
        None => prompt_name(persona)?,
    };

    CompanionProfile::new(&name, persona).context("--name must not be empty")
}

fn prompt_persona() -> anyhow::Result<PersonaKind> {
    let items: Vec<String> = PersonaKind::ALL
        .iter()
        .map(|kind| {
            let desc = catalog::descriptor(*kind);
            format!("{} - {}", desc.display_name, desc.short_description)
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Pick a personality")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(PersonaKind::ALL[selection])
}

fn prompt_name(persona: PersonaKind) -> anyhow::Result<String> {
    let desc = catalog::descriptor(persona);
    println!(
        "  {}",
        style(format!("Your {} needs a name.", desc.display_name)).dim()
    );

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Name")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("the name must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(name)
}
