//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: credential and config loading,
//! profile setup, welcome banner, then the input loop that drives
//! `Conversation::submit` and renders its event stream (spinner until the
//! first fragment, raw fragment printing, styled level-up notices).

use std::io::Write;

use console::style;
use futures_util::StreamExt;
use tracing::info;

use amity_core::catalog;
use amity_core::chat::{Conversation, ExchangeEvent, FALLBACK_REPLY};
use amity_infra::config::{load_global_config, resolve_data_dir};
use amity_infra::credentials;
use amity_infra::llm::gemini::GeminiClient;
use amity_types::chat::{EntryKind, Sender};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::setup;

/// Run the interactive chat loop.
pub async fn run_chat_loop(
    name: Option<String>,
    persona: Option<String>,
) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let config = load_global_config(&data_dir).await;

    // A missing credential is terminal for the whole conversation feature,
    // so it aborts setup instead of entering the chat error path.
    let api_key = credentials::provider_api_key().ok_or_else(|| {
        anyhow::anyhow!("no API key found; set AMITY_API_KEY or GEMINI_API_KEY")
    })?;
    let provider = GeminiClient::new(api_key, &config)?;
    let model = provider.model().to_string();

    let profile = setup::resolve_profile(name, persona)?;
    info!(persona = %profile.persona(), "Starting conversation");

    let mut conversation =
        Conversation::open(provider, profile.clone(), config.reply_language.clone())?;

    print_welcome_banner(&profile, &model);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Until next time.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to leave, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Level => print_level_status(&conversation),
                        ChatCommand::History => print_history(&conversation, profile.name()),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Until next time.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                        }
                    }
                    continue;
                }

                // Thinking spinner until the first fragment arrives
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let mut first_token = false;
                let mut failed = false;
                let mut level_up: Option<(u32, &'static str)> = None;

                {
                    let mut events = conversation.submit(&text);
                    while let Some(event) = events.next().await {
                        match event {
                            ExchangeEvent::Fragment(fragment) => {
                                if !first_token {
                                    spinner.finish_and_clear();
                                    first_token = true;
                                    print!("\n  {} ", style(profile.name()).cyan().bold());
                                    let _ = std::io::stdout().flush();
                                }
                                print!("{fragment}");
                                let _ = std::io::stdout().flush();
                            }
                            ExchangeEvent::ReplyFinalized { failed: f } => {
                                failed = f;
                            }
                            ExchangeEvent::LevelUp {
                                level,
                                display_name,
                            } => {
                                level_up = Some((level, display_name));
                            }
                        }
                    }
                }

                if !first_token {
                    spinner.finish_and_clear();
                }

                if failed {
                    println!(
                        "\n  {} {}",
                        style("!").yellow().bold(),
                        style(FALLBACK_REPLY).italic()
                    );
                } else if first_token {
                    println!();
                }

                if let Some((level, display_name)) = level_up {
                    println!();
                    println!(
                        "  {} {}",
                        style("*").magenta().bold(),
                        style(format!("Friendship level {level}: {display_name}")).magenta()
                    );
                    if conversation.instruction_lag() {
                        println!(
                            "  {}",
                            style("(tone update could not be applied yet; continuing with the previous one)")
                                .dim()
                        );
                    }
                    println!();
                }
            }
        }
    }

    conversation.close();
    Ok(())
}

/// Print the current friendship level, progress, and any instruction lag.
fn print_level_status(conversation: &Conversation<GeminiClient>) {
    let progression = conversation.progression();
    let Ok(desc) = catalog::level_descriptor(progression.current_level) else {
        return;
    };

    println!();
    println!(
        "  {} {}",
        style(format!("Level {}:", progression.current_level)).bold(),
        style(desc.display_name).cyan()
    );
    if progression.current_level == catalog::max_level() {
        println!(
            "  {}",
            style(format!(
                "{} exchanges at the highest level",
                progression.progress_count
            ))
            .dim()
        );
    } else {
        println!(
            "  {}",
            style(format!(
                "{}/{} exchanges to the next level",
                progression.progress_count, desc.messages_to_advance
            ))
            .dim()
        );
    }
    if conversation.instruction_lag() {
        println!(
            "  {}",
            style("Tone is lagging one level behind (last update failed).").yellow()
        );
    }
    println!();
}

/// Print the last 20 log entries, notices included.
fn print_history(conversation: &Conversation<GeminiClient>, bot_name: &str) {
    println!();
    let log = conversation.log();
    let start = log.len().saturating_sub(20);
    for entry in &log[start..] {
        match entry.kind {
            EntryKind::LevelNotice => {
                println!("  {} {}", style("*").magenta(), style(&entry.text).dim());
            }
            EntryKind::Normal => {
                let label = match entry.sender {
                    Sender::User => style("You").green().bold(),
                    Sender::Bot => style(bot_name).cyan().bold(),
                };
                let preview = if entry.text.chars().count() > 100 {
                    let short: String = entry.text.chars().take(97).collect();
                    format!("{short}...")
                } else {
                    entry.text.clone()
                };
                println!("  {label} {preview}");
            }
        }
    }
    println!();
}
