//! Conversation controller: one exchange at a time, plus progression.
//!
//! `Conversation` owns the message log and the friendship progression and
//! drives a full exchange: append the user entry and a bot placeholder,
//! stream the reply into the placeholder, finalize, then run the level
//! check. Level-ups append a notice entry and rebuild the provider session
//! with the carried (non-notice) history.
//!
//! The exchange is a small state machine, `Idle -> Sending -> Streaming ->
//! Finalizing -> Idle`, with at most one exchange in flight. The phase tag
//! is checked at submission time; together with the `&mut self` receiver
//! this enforces the single-exchange guarantee.

use async_stream::stream;
use futures_util::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use amity_types::chat::{LogEntry, Sender};
use amity_types::error::SessionError;
use amity_types::llm::{Turn, TurnRole};
use amity_types::persona::CompanionProfile;
use amity_types::progression::Progression;

use crate::catalog;
use crate::llm::ChatProvider;

use super::session::SessionManager;

/// Fixed reply substituted when a stream fails mid-flight.
pub const FALLBACK_REPLY: &str =
    "Sorry, I lost my train of thought just now. Could you say that again?";

/// Where the controller is within the current exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExchangePhase {
    Idle,
    Sending,
    Streaming,
    Finalizing,
}

/// Events emitted while an exchange runs.
///
/// Surfaces (the CLI loop, tests) consume these to observe streaming
/// progress without reaching into the log mid-exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeEvent {
    /// A reply fragment was appended to the in-flight bot entry.
    Fragment(String),
    /// The bot entry is finalized; input affordances may re-enable.
    /// `failed` is true when the fallback text was substituted.
    ReplyFinalized { failed: bool },
    /// Friendship advanced; a notice entry was appended to the log.
    LevelUp {
        level: u32,
        display_name: &'static str,
    },
}

/// A single active conversation with a configured companion.
pub struct Conversation<P: ChatProvider> {
    profile: CompanionProfile,
    sessions: SessionManager<P>,
    log: Vec<LogEntry>,
    progression: Progression,
    phase: ExchangePhase,
    /// True while the displayed level is ahead of the instruction the
    /// provider is actually honoring (a level-up rebuild failed).
    instruction_lag: bool,
    cancel: CancellationToken,
}

impl<P: ChatProvider> Conversation<P> {
    /// Start a conversation: opens the level-1 session.
    ///
    /// A [`SessionError`] here is terminal for the conversation feature and
    /// belongs to the setup stage, not the in-chat error path.
    pub fn open(
        provider: P,
        profile: CompanionProfile,
        reply_language: String,
    ) -> Result<Self, SessionError> {
        let sessions = SessionManager::open(provider, &profile, reply_language)?;
        Ok(Self {
            profile,
            sessions,
            log: Vec::new(),
            progression: Progression::new(),
            phase: ExchangePhase::Idle,
            instruction_lag: false,
            cancel: CancellationToken::new(),
        })
    }

    /// Submit a user message and drive the full exchange.
    ///
    /// Returns a stream of [`ExchangeEvent`]s; nothing happens until it is
    /// polled. Empty or whitespace-only input, or a submission while an
    /// exchange is already in flight, yields no events and mutates nothing.
    ///
    /// A stream error mid-reply is recoverable: the accumulated partial text
    /// is discarded, the fallback reply is substituted, and the exchange
    /// still counts toward progression. There is no automatic retry.
    pub fn submit(&mut self, input: &str) -> impl Stream<Item = ExchangeEvent> + Send + '_ {
        let text = input.trim().to_string();
        stream! {
            if text.is_empty() || self.phase != ExchangePhase::Idle {
                return;
            }

            self.phase = ExchangePhase::Sending;
            self.log.push(LogEntry::user(text.clone()));
            self.log.push(LogEntry::bot_pending());
            let reply_idx = self.log.len() - 1;

            self.phase = ExchangePhase::Streaming;
            let mut reply = self.sessions.current_mut().send_streaming(&text);
            let mut failed = false;
            while let Some(item) = reply.next().await {
                if self.cancel.is_cancelled() {
                    // The hosting surface is gone. A late fragment writing
                    // into a discarded log would corrupt displayed state, so
                    // stop applying anything; a cancelled conversation
                    // accepts no further exchanges.
                    debug!("conversation cancelled mid-stream, dropping reply");
                    return;
                }
                match item {
                    Ok(fragment) => {
                        self.log[reply_idx].text.push_str(&fragment);
                        yield ExchangeEvent::Fragment(fragment);
                    }
                    Err(err) => {
                        warn!(error = %err, "reply stream failed, substituting fallback text");
                        let entry = &mut self.log[reply_idx];
                        entry.text.clear();
                        entry.text.push_str(FALLBACK_REPLY);
                        failed = true;
                        break;
                    }
                }
            }
            drop(reply);

            // The bot entry's text is immutable from here on.
            self.phase = ExchangePhase::Finalizing;
            yield ExchangeEvent::ReplyFinalized { failed };

            if let Some(event) = self.run_level_check() {
                yield event;
            }
            self.phase = ExchangePhase::Idle;
        }
    }

    /// Count the completed exchange and advance the level when the
    /// threshold is crossed.
    ///
    /// On advance: appends the notice entry (strictly after the bot entry
    /// that triggered it), then rebuilds the session seeded with the full
    /// non-notice history. A rebuild failure is logged and swallowed; the
    /// committed level and log state are never rolled back.
    fn run_level_check(&mut self) -> Option<ExchangeEvent> {
        self.progression.record_exchange();

        let level = self.progression.current_level;
        if level >= catalog::max_level() {
            // Terminal level: the counter grows without bound.
            return None;
        }

        let (threshold, next) = match (
            catalog::level_descriptor(level),
            catalog::level_descriptor(level + 1),
        ) {
            (Ok(current), Ok(next)) => (current.messages_to_advance, next),
            (Err(err), _) | (_, Err(err)) => {
                // Unreachable with a validated setup; never crash the chat.
                warn!(error = %err, level, "level lookup failed during level check");
                return None;
            }
        };

        if self.progression.progress_count < threshold {
            return None;
        }

        self.progression.advance();
        let new_level = self.progression.current_level;
        self.log.push(LogEntry::notice(format!(
            "You and {} reached friendship level {}: {}.",
            self.profile.name(),
            new_level,
            next.display_name,
        )));
        info!(level = new_level, "Friendship level advanced");

        let history = self.history_for_provider();
        match self.sessions.rebuild(new_level, &self.profile, history) {
            Ok(()) => self.instruction_lag = false,
            Err(err) => {
                // The next exchange runs under the previous instruction set.
                warn!(
                    error = %err,
                    level = new_level,
                    "session rebuild failed; continuing on previous session"
                );
                self.instruction_lag = true;
            }
        }

        Some(ExchangeEvent::LevelUp {
            level: new_level,
            display_name: next.display_name,
        })
    }

    /// Provider-facing history: non-notice entries in log order, user
    /// entries as the "user" role and bot entries as the "model" role.
    pub fn history_for_provider(&self) -> Vec<Turn> {
        self.log
            .iter()
            .filter(|entry| entry.is_provider_visible())
            .map(|entry| Turn {
                role: match entry.sender {
                    Sender::User => TurnRole::User,
                    Sender::Bot => TurnRole::Model,
                },
                text: entry.text.clone(),
            })
            .collect()
    }

    /// The full message log, notices included.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Current friendship progression.
    pub fn progression(&self) -> Progression {
        self.progression
    }

    /// The configured companion profile.
    pub fn profile(&self) -> &CompanionProfile {
        &self.profile
    }

    /// Whether a new submission would be accepted.
    pub fn is_idle(&self) -> bool {
        self.phase == ExchangePhase::Idle && !self.cancel.is_cancelled()
    }

    /// Whether the displayed level is ahead of the active instruction set.
    pub fn instruction_lag(&self) -> bool {
        self.instruction_lag
    }

    /// Token observed by the exchange loop; cancel it when the hosting
    /// surface is torn down.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Tear the conversation down: in-flight fragments stop applying.
    pub fn close(&self) {
        self.cancel.cancel();
    }
}
