//! Scripted provider fakes for conversation and session tests.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use futures_util::stream;

use amity_types::llm::{ProviderError, SessionConfig};

use crate::llm::{ChatProvider, ChatSession, ReplyStream};

/// One scripted reply: the items the session stream will yield, in order.
pub(crate) type ReplyScript = Vec<Result<String, ProviderError>>;

/// A provider whose sessions replay pre-scripted replies.
///
/// Every opened session records its `SessionConfig` for later inspection.
/// Reply scripts are popped from a shared queue, one per `send_streaming`
/// call, across all sessions (so a rebuilt session continues the script).
/// When the queue is empty the session answers with a single "hi" fragment.
pub(crate) struct ScriptedProvider {
    opened: Arc<Mutex<Vec<SessionConfig>>>,
    scripts: Arc<Mutex<VecDeque<ReplyScript>>>,
    attempts: Arc<Mutex<usize>>,
    fail_open_at: Arc<Mutex<HashSet<usize>>>,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self {
            opened: Arc::new(Mutex::new(Vec::new())),
            scripts: Arc::new(Mutex::new(VecDeque::new())),
            attempts: Arc::new(Mutex::new(0)),
            fail_open_at: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Handle to the recorded session configs, in open order.
    pub(crate) fn opened(&self) -> Arc<Mutex<Vec<SessionConfig>>> {
        Arc::clone(&self.opened)
    }

    /// Queue the reply for the next unscripted `send_streaming` call.
    pub(crate) fn push_script(&self, script: ReplyScript) {
        self.scripts.lock().unwrap().push_back(script);
    }

    /// Make the N-th `open_session` attempt fail (0-based, counting every
    /// call whether or not it succeeds).
    pub(crate) fn fail_open_at(&self, attempt: usize) {
        self.fail_open_at.lock().unwrap().insert(attempt);
    }
}

impl ChatProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn open_session(&self, config: SessionConfig) -> Result<Box<dyn ChatSession>, ProviderError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            let current = *attempts;
            *attempts += 1;
            current
        };
        if self.fail_open_at.lock().unwrap().contains(&attempt) {
            return Err(ProviderError::Unavailable(
                "scripted open failure".to_string(),
            ));
        }
        self.opened.lock().unwrap().push(config);
        Ok(Box::new(ScriptedSession {
            scripts: Arc::clone(&self.scripts),
        }))
    }
}

struct ScriptedSession {
    scripts: Arc<Mutex<VecDeque<ReplyScript>>>,
}

impl ChatSession for ScriptedSession {
    fn send_streaming(&mut self, _text: &str) -> ReplyStream {
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| vec![Ok("hi".to_string())]);
        Box::pin(stream::iter(script))
    }
}
