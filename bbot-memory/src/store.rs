//! Thread-safe map of per-user conversation windows.
//!
//! External interactions: the caller layer appends each exchange after the
//! engine replies, and reads a window back to supply `history` on the next call.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use bbot_core::ConversationTurn;
use tracing::debug;

use crate::window::{ConversationWindow, DEFAULT_CAPACITY_TURNS};

/// In-memory store of rolling conversation windows, keyed by user id.
///
/// Cloning is cheap and shares the underlying map. Windows are created lazily
/// on first append. Not persisted; conversation records that must survive a
/// restart belong to the external history collaborator.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    windows: Arc<RwLock<HashMap<String, ConversationWindow>>>,
    capacity: usize,
}

impl ConversationStore {
    /// Creates an empty store with the default per-user window capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_TURNS)
    }

    /// Creates an empty store whose windows hold at most `capacity` turns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            windows: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Appends a turn to the user's window, creating the window on first use.
    pub fn append(&self, user_id: &str, turn: ConversationTurn) {
        let mut windows = self
            .windows
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let window = windows
            .entry(user_id.to_string())
            .or_insert_with(|| ConversationWindow::with_capacity(self.capacity));
        window.push(turn);
        debug!(user_id, window_len = window.len(), "turn appended");
    }

    /// The user's turns, oldest first. Empty when the user has no window yet.
    pub fn window(&self, user_id: &str) -> Vec<ConversationTurn> {
        let windows = self.windows.read().unwrap_or_else(PoisonError::into_inner);
        windows
            .get(user_id)
            .map(|w| w.turns().cloned().collect())
            .unwrap_or_default()
    }

    /// Text of the user's most recent bot turn, if any.
    pub fn last_bot_utterance(&self, user_id: &str) -> Option<String> {
        let windows = self.windows.read().unwrap_or_else(PoisonError::into_inner);
        windows
            .get(user_id)
            .and_then(|w| w.last_bot_utterance())
            .map(str::to_string)
    }

    /// Number of users with a window.
    pub fn len(&self) -> usize {
        let windows = self.windows.read().unwrap_or_else(PoisonError::into_inner);
        windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every window. Used for test isolation.
    pub fn clear(&self) {
        let mut windows = self
            .windows
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        windows.clear();
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
