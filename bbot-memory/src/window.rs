//! Bounded FIFO window of recent conversation turns for one user.

use std::collections::VecDeque;

use bbot_core::{ConversationTurn, Speaker};
use serde::{Deserialize, Serialize};

/// Default window capacity in turns: 5 user/bot pairs.
pub const DEFAULT_CAPACITY_TURNS: usize = 10;

/// Ordered, bounded sequence of [`ConversationTurn`], oldest first.
///
/// Insertion past capacity silently evicts the oldest turn. Serializable so the
/// caller layer can persist and restore windows through its own storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationWindow {
    turns: VecDeque<ConversationTurn>,
    capacity: usize,
}

impl ConversationWindow {
    /// Creates an empty window with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY_TURNS)
    }

    /// Creates an empty window holding at most `capacity` turns (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a turn, evicting the oldest when full.
    pub fn push(&mut self, turn: ConversationTurn) {
        if self.turns.len() == self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Turns in order, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    /// Text of the most recent bot turn, if any.
    pub fn last_bot_utterance(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.speaker == Speaker::Bot)
            .map(|t| t.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ConversationWindow {
    fn default() -> Self {
        Self::new()
    }
}
