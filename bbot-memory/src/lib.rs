//! # bbot-memory
//!
//! Short-term conversation memory: a bounded FIFO [`ConversationWindow`] per user,
//! held in a thread-safe [`ConversationStore`]. The store is owned by the caller
//! layer and injected where needed; the engine itself is stateless across calls.
//!
//! Windows are created lazily on first append and live for the process lifetime.
//! The store guarantees data-race freedom only; a caller serving concurrent
//! requests for the same user id must serialize that user's writes to preserve
//! FIFO ordering.

mod store;
mod window;

pub use store::ConversationStore;
pub use window::{ConversationWindow, DEFAULT_CAPACITY_TURNS};
