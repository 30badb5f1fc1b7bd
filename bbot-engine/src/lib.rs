//! # bbot-engine
//!
//! The conversational response engine: turns a free-text utterance plus
//! lightweight user context (mood, stress, goals, short history) into a
//! supportive reply.
//!
//! Pipeline: [`context::resolve`] checks whether the user is answering the
//! bot's pending question; otherwise [`IntentClassifier`] maps the message to
//! an [`bbot_core::Intent`] via an ordered keyword table; the composer then
//! builds the reply from categorized phrase banks, consulting the safety gate
//! before any humorous content. Every operation is total: the engine always
//! returns a non-empty string, for any input.

pub mod composer;
pub mod context;
pub mod engine;
pub mod intent;
pub mod phrasebank;
pub mod safety;
pub mod sentiment;

pub use composer::{MODERATE_HUMOR_PROBABILITY, POSITIVE_HUMOR_PROBABILITY};
pub use context::PendingTopic;
pub use engine::ChatEngine;
pub use intent::IntentClassifier;
pub use safety::allows_light_content;
pub use sentiment::analyze_sentiment;
