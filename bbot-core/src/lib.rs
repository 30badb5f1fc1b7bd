//! # bbot-core
//!
//! Core types for the BurnAware chat engine: [`UserContext`], [`Mood`], conversation
//! turns, [`Intent`] and [`Sentiment`] labels, the error taxonomy, and tracing
//! initialization. Transport-agnostic; used by bbot-memory, bbot-engine and bbot-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{BbotError, Result};
pub use logger::init_tracing;
pub use types::{
    ConversationTurn, Intent, Mood, Sentiment, Speaker, UserContext, STRESS_MAX, STRESS_MIN,
};
