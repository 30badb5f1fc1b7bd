//! One-step context disambiguation.
//!
//! When the bot's immediately preceding utterance asked a constrained yes/no
//! question, a bare "yes" or "no" should resolve against that question instead
//! of the generic keyword table. The pending question is recognized through a
//! typed [`PendingTopic`] derived from the bot's last message; only one pending
//! topic is supported at a time (one-step lookback, not a dialogue state
//! machine).

use bbot_core::Intent;
use tracing::debug;

const AFFIRMATIVE_TOKENS: &[&str] = &["yes", "sure", "okay", "try"];
const NEGATIVE_TOKENS: &[&str] = &["no", "nah", "pass"];

/// A constrained question the bot is waiting on an answer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTopic {
    /// The bot offered a guided breathing exercise.
    BreathingExercise,
}

impl PendingTopic {
    /// Recognizes a pending topic from the bot's last utterance, if any.
    pub fn from_bot_utterance(text: &str) -> Option<PendingTopic> {
        if text.to_lowercase().contains("breathing exercise") {
            Some(PendingTopic::BreathingExercise)
        } else {
            None
        }
    }
}

/// Resolves a user reply against the bot's last utterance.
///
/// Returns the override intent when the last bot message carries a pending
/// topic and the reply contains an affirmative or negative token; otherwise
/// `None`, and the caller falls through to the keyword classifier. Token
/// matching is whole-word, so "no" does not fire inside "know".
pub fn resolve(user_text: &str, last_bot_utterance: &str) -> Option<Intent> {
    let topic = PendingTopic::from_bot_utterance(last_bot_utterance)?;

    match topic {
        PendingTopic::BreathingExercise => {
            if contains_any_token(user_text, AFFIRMATIVE_TOKENS) {
                debug!(topic = ?topic, "affirmative answer to pending question");
                Some(Intent::BreathingGuide)
            } else if contains_any_token(user_text, NEGATIVE_TOKENS) {
                debug!(topic = ?topic, "negative answer to pending question");
                Some(Intent::DeclinedExercise)
            } else {
                None
            }
        }
    }
}

fn contains_any_token(text: &str, tokens: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| tokens.iter().any(|t| word.eq_ignore_ascii_case(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFER: &str = "Would you like to try a quick breathing exercise?";

    #[test]
    fn affirmative_resolves_to_guide() {
        assert_eq!(resolve("yes", OFFER), Some(Intent::BreathingGuide));
        assert_eq!(resolve("yes please", OFFER), Some(Intent::BreathingGuide));
        assert_eq!(resolve("sure!", OFFER), Some(Intent::BreathingGuide));
        assert_eq!(resolve("okay, let's try", OFFER), Some(Intent::BreathingGuide));
    }

    #[test]
    fn negative_resolves_to_decline() {
        assert_eq!(resolve("no", OFFER), Some(Intent::DeclinedExercise));
        assert_eq!(resolve("nah, pass", OFFER), Some(Intent::DeclinedExercise));
    }

    #[test]
    fn token_matching_is_whole_word() {
        // "know" must not read as "no".
        assert_eq!(resolve("I don't know", OFFER), None);
        // "yesterday" must not read as "yes".
        assert_eq!(resolve("like yesterday", OFFER), None);
    }

    #[test]
    fn unrelated_bot_message_never_resolves() {
        assert_eq!(resolve("yes", "I hear you. What's on your mind?"), None);
        assert_eq!(resolve("no", ""), None);
    }

    #[test]
    fn unclear_answer_falls_through() {
        assert_eq!(resolve("maybe later", OFFER), None);
    }

    #[test]
    fn topic_recognition_is_case_insensitive() {
        assert_eq!(
            PendingTopic::from_bot_utterance("A quick BREATHING EXERCISE could help."),
            Some(PendingTopic::BreathingExercise)
        );
        assert_eq!(PendingTopic::from_bot_utterance("How about a walk?"), None);
    }
}
