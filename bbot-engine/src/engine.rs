//! Engine facade consumed by the caller layer.
//!
//! External interactions: the caller resolves user identity, fetches
//! [`UserContext`] (latest mood entry, latest stress figure, active goals) and
//! the recent history window, then calls [`ChatEngine::generate_reply`]. The
//! caller appends the exchange to memory afterwards; the engine is stateless
//! across calls apart from its RNG.

use std::sync::{Mutex, PoisonError};

use bbot_core::{ConversationTurn, Intent, Sentiment, Speaker, UserContext};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::{composer, context, intent::IntentClassifier, sentiment};

/// The conversational response engine.
///
/// `&self` throughout and `Send + Sync`; phrase selection draws from an
/// internal seedable RNG behind a mutex. Methods never fail and never return
/// an empty reply.
pub struct ChatEngine {
    classifier: IntentClassifier,
    rng: Mutex<StdRng>,
}

impl ChatEngine {
    /// Engine with entropy-seeded randomness.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine with a fixed seed. Same seed plus same inputs reproduce the same
    /// replies; used for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Generates the reply for one user message.
    ///
    /// `history` is the user's recent window, oldest first; only the most
    /// recent bot turn is consulted, to resolve answers to a pending question.
    /// Memory is not updated here: appending the exchange is the caller's job.
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub fn generate_reply(
        &self,
        user_id: &str,
        context: &UserContext,
        message: &str,
        history: &[ConversationTurn],
    ) -> String {
        let message_lower = message.to_lowercase();

        let resolved = history
            .iter()
            .rev()
            .find(|turn| turn.speaker == Speaker::Bot)
            .and_then(|turn| context::resolve(&message_lower, &turn.text));
        let intent = resolved.unwrap_or_else(|| self.classifier.classify(&message_lower));

        debug!(
            intent = %intent.as_str(),
            mood = %context.mood.as_str(),
            stress = context.clamped_stress(),
            from_context = resolved.is_some(),
            "intent resolved"
        );

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let reply = composer::compose_reply(intent, context, &message_lower, &mut *rng);

        info!(
            intent = %intent.as_str(),
            reply_len = reply.len(),
            "reply composed"
        );
        reply
    }

    /// Classifies a message against the keyword table. Independently callable.
    pub fn classify_intent(&self, message: &str) -> Intent {
        self.classifier.classify(message)
    }

    /// Lexicon sentiment for a message. Independently callable.
    pub fn analyze_sentiment(&self, message: &str) -> Sentiment {
        sentiment::analyze_sentiment(message)
    }
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new()
    }
}
