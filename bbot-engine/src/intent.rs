//! Keyword-based intent classification.
//!
//! The rule table is an ordered priority list: for each intent in declared
//! order, the first whole-word keyword hit wins. Greeting outranks the
//! sentiment-ish intents so that "hi, feeling good" greets instead of
//! celebrating. "tired" and the sleep keywords share the generic tired path;
//! there is no separate sleep intent.

use bbot_core::Intent;
use regex::Regex;
use tracing::debug;

/// Canonical keyword priority table. Order is load-bearing; matching stops at
/// the first intent with any hit.
const KEYWORD_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon", "sup", "what's up"],
    ),
    (
        Intent::Stress,
        &["stress", "stressed", "pressure", "tension", "overwhelm"],
    ),
    (
        Intent::Anxious,
        &["anxious", "anxiety", "panic", "worried", "nervous", "scared"],
    ),
    (
        Intent::Overwhelmed,
        &["overwhelmed", "too much", "can't handle", "drowning", "buried", "swamped"],
    ),
    (
        Intent::Tired,
        &["tired", "exhausted", "fatigue", "drained", "sleepy", "no energy", "can't sleep", "insomnia"],
    ),
    (
        Intent::Sad,
        &["sad", "unhappy", "cry", "crying", "depressed", "down", "blue", "lonely", "alone"],
    ),
    (
        Intent::Burnout,
        &["burnout", "burned out", "hate work", "quit", "give up"],
    ),
    (
        Intent::Positive,
        &["good", "great", "happy", "better", "well", "fine", "awesome", "amazing", "excited"],
    ),
    (
        Intent::JokeRequest,
        &["joke", "funny", "laugh", "humor", "fun", "crack", "entertain", "cheer me up"],
    ),
    (
        Intent::Coffee,
        &["coffee", "caffeine", "espresso", "latte"],
    ),
];

/// Maps raw text to one [`Intent`] via the ordered keyword table.
///
/// Matching is whole-word/phrase (word-boundary anchored), so "hi" does not
/// fire inside "this". Classification is total: no hit resolves to
/// [`Intent::General`], never an error.
pub struct IntentClassifier {
    rules: Vec<(Intent, Vec<Regex>)>,
}

impl IntentClassifier {
    /// Builds the classifier, compiling one word-boundary regex per keyword.
    pub fn new() -> Self {
        let rules = KEYWORD_RULES
            .iter()
            .map(|(intent, keywords)| {
                let patterns = keywords
                    .iter()
                    .filter_map(|keyword| {
                        Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).ok()
                    })
                    .collect();
                (*intent, patterns)
            })
            .collect();
        Self { rules }
    }

    /// Classifies lower-cased text against the table in declared order.
    pub fn classify(&self, text: &str) -> Intent {
        let text = text.to_lowercase();
        for (intent, patterns) in &self.rules {
            if patterns.iter().any(|pattern| pattern.is_match(&text)) {
                debug!(intent = %intent.as_str(), "keyword intent matched");
                return *intent;
            }
        }
        Intent::General
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
