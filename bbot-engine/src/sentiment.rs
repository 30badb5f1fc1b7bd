//! Lexicon-based sentiment classification.
//!
//! Counts positive and negative lexicon hits by substring containment, which
//! is intentionally looser than the intent classifier's whole-word matching.
//! Pure function; no state.

use bbot_core::Sentiment;

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "better", "well", "fine", "excellent", "wonderful", "amazing",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "sad", "stressed", "anxious", "overwhelmed", "tired", "exhausted", "depressed", "awful",
];

/// Classifies message sentiment by lexicon counting.
///
/// Positive hits > negative hits gives `Positive`, the reverse gives
/// `Negative`, a tie (including zero hits) gives `Neutral`.
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();

    let positive = POSITIVE_WORDS
        .iter()
        .filter(|word| lower.contains(**word))
        .count();
    let negative = NEGATIVE_WORDS
        .iter()
        .filter(|word| lower.contains(**word))
        .count();

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_decide_polarity() {
        assert_eq!(analyze_sentiment("feeling great today"), Sentiment::Positive);
        assert_eq!(analyze_sentiment("so tired and stressed"), Sentiment::Negative);
        assert_eq!(analyze_sentiment("just a normal day"), Sentiment::Neutral);
    }

    #[test]
    fn tie_is_neutral() {
        assert_eq!(analyze_sentiment("good but tired"), Sentiment::Neutral);
        assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn matching_is_substring_based() {
        // "goodness" still counts as a "good" hit; looseness is intentional.
        assert_eq!(analyze_sentiment("oh my goodness"), Sentiment::Positive);
    }

    #[test]
    fn analysis_is_idempotent() {
        for text in ["great", "awful mess", "", "GOOD and BAD and sad"] {
            assert_eq!(analyze_sentiment(text), analyze_sentiment(text));
        }
    }
}
