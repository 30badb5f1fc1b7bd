//! Core types: user context, mood, conversation turn, intent and sentiment labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest valid self-reported stress figure.
pub const STRESS_MIN: i32 = 1;
/// Highest valid self-reported stress figure.
pub const STRESS_MAX: i32 = 10;

/// Mood label from the user's most recent mood journal entry.
///
/// Unknown labels from the caller parse to [`Mood::Neutral`]; an unrecognized
/// mood is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Okay,
    Positive,
    Happy,
    Anxious,
    Sad,
    Tired,
    Overwhelmed,
    Angry,
    Stressed,
    Bored,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Mood {
    /// Parses a mood label leniently. Unknown labels fall back to `Neutral`.
    pub fn parse(label: &str) -> Mood {
        match label.trim().to_lowercase().as_str() {
            "neutral" => Mood::Neutral,
            "okay" | "ok" => Mood::Okay,
            "positive" => Mood::Positive,
            "happy" => Mood::Happy,
            "anxious" => Mood::Anxious,
            "sad" => Mood::Sad,
            "tired" => Mood::Tired,
            "overwhelmed" => Mood::Overwhelmed,
            "angry" => Mood::Angry,
            "stressed" => Mood::Stressed,
            "bored" => Mood::Bored,
            _ => Mood::Neutral,
        }
    }

    /// Moods that pair with celebratory or humorous follow-ups.
    pub fn is_positive_valenced(self) -> bool {
        matches!(self, Mood::Okay | Mood::Positive | Mood::Happy)
    }

    /// Moods that suppress light content regardless of the stress figure.
    pub fn is_distressed(self) -> bool {
        matches!(self, Mood::Sad | Mood::Anxious | Mood::Overwhelmed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Okay => "okay",
            Mood::Positive => "positive",
            Mood::Happy => "happy",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Tired => "tired",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Angry => "angry",
            Mood::Stressed => "stressed",
            Mood::Bored => "bored",
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = std::convert::Infallible;

    /// Total parse: delegates to [`Mood::parse`], so unknown labels become
    /// `Neutral` rather than an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mood::parse(s))
    }
}

/// Lightweight user context supplied by the caller for one exchange.
///
/// Read-only to the engine. The caller normally clamps `stress_level` into
/// `[STRESS_MIN, STRESS_MAX]`; the engine clamps again before using it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    /// Display name; empty or absent means no name personalization.
    pub name: Option<String>,
    /// Most recent mood journal category.
    pub mood: Mood,
    /// Most recent stress figure, nominally 1-10.
    pub stress_level: i32,
    /// Titles of active (not yet completed) goals, most recent first.
    pub active_goals: Vec<String>,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            name: None,
            mood: Mood::Neutral,
            stress_level: 5,
            active_goals: Vec::new(),
        }
    }
}

impl UserContext {
    /// Stress figure clamped into the valid range. Out-of-range caller values
    /// are tolerated, never rejected.
    pub fn clamped_stress(&self) -> i32 {
        self.stress_level.clamp(STRESS_MIN, STRESS_MAX)
    }

    /// Name trimmed to a non-empty personalization value, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// A single utterance in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    /// Creates a user turn stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates a bot turn stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Discrete label for the user's communicative goal in one message.
///
/// The keyword classifier produces every variant except `BreathingGuide` and
/// `DeclinedExercise`, which only the context disambiguator emits.
/// `General` is the total-function fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Stress,
    Anxious,
    Overwhelmed,
    Tired,
    Sad,
    Burnout,
    Positive,
    JokeRequest,
    Coffee,
    BreathingGuide,
    DeclinedExercise,
    General,
}

impl Intent {
    /// Intents whose follow-up is a reflective question rather than
    /// encouragement or open exploration.
    pub fn is_distress(self) -> bool {
        matches!(
            self,
            Intent::Stress | Intent::Overwhelmed | Intent::Anxious | Intent::Sad
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Stress => "stress",
            Intent::Anxious => "anxious",
            Intent::Overwhelmed => "overwhelmed",
            Intent::Tired => "tired",
            Intent::Sad => "sad",
            Intent::Burnout => "burnout",
            Intent::Positive => "positive",
            Intent::JokeRequest => "joke_request",
            Intent::Coffee => "coffee",
            Intent::BreathingGuide => "breathing_guide",
            Intent::DeclinedExercise => "declined_exercise",
            Intent::General => "general",
        }
    }
}

/// Coarse message sentiment from lexicon counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_parse_falls_back_to_neutral() {
        assert_eq!(Mood::parse("anxious"), Mood::Anxious);
        assert_eq!(Mood::parse("OKAY"), Mood::Okay);
        assert_eq!(Mood::parse("???"), Mood::Neutral);
        assert_eq!(Mood::parse(""), Mood::Neutral);
    }

    #[test]
    fn mood_from_str_never_fails() {
        assert_eq!("overwhelmed".parse::<Mood>(), Ok(Mood::Overwhelmed));
        assert_eq!("no such mood".parse::<Mood>(), Ok(Mood::Neutral));
    }

    #[test]
    fn unknown_mood_label_deserializes_to_neutral() {
        // A persisted context may carry a label this enum has never heard of;
        // restoring it must not error.
        let mood: Mood = serde_json::from_str("\"confused\"").unwrap();
        assert_eq!(mood, Mood::Neutral);
        let known: Mood = serde_json::from_str("\"anxious\"").unwrap();
        assert_eq!(known, Mood::Anxious);
    }

    #[test]
    fn context_with_unknown_mood_restores() {
        let json = r#"{"name":null,"mood":"mysterious","stress_level":6,"active_goals":[]}"#;
        let ctx: UserContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.mood, Mood::Neutral);
        assert_eq!(ctx.stress_level, 6);
    }

    #[test]
    fn stress_is_clamped_both_ways() {
        let mut ctx = UserContext::default();
        ctx.stress_level = 42;
        assert_eq!(ctx.clamped_stress(), STRESS_MAX);
        ctx.stress_level = -3;
        assert_eq!(ctx.clamped_stress(), STRESS_MIN);
        ctx.stress_level = 7;
        assert_eq!(ctx.clamped_stress(), 7);
    }

    #[test]
    fn blank_name_is_not_a_display_name() {
        let mut ctx = UserContext::default();
        assert!(ctx.display_name().is_none());
        ctx.name = Some("   ".to_string());
        assert!(ctx.display_name().is_none());
        ctx.name = Some(" Mira ".to_string());
        assert_eq!(ctx.display_name(), Some("Mira"));
    }

    #[test]
    fn turn_constructors_set_speaker() {
        assert_eq!(ConversationTurn::user("hi").speaker, Speaker::User);
        assert_eq!(ConversationTurn::bot("hello").speaker, Speaker::Bot);
    }
}
