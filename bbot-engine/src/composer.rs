//! Response composition.
//!
//! Builds the reply from up to four ordered clauses (empathy opener,
//! personalization, suggestion, follow-up), joined by single spaces. Explicit
//! joke requests and answers to a pending breathing-exercise offer bypass the
//! four-clause construction entirely. The safety gate is consulted before any
//! humorous content is emitted.

use bbot_core::{Intent, Mood, UserContext};
use rand::Rng;
use tracing::debug;

use crate::phrasebank::{self as bank, Bindings};
use crate::safety;

/// Chance of a celebratory follow-up when stress is low and mood is positive.
pub const POSITIVE_HUMOR_PROBABILITY: f64 = 0.3;
/// Chance of a gentle joke follow-up at moderate stress.
pub const MODERATE_HUMOR_PROBABILITY: f64 = 0.2;

/// Composes the reply for one classified message. Total: always returns a
/// non-empty string.
pub(crate) fn compose_reply(
    intent: Intent,
    context: &UserContext,
    message_lower: &str,
    rng: &mut impl Rng,
) -> String {
    match intent {
        Intent::JokeRequest => joke_request_reply(context, rng),
        Intent::BreathingGuide => bank::pick(rng, bank::BREATHING_GUIDE).to_string(),
        Intent::DeclinedExercise => bank::pick(rng, bank::DECLINE_OFFERS).to_string(),
        _ => personalized_reply(intent, context, message_lower, rng),
    }
}

/// Explicit joke request: safety check first, never a silent substitute.
fn joke_request_reply(context: &UserContext, rng: &mut impl Rng) -> String {
    let stress = context.clamped_stress();

    if !safety::allows_light_content(context.mood, stress) {
        debug!(
            mood = %context.mood.as_str(),
            stress,
            "joke request blocked, sending check-in"
        );
        let bindings = Bindings {
            name: context.display_name(),
            ..Bindings::default()
        };
        return bank::render(bank::JOKE_CHECKIN_TEMPLATE, &bindings);
    }

    let name_part = context
        .display_name()
        .map(|n| format!(", {}", n))
        .unwrap_or_default();
    let opener = if stress < 4 {
        format!("Love the energy{}! 🎉", name_part)
    } else {
        format!("Alright{}! 😅", name_part)
    };
    let joke = bank::pick(rng, bank::JOKES);
    let transition = bank::pick(rng, bank::JOKE_TRANSITIONS);

    format!(
        "{} {} But seriously, I'm glad you're feeling light today. {}",
        opener, joke, transition
    )
}

/// Four-clause construction: empathy, personalization, suggestion, follow-up.
fn personalized_reply(
    intent: Intent,
    context: &UserContext,
    message_lower: &str,
    rng: &mut impl Rng,
) -> String {
    let stress = context.clamped_stress();
    let mut parts: Vec<String> = Vec::new();

    parts.push(empathy_opener(intent, context, rng));

    if let Some(clause) = personalization(context, stress) {
        parts.push(clause);
    }

    if let Some(clause) = suggestion(intent, stress, rng) {
        parts.push(clause);
    }

    parts.push(followup(intent, context, stress, message_lower, rng));

    parts.join(" ")
}

/// Empathy phrase for the intent's bank (general fallback), with an optional
/// ", {name}" before the closing punctuation.
fn empathy_opener(intent: Intent, context: &UserContext, rng: &mut impl Rng) -> String {
    let options = bank::empathy_bank(intent).unwrap_or(bank::EMPATHY_GENERAL);
    let bindings = Bindings {
        name: context.display_name(),
        stress: Some(context.clamped_stress()),
        ..Bindings::default()
    };
    let phrase = bank::render(bank::pick(rng, options), &bindings);

    match context.display_name() {
        Some(name) => with_name(&phrase, name),
        None => phrase,
    }
}

/// Splices ", {name}" in before the phrase's closing punctuation. Phrases that
/// end in something else (e.g. an emoji) get the name before their last
/// sentence end instead, so the name is never stranded after the tail.
fn with_name(phrase: &str, name: &str) -> String {
    if let Some(base) = phrase.strip_suffix('!') {
        return format!("{}, {}!", base, name);
    }
    if let Some(base) = phrase.strip_suffix('.') {
        return format!("{}, {}.", base, name);
    }
    match phrase.rfind(|c| c == '.' || c == '!') {
        Some(idx) => format!("{}, {}{}", &phrase[..idx], name, &phrase[idx..]),
        None => format!("{}, {}", phrase, name),
    }
}

/// Personalization clause from mood, stress tier, and the first active goal.
/// Omitted entirely when no sub-clause fires.
fn personalization(context: &UserContext, stress: i32) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    let mood_phrase = match context.mood {
        Mood::Anxious => Some("feeling anxious"),
        Mood::Sad => Some("going through a tough time"),
        Mood::Tired => Some("exhausted"),
        Mood::Stressed => Some("under a lot of stress"),
        _ => None,
    };
    if let Some(phrase) = mood_phrase {
        parts.push(format!("I can see you're {}", phrase));
    }

    if stress >= 8 {
        parts.push(if parts.is_empty() {
            "Your stress is really high right now".to_string()
        } else {
            "and your stress is really high right now".to_string()
        });
    } else if stress >= 6 {
        parts.push(if parts.is_empty() {
            "You seem pretty stressed".to_string()
        } else {
            "and you're pretty stressed".to_string()
        });
    } else if stress <= 3 {
        parts.push("It's good to see your stress is lower".to_string());
    }

    let mut clause = if parts.is_empty() {
        String::new()
    } else {
        format!("{}.", parts.join(" "))
    };

    // Goal reference only when things are calm enough to talk goals.
    if stress < 5 {
        if let Some(goal) = context.active_goals.first().filter(|g| !g.is_empty()) {
            let rendered = bank::render(
                bank::GOAL_QUESTION_TEMPLATE,
                &Bindings {
                    goal: Some(goal),
                    ..Bindings::default()
                },
            );
            if clause.is_empty() {
                clause = rendered;
            } else {
                clause.push(' ');
                clause.push_str(&rendered);
            }
        }
    }

    if clause.is_empty() {
        None
    } else {
        Some(clause)
    }
}

/// One actionable tip: intent-keyed bank, else stress-tiered generic.
fn suggestion(intent: Intent, stress: i32, rng: &mut impl Rng) -> Option<String> {
    if let Some(options) = bank::suggestion_bank(intent) {
        return Some(bank::pick(rng, options).to_string());
    }

    if stress >= 7 {
        Some(bank::SUGGESTION_GENERIC_STRONG.to_string())
    } else if stress >= 5 {
        Some(bank::SUGGESTION_GENERIC_LIGHT.to_string())
    } else {
        None
    }
}

/// Gentle follow-up: deterministic coffee override, probabilistic humor when
/// the safety gate allows it, otherwise an intent-class keyed phrase.
fn followup(
    intent: Intent,
    context: &UserContext,
    stress: i32,
    message_lower: &str,
    rng: &mut impl Rng,
) -> String {
    let light_ok = safety::allows_light_content(context.mood, stress);

    if light_ok && stress < 4 && context.mood.is_positive_valenced() {
        if message_lower.contains("coffee") || message_lower.contains("caffeine") {
            return bank::pick(rng, bank::HUMOR_COFFEE).to_string();
        }
        if rng.gen_bool(POSITIVE_HUMOR_PROBABILITY) {
            return bank::pick(rng, bank::HUMOR_POSITIVE).to_string();
        }
    }

    if light_ok && (4..6).contains(&stress) && rng.gen_bool(MODERATE_HUMOR_PROBABILITY) {
        return bank::pick(rng, bank::HUMOR_STRESS_LIGHT).to_string();
    }

    if intent.is_distress() {
        bank::pick(rng, bank::FOLLOWUP_QUESTION).to_string()
    } else if intent == Intent::Positive {
        bank::pick(rng, bank::FOLLOWUP_ENCOURAGEMENT).to_string()
    } else {
        bank::pick(rng, bank::FOLLOWUP_EXPLORATION).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ctx(mood: Mood, stress: i32) -> UserContext {
        UserContext {
            name: Some("Mira".to_string()),
            mood,
            stress_level: stress,
            active_goals: vec!["Exercise daily".to_string()],
        }
    }

    #[test]
    fn goal_clause_requires_low_stress_and_goals() {
        let present = personalization(&ctx(Mood::Neutral, 4), 4);
        assert!(present.unwrap().contains("'Exercise daily'"));

        // Stress at or above 5 drops the goal reference even with goals set.
        let at_six = personalization(&ctx(Mood::Neutral, 6), 6);
        assert!(!at_six.unwrap().contains("Exercise daily"));

        let mut no_goals = ctx(Mood::Neutral, 4);
        no_goals.active_goals.clear();
        assert!(personalization(&no_goals, 4).is_none());
    }

    #[test]
    fn personalization_omitted_when_nothing_fires() {
        let mut context = ctx(Mood::Neutral, 5);
        context.active_goals.clear();
        assert_eq!(personalization(&context, 5), None);
    }

    #[test]
    fn stress_tiers_pick_one_phrase() {
        let high = personalization(&ctx(Mood::Anxious, 9), 9).unwrap();
        assert!(high.contains("really high"));
        let mid = personalization(&ctx(Mood::Neutral, 6), 6).unwrap();
        assert!(mid.contains("pretty stressed"));
        let low = personalization(&ctx(Mood::Neutral, 2), 2).unwrap();
        assert!(low.contains("lower"));
    }

    #[test]
    fn blocked_joke_request_sends_checkin_not_joke() {
        let mut rng = StdRng::seed_from_u64(3);
        let reply = joke_request_reply(&ctx(Mood::Anxious, 8), &mut rng);

        assert!(reply.contains("check in"));
        assert!(reply.contains("Mira"));
        for joke in bank::JOKES {
            assert!(!reply.contains(joke));
        }
    }

    #[test]
    fn allowed_joke_request_delivers_exactly_one_joke() {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let reply = joke_request_reply(&ctx(Mood::Happy, 2), &mut rng);
            let hits = bank::JOKES.iter().filter(|j| reply.contains(**j)).count();
            assert_eq!(hits, 1, "reply: {}", reply);
            assert!(reply.starts_with("Love the energy, Mira!"));
        }
    }

    #[test]
    fn joke_opener_softens_with_stress() {
        let mut rng = StdRng::seed_from_u64(3);
        let reply = joke_request_reply(&ctx(Mood::Okay, 6), &mut rng);
        assert!(reply.starts_with("Alright, Mira!"));
    }

    #[test]
    fn coffee_mention_overrides_probabilistic_humor() {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clause = followup(Intent::Coffee, &ctx(Mood::Happy, 2), 2, "need more coffee", &mut rng);
            assert!(
                bank::HUMOR_COFFEE.contains(&clause.as_str()),
                "clause: {}",
                clause
            );
        }
    }

    #[test]
    fn distressed_mood_never_gets_humor_followup() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clause = followup(Intent::Sad, &ctx(Mood::Sad, 5), 5, "feeling sad", &mut rng);
            assert!(
                !bank::HUMOR_STRESS_LIGHT.contains(&clause.as_str()),
                "clause: {}",
                clause
            );
            assert!(bank::FOLLOWUP_QUESTION.contains(&clause.as_str()));
        }
    }

    #[test]
    fn positive_intent_gets_encouragement() {
        // Stress 7 keeps the humor branches closed without tripping the gate.
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clause = followup(Intent::Positive, &ctx(Mood::Neutral, 7), 7, "doing great", &mut rng);
            assert!(bank::FOLLOWUP_ENCOURAGEMENT.contains(&clause.as_str()));
        }
    }

    #[test]
    fn name_splice_handles_emoji_tailed_phrases() {
        assert_eq!(
            with_name("Sending care your way. 💙", "Mira"),
            "Sending care your way, Mira. 💙"
        );
        assert_eq!(with_name("That's wonderful!", "Mira"), "That's wonderful, Mira!");
        assert_eq!(with_name("I hear you.", "Mira"), "I hear you, Mira.");
        assert_eq!(with_name("no punctuation", "Mira"), "no punctuation, Mira");
    }

    #[test]
    fn celebratory_humor_fires_for_some_seeds() {
        // The 0.3 branch must stay reachable: across seeds the clause lands in
        // the celebratory bank sometimes and the exploration bank otherwise.
        let context = ctx(Mood::Happy, 2);
        let mut fired = false;
        let mut fell_through = false;
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clause = followup(Intent::General, &context, 2, "feeling light", &mut rng);
            if bank::HUMOR_POSITIVE.contains(&clause.as_str()) {
                fired = true;
            } else {
                assert!(
                    bank::FOLLOWUP_EXPLORATION.contains(&clause.as_str()),
                    "clause: {}",
                    clause
                );
                fell_through = true;
            }
        }
        assert!(fired, "celebratory branch never fired across 64 seeds");
        assert!(fell_through, "celebratory branch fired on every seed");
    }

    #[test]
    fn gentle_joke_fires_at_moderate_stress_for_some_seeds() {
        let context = ctx(Mood::Okay, 5);
        let mut fired = false;
        let mut fell_through = false;
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clause = followup(Intent::General, &context, 5, "busy day", &mut rng);
            if bank::HUMOR_STRESS_LIGHT.contains(&clause.as_str()) {
                fired = true;
            } else {
                assert!(
                    bank::FOLLOWUP_EXPLORATION.contains(&clause.as_str()),
                    "clause: {}",
                    clause
                );
                fell_through = true;
            }
        }
        assert!(fired, "gentle-joke branch never fired across 64 seeds");
        assert!(fell_through, "gentle-joke branch fired on every seed");
    }

    #[test]
    fn empathy_opener_places_name_before_punctuation() {
        let mut rng = StdRng::seed_from_u64(1);
        let opener = empathy_opener(Intent::Positive, &ctx(Mood::Happy, 2), &mut rng);
        assert!(opener.contains(", Mira"));
        assert!(!opener.contains(".,") && !opener.contains("!,"));
    }

    #[test]
    fn compose_reply_is_never_empty() {
        let mut rng = StdRng::seed_from_u64(11);
        for intent in [
            Intent::Greeting,
            Intent::Stress,
            Intent::Burnout,
            Intent::JokeRequest,
            Intent::BreathingGuide,
            Intent::DeclinedExercise,
            Intent::General,
        ] {
            let reply = compose_reply(intent, &UserContext::default(), "", &mut rng);
            assert!(!reply.is_empty(), "empty reply for {:?}", intent);
        }
    }

    #[test]
    fn breathing_guide_contains_inhale() {
        let mut rng = StdRng::seed_from_u64(5);
        let reply = compose_reply(Intent::BreathingGuide, &UserContext::default(), "yes", &mut rng);
        assert!(reply.contains("Inhale"));
    }
}
