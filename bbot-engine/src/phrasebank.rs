//! Categorized phrase banks and template rendering.
//!
//! Banks are data: ordered lists of candidate strings per category, some with
//! named placeholders (`{name}`, `{stress}`, `{goal}`). Selection is uniform
//! and memoryless from the injected RNG. Rendering never fails: known
//! placeholders with no binding are stripped cleanly, unrecognized
//! placeholders are left untouched.

use bbot_core::Intent;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

// --- Empathy openers ---

pub const EMPATHY_STRESS: &[&str] = &[
    "I hear you.",
    "That sounds exhausting.",
    "That's a lot to carry.",
    "I can feel the weight of that.",
    "That sounds really heavy. I can see your stress is around {stress}/10.",
];

pub const EMPATHY_OVERWHELMED: &[&str] = &[
    "I hear you.",
    "That's overwhelming.",
    "That sounds like a lot.",
    "I'm here with you.",
];

pub const EMPATHY_TIRED: &[&str] = &[
    "That sounds draining.",
    "Rest is so important.",
    "Your body is telling you something.",
    "I hear you.",
];

pub const EMPATHY_ANXIOUS: &[&str] = &[
    "I'm here with you.",
    "That must feel heavy.",
    "You're not alone in this.",
    "I hear you.",
];

pub const EMPATHY_SAD: &[&str] = &[
    "I'm so sorry you're feeling this way.",
    "That's really hard.",
    "I'm here with you.",
    "Sending care your way. 💙",
];

pub const EMPATHY_BURNOUT: &[&str] = &[
    "That sounds like real burnout territory.",
    "Running on empty is no way to live.",
    "I hear you, and what you're feeling is valid.",
];

pub const EMPATHY_POSITIVE: &[&str] = &[
    "That's wonderful!",
    "I love hearing that!",
    "That's amazing!",
    "So glad to hear it!",
];

pub const EMPATHY_GENERAL: &[&str] = &[
    "I hear you.",
    "Thank you for sharing.",
    "I'm listening.",
    "I'm here for you.",
];

// --- Humor ---

pub const JOKES: &[&str] = &[
    "Why did the burnout prevention app cross the road? To get to the self-care side! 😄",
    "You know what's funny? We spend our whole lives saying 'I'll rest when I'm dead'... and then wonder why we're exhausted! 😅",
    "My therapist says I have trouble delegating tasks. So I told them to tell someone else about it. 😂",
    "Fun fact: Coffee doesn't actually give you energy, it just lets you borrow it from tomorrow. (And tomorrow's getting annoyed! ☕)",
    "Why don't scientists trust atoms? Because they make up everything! (Just like our stress sometimes 😉)",
];

pub const HUMOR_POSITIVE: &[&str] = &[
    "Look at you go! 🎉",
    "Winning at life today! ✨",
    "Keep this energy, bottle it if you can! 😄",
];

pub const HUMOR_STRESS_LIGHT: &[&str] = &[
    "Adulting is hard, nobody warned us properly! 😅",
    "Deep breaths... and maybe some chocolate? 🍫",
    "Remember: you're doing better than you think you are!",
];

pub const HUMOR_COFFEE: &[&str] = &[
    "Coffee is basically a food group at this point, right? ☕",
    "Ah yes, the elixir of productivity! ☕✨",
    "Coffee: because adulting is hard! ☕",
];

pub const JOKE_TRANSITIONS: &[&str] = &[
    "What's got you in such a great mood?",
    "Keep that vibe going! What fun thing are you up to?",
    "Laughter is amazing medicine. What's making you feel good today?",
];

// --- Suggestions ---

pub const SUGGESTIONS_STRESS: &[&str] = &[
    "Try taking 5 deep breaths, in for 4, out for 6.",
    "How about a quick 5-minute walk to clear your head?",
    "Maybe write down the top 3 priorities and let the rest wait.",
    "Can you step away for just 10 minutes? Even a short break helps.",
];

pub const SUGGESTIONS_OVERWHELMED: &[&str] = &[
    "What's one small thing you could take off your plate today?",
    "Let's focus on just the next hour. What's most important right now?",
    "Could you delegate or postpone one task?",
    "Try the 2-minute rule: if it takes less than 2 minutes, do it now.",
];

pub const SUGGESTIONS_TIRED: &[&str] = &[
    "Could you steal a 15-minute power nap?",
    "Try putting your phone away 30 minutes before bed tonight.",
    "How about a gentle stretch to wake up your body?",
    "Hydrate! Sometimes tiredness is just thirst in disguise. 💧",
];

pub const SUGGESTIONS_ANXIOUS: &[&str] = &[
    "Try the 5-4-3-2-1 technique: name 5 things you see, 4 you hear, 3 you can touch.",
    "Box breathing: in for 4, hold for 4, out for 4, hold for 4.",
    "Put your hand on your heart and take 3 slow breaths.",
    "Write down what's worrying you. Sometimes seeing it helps.",
];

pub const SUGGESTIONS_SAD: &[&str] = &[
    "Be extra gentle with yourself today, maybe do something small you enjoy.",
    "Reach out to someone you trust, even just to say hi.",
    "Let yourself feel it. Emotions are visitors, not permanent residents.",
    "Try moving your body a little. Even a short walk can shift things.",
];

pub const SUGGESTIONS_BURNOUT: &[&str] = &[
    "What's the one obligation you could put down this week, even briefly?",
    "Block out 30 protected minutes today that belong only to you.",
    "Talk to someone about the load. Naming it out loud changes it.",
];

pub const SUGGESTIONS_POSITIVE: &[&str] = &[
    "Keep the momentum going with something fun today!",
    "Celebrate this, you deserve it! 🌿",
    "Lock in this feeling. What's working well for you?",
    "Share this good energy with someone you care about!",
];

/// Generic suggestion when stress is high and no intent bank applies.
pub const SUGGESTION_GENERIC_STRONG: &str =
    "How about taking just 5 minutes to step away and breathe?";
/// Generic suggestion for moderate stress when no intent bank applies.
pub const SUGGESTION_GENERIC_LIGHT: &str = "Try a quick break. Even 2 minutes can help reset.";

// --- Follow-ups ---

pub const FOLLOWUP_QUESTION: &[&str] = &[
    "How does that sound?",
    "Want to try it together?",
    "What do you think?",
    "Does that feel doable?",
    "Would you like to try a quick breathing exercise?",
];

pub const FOLLOWUP_ENCOURAGEMENT: &[&str] = &[
    "I'm here with you. 🌿",
    "One small step is enough today. 🌿",
    "You've got this. 💙",
    "I believe in you.",
    "You're doing better than you think.",
];

pub const FOLLOWUP_EXPLORATION: &[&str] = &[
    "What's on your mind?",
    "Tell me more about that?",
    "What's one thing that might help?",
    "How are you really feeling?",
    "What would help most right now?",
];

// --- Guided breathing and decline paths ---

pub const BREATHING_GUIDE: &[&str] = &[
    "Great, let's do it together. Inhale slowly for 4 counts... hold for 4... and exhale for 6. Repeat that three more times at your own pace. How do you feel now?",
    "Okay, settle in. Inhale for 4, hold for 4, exhale for 4, hold for 4. That's box breathing. Go around four times and tell me how it lands.",
];

pub const DECLINE_OFFERS: &[&str] = &[
    "No pressure at all. We can just talk instead. What's on your mind right now?",
    "That's completely fine, I'm here either way. What would help most right now?",
];

/// Fixed check-in used when the safety gate blocks an explicit joke request.
/// Never replaced by a different joke.
pub const JOKE_CHECKIN_TEMPLATE: &str = "I appreciate that you're trying to lighten the mood, {name}. 💙 I'd love to make you laugh, but I also want to check in: are you doing okay? Sometimes we joke when things feel heavy. I'm here if you need to talk.";

/// Goal reference clause, rendered only when a goal title is bound.
pub const GOAL_QUESTION_TEMPLATE: &str = "How's '{goal}' going?";

/// Empathy bank for an intent, when one exists.
pub fn empathy_bank(intent: Intent) -> Option<&'static [&'static str]> {
    match intent {
        Intent::Stress => Some(EMPATHY_STRESS),
        Intent::Overwhelmed => Some(EMPATHY_OVERWHELMED),
        Intent::Tired => Some(EMPATHY_TIRED),
        Intent::Anxious => Some(EMPATHY_ANXIOUS),
        Intent::Sad => Some(EMPATHY_SAD),
        Intent::Burnout => Some(EMPATHY_BURNOUT),
        Intent::Positive => Some(EMPATHY_POSITIVE),
        _ => None,
    }
}

/// Suggestion bank for an intent, when one exists.
pub fn suggestion_bank(intent: Intent) -> Option<&'static [&'static str]> {
    match intent {
        Intent::Stress => Some(SUGGESTIONS_STRESS),
        Intent::Overwhelmed => Some(SUGGESTIONS_OVERWHELMED),
        Intent::Tired => Some(SUGGESTIONS_TIRED),
        Intent::Anxious => Some(SUGGESTIONS_ANXIOUS),
        Intent::Sad => Some(SUGGESTIONS_SAD),
        Intent::Burnout => Some(SUGGESTIONS_BURNOUT),
        Intent::Positive => Some(SUGGESTIONS_POSITIVE),
        _ => None,
    }
}

/// Uniform-random choice from a bank. Memoryless; an empty bank yields "".
pub fn pick<'a>(rng: &mut impl Rng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or("")
}

/// Named placeholder bindings for [`render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bindings<'a> {
    pub name: Option<&'a str>,
    pub stress: Option<i32>,
    pub goal: Option<&'a str>,
}

/// Substitutes `{name}`, `{stress}` and `{goal}` in a template.
///
/// A known placeholder with no binding is removed together with a directly
/// preceding ", " or space, so no literal placeholder token survives.
/// Unrecognized placeholders are left untouched; rendering never fails.
pub fn render(template: &str, bindings: &Bindings) -> String {
    let mut out = template.to_string();

    let stress_text = bindings.stress.map(|s| s.to_string());
    let known: [(&str, Option<&str>); 3] = [
        ("name", bindings.name),
        ("stress", stress_text.as_deref()),
        ("goal", bindings.goal),
    ];

    for (key, value) in known {
        let token = format!("{{{}}}", key);
        if !out.contains(&token) {
            continue;
        }
        match value {
            Some(value) if !value.is_empty() => out = out.replace(&token, value),
            _ => {
                trace!(placeholder = key, "unbound placeholder stripped");
                out = out.replace(&format!(", {}", token), "");
                out = out.replace(&format!(" {}", token), "");
                out = out.replace(&token, "");
            }
        }
    }

    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out.trim().to_string()
}
