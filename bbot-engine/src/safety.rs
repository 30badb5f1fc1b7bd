//! Safety gate for light content.
//!
//! Consulted before any joke, celebratory phrase, or light-hearted follow-up.
//! A blocked explicit joke request gets an empathetic check-in instead, never
//! a quiet substitute joke.

use bbot_core::{Mood, STRESS_MAX, STRESS_MIN};

/// The stress figure above which humor is suppressed.
pub const HUMOR_STRESS_CEILING: i32 = 7;

/// Whether humor and celebratory content are appropriate right now.
///
/// Returns false when stress is above [`HUMOR_STRESS_CEILING`] or the mood is
/// a distressed one (sad, anxious, overwhelmed). Out-of-range stress values
/// are clamped rather than rejected.
pub fn allows_light_content(mood: Mood, stress_level: i32) -> bool {
    let stress = stress_level.clamp(STRESS_MIN, STRESS_MAX);
    stress <= HUMOR_STRESS_CEILING && !mood.is_distressed()
}
