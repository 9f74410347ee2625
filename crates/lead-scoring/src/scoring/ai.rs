use std::collections::BTreeMap;

use super::aggregate::record;
use super::domain::AiAnalysis;

pub const AI_URGENCY_KEY: &str = "ai_urgency";
pub const AI_QUALITY_KEY: &str = "ai_quality";

fn urgency_delta(level: &str) -> i32 {
    match level.trim() {
        "High" => 10,
        "Medium" => 4,
        "Low" => -3,
        _ => 0,
    }
}

fn quality_delta(quality: &str) -> i32 {
    match quality.trim() {
        "Urgent" => 12,
        "High" => 7,
        "Potential" => 2,
        "Low" => -8,
        "Junk" => -25,
        _ => 0,
    }
}

/// Second scoring pass driven by the qualitative AI classification.
///
/// Without an analysis the pre-AI score passes through untouched and no AI keys are
/// recorded. Otherwise both deltas are added to `pre_ai` and the result is clamped
/// to [0, 100].
pub fn apply_ai(pre_ai: u8, analysis: Option<&AiAnalysis>) -> (u8, BTreeMap<String, f64>) {
    let mut factors = BTreeMap::new();
    let Some(analysis) = analysis else {
        return (pre_ai, factors);
    };

    let urgency = urgency_delta(&analysis.urgency_level);
    let quality = quality_delta(&analysis.lead_quality);
    record(&mut factors, AI_URGENCY_KEY, f64::from(urgency));
    record(&mut factors, AI_QUALITY_KEY, f64::from(quality));

    let score = (i32::from(pre_ai) + urgency + quality).clamp(0, 100);
    (score as u8, factors)
}
