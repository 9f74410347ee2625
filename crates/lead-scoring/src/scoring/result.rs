use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies the active rule-set. Bump whenever buckets, weights or ledger keys change.
pub const SCORING_VERSION: &str = "lead-score-v2.3";

/// Outcome of a single scoring run, ready to be persisted next to the lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub score: u8,
    pub score_pre_ai: u8,
    pub factors: BTreeMap<String, f64>,
    pub version: String,
    pub computed_at: DateTime<Utc>,
}

impl ScoringResult {
    pub(crate) fn build(
        score: u8,
        score_pre_ai: u8,
        factors: BTreeMap<String, f64>,
        computed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            score,
            score_pre_ai,
            factors,
            version: SCORING_VERSION.to_string(),
            computed_at,
        }
    }

    /// Factor ledger as a flat JSON object, the shape stored alongside the score.
    pub fn factors_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.factors)
    }

    /// Net effect of the AI stage on the final score.
    pub fn ai_adjustment(&self) -> i16 {
        i16::from(self.score) - i16::from(self.score_pre_ai)
    }
}
