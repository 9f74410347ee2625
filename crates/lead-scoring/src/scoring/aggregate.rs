use std::collections::BTreeMap;

use super::factor::Factor;
use super::rules::finite;
use super::weights::WeightProfile;

pub const BASE_SCORE: f64 = 50.0;

/// Contributions smaller than this are left out of the ledger.
pub(crate) const LEDGER_EPSILON: f64 = 0.01;

/// Enrichment confidence as a multiplier in [0, 1].
///
/// A missing coefficient means the enrichment fields are taken at face value.
pub(crate) fn confidence_coefficient(confidence: Option<f64>) -> f64 {
    finite(confidence).map_or(1.0, |c| c.clamp(0.0, 1.0))
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Inserts `value` (rounded to one decimal) unless it is negligible.
pub(crate) fn record(ledger: &mut BTreeMap<String, f64>, key: &str, value: f64) {
    let rounded = round_one_decimal(value);
    if rounded.abs() >= LEDGER_EPSILON {
        ledger.insert(key.to_string(), rounded);
    }
}

pub(crate) fn clamp_score(total: f64) -> u8 {
    total.clamp(0.0, 100.0).round() as u8
}

/// Running total of weighted contributions on top of [`BASE_SCORE`].
///
/// The total is never clamped while factors are added; [`Aggregator::finish`] clamps
/// once at the end of the pre-AI stage.
pub(crate) struct Aggregator<'p> {
    profile: &'p WeightProfile,
    confidence: f64,
    total: f64,
    ledger: BTreeMap<String, f64>,
}

impl<'p> Aggregator<'p> {
    pub(crate) fn new(profile: &'p WeightProfile, confidence: Option<f64>) -> Self {
        Self {
            profile,
            confidence: confidence_coefficient(confidence),
            total: BASE_SCORE,
            ledger: BTreeMap::new(),
        }
    }

    pub(crate) fn add(&mut self, factor: Factor, raw: f64) {
        let mut contribution = raw * self.profile.weight(factor);
        if factor.confidence_scaled() {
            contribution *= self.confidence;
        }

        self.total += contribution;
        record(&mut self.ledger, factor.key(), contribution);
    }

    pub(crate) fn finish(self) -> (u8, BTreeMap<String, f64>) {
        (clamp_score(self.total), self.ledger)
    }
}
