//! Deterministic lead scoring.
//!
//! A score starts at [`BASE_SCORE`], adds one weighted contribution per factor
//! (demographic, property/energy and behavioral), clamps to [0, 100], and then
//! optionally applies the AI adjustment and clamps again. Every non-negligible
//! contribution is recorded in the factor ledger so the score can be explained.

mod aggregate;
pub mod ai;
pub mod domain;
pub mod factor;
pub mod keywords;
mod result;
mod rules;
pub mod weights;

#[cfg(test)]
mod tests;

pub use aggregate::BASE_SCORE;
pub use ai::apply_ai;
pub use domain::{
    AiAnalysis, AppointmentStats, Lead, LeadService, Note, PhotoAnalysis, PhotoConfidence,
    PhotoScope, ServiceStatus,
};
pub use factor::{Factor, FactorCategory};
pub use keywords::{KeywordConfigError, ScoringKeywords, SourceRule};
pub use result::{ScoringResult, SCORING_VERSION};
pub use weights::{registered_service_types, resolve, WeightProfile, DEFAULT_PROFILE};

use aggregate::Aggregator;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Everything the engine reads for one lead, fetched by the caller beforehand.
///
/// Collaborator data the caller could not load is passed as an empty value
/// (no notes, default appointment stats, `None`) rather than as an error.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub lead: &'a Lead,
    pub service: Option<&'a LeadService>,
    pub notes: &'a [Note],
    pub photo_analysis: Option<&'a PhotoAnalysis>,
    pub appointments: AppointmentStats,
    pub ai_analysis: Option<&'a AiAnalysis>,
    pub service_type: &'a str,
    pub now: DateTime<Utc>,
}

impl<'a> ScoringInput<'a> {
    /// Input with only the lead set; every other collaborator is empty.
    pub fn for_lead(lead: &'a Lead, now: DateTime<Utc>) -> Self {
        Self {
            lead,
            service: None,
            notes: &[],
            photo_analysis: None,
            appointments: AppointmentStats::default(),
            ai_analysis: None,
            service_type: "",
            now,
        }
    }
}

/// Stateless scorer; the only configuration it holds is the keyword rule-set.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    keywords: ScoringKeywords,
}

impl ScoringEngine {
    pub fn new(keywords: ScoringKeywords) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &ScoringKeywords {
        &self.keywords
    }

    /// Score one lead. Pure: identical input yields an identical result.
    pub fn recalculate(&self, input: &ScoringInput<'_>) -> ScoringResult {
        let profile = weights::resolve(input.service_type);
        let mut aggregator = Aggregator::new(profile, input.lead.enrichment_confidence);

        for (factor, raw) in rules::raw_factors(input, &self.keywords) {
            aggregator.add(factor, raw);
        }

        let (score_pre_ai, mut factors) = aggregator.finish();
        let (score, ai_factors) = ai::apply_ai(score_pre_ai, input.ai_analysis);
        factors.extend(ai_factors);

        debug!(
            profile = profile.name,
            score_pre_ai,
            score,
            factor_count = factors.len(),
            "lead score calculated"
        );

        ScoringResult::build(score, score_pre_ai, factors, input.now)
    }
}
