use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{
    resolve, AiAnalysis, AppointmentStats, Lead, LeadService, Note, PhotoAnalysis,
    ScoringInput, ScoringResult,
};

/// Identifier wrapper for stored leads.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Everything the engine needs for one lead, as fetched from storage or posted inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadBundle {
    pub lead: Lead,
    pub service: Option<LeadService>,
    pub service_type: String,
    pub notes: Vec<Note>,
    pub photo_analysis: Option<PhotoAnalysis>,
    pub appointments: AppointmentStats,
    pub ai_analysis: Option<AiAnalysis>,
}

impl LeadBundle {
    pub fn input(&self, now: DateTime<Utc>) -> ScoringInput<'_> {
        ScoringInput {
            lead: &self.lead,
            service: self.service.as_ref(),
            notes: &self.notes,
            photo_analysis: self.photo_analysis.as_ref(),
            appointments: self.appointments,
            ai_analysis: self.ai_analysis.as_ref(),
            service_type: &self.service_type,
            now,
        }
    }
}

/// Repository record: the bundle plus the most recent persisted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    #[serde(flatten)]
    pub bundle: LeadBundle,
    #[serde(default)]
    pub latest_score: Option<ScoringResult>,
}

impl LeadRecord {
    pub fn new(id: impl Into<String>, bundle: LeadBundle) -> Self {
        Self {
            id: LeadId(id.into()),
            bundle,
            latest_score: None,
        }
    }

    pub fn status_view(&self) -> LeadStatusView {
        let score = self.latest_score.as_ref();
        LeadStatusView {
            lead_id: self.id.clone(),
            service_type: self.bundle.service_type.clone(),
            profile: resolve(&self.bundle.service_type).name,
            status: self
                .bundle
                .service
                .as_ref()
                .map(|service| service.status.label()),
            score: score.map(|result| result.score),
            score_pre_ai: score.map(|result| result.score_pre_ai),
            version: score.map(|result| result.version.clone()),
            computed_at: score.map(|result| result.computed_at),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    fn store_score(&self, id: &LeadId, result: &ScoringResult) -> Result<(), RepositoryError>;
    /// Ids in a stable order, skipping the first `offset` and returning at most `limit`.
    fn list(&self, offset: usize, limit: usize) -> Result<Vec<LeadId>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Exposed summary of a lead and its latest score.
#[derive(Debug, Clone, Serialize)]
pub struct LeadStatusView {
    pub lead_id: LeadId,
    pub service_type: String,
    pub profile: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    pub score: Option<u8>,
    pub score_pre_ai: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_at: Option<DateTime<Utc>>,
}
