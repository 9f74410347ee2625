use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::repository::{LeadBundle, LeadId, LeadRecord, LeadRepository, RepositoryError};
use crate::scoring::{ScoringEngine, ScoringKeywords, ScoringResult};

/// Number of lead ids fetched per repository page during batch recalculation.
pub const BATCH_PAGE_SIZE: usize = 500;

/// Service composing the lead repository and the scoring engine.
pub struct LeadScoringService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

impl<R> LeadScoringService<R>
where
    R: LeadRepository + 'static,
{
    pub fn new(repository: Arc<R>, keywords: ScoringKeywords) -> Self {
        Self {
            repository,
            engine: Arc::new(ScoringEngine::new(keywords)),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Store a new lead bundle so it can be recalculated later.
    pub fn register(&self, record: LeadRecord) -> Result<LeadRecord, LeadServiceError> {
        if record.id.0.trim().is_empty() {
            return Err(LeadServiceError::InvalidRecord(
                "lead id must not be empty".to_string(),
            ));
        }

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a lead, score it relative to `now`, and persist the result.
    pub fn recalculate(
        &self,
        lead_id: &LeadId,
        now: DateTime<Utc>,
    ) -> Result<ScoringResult, LeadServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;

        let result = self.engine.recalculate(&record.bundle.input(now));
        self.repository.store_score(lead_id, &result)?;

        info!(
            lead_id = %lead_id.0,
            score = result.score,
            score_pre_ai = result.score_pre_ai,
            version = %result.version,
            "lead score recalculated"
        );

        Ok(result)
    }

    /// Score an ad-hoc bundle without touching the repository.
    pub fn score_bundle(&self, bundle: &LeadBundle, now: DateTime<Utc>) -> ScoringResult {
        self.engine.recalculate(&bundle.input(now))
    }

    /// Recalculate every stored lead. Leads that fail are logged and skipped.
    pub fn recalculate_all(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<(LeadId, ScoringResult)>, LeadServiceError> {
        let mut scored = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.repository.list(offset, BATCH_PAGE_SIZE)?;
            let fetched = page.len();

            for lead_id in page {
                match self.recalculate(&lead_id, now) {
                    Ok(result) => scored.push((lead_id, result)),
                    Err(err) => warn!(lead_id = %lead_id.0, error = %err, "skipping lead in batch"),
                }
            }

            if fetched < BATCH_PAGE_SIZE {
                break;
            }
            offset += fetched;
        }

        Ok(scored)
    }

    pub fn get(&self, lead_id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the lead scoring service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error("invalid lead record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
