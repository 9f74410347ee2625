use chrono::{DateTime, Utc};
use lead_scoring::leads::{LeadId, LeadRecord, LeadRepository, RepositoryError};
use lead_scoring::scoring::ScoringResult;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local lead store backing the HTTP service.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn store_score(&self, id: &LeadId, result: &ScoringResult) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        record.latest_score = Some(result.clone());
        Ok(())
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<LeadId>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lead store lock poisoned".to_string()))?;
        let mut ids: Vec<LeadId> = guard.keys().cloned().collect();
        ids.sort();
        Ok(ids.into_iter().skip(offset).take(limit).collect())
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}
