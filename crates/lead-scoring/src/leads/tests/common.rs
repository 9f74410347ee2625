use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::leads::repository::{LeadBundle, LeadId, LeadRecord, LeadRepository, RepositoryError};
use crate::leads::LeadScoringService;
use crate::scoring::{
    AiAnalysis, AppointmentStats, Lead, LeadService, Note, ScoringKeywords, ScoringResult,
    ServiceStatus,
};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 11, 14, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn solar_bundle() -> LeadBundle {
    LeadBundle {
        lead: Lead {
            ownership_rate: Some(55.0),
            median_wealth: Some(60.0),
            electricity_usage: Some(4200.0),
            enrichment_confidence: Some(1.0),
            created_at: Some(now() - Duration::hours(2)),
            source: Some("organic".to_string()),
            ..Lead::default()
        },
        service: Some(LeadService {
            status: ServiceStatus::New,
            consumer_note: Some("Graag een offerte voor 12 panelen".to_string()),
            source: None,
        }),
        service_type: "solar".to_string(),
        notes: vec![Note {
            created_at: now() - Duration::hours(1),
            body: "Intake gepland".to_string(),
        }],
        photo_analysis: None,
        appointments: AppointmentStats::default(),
        ai_analysis: Some(AiAnalysis {
            urgency_level: "Medium".to_string(),
            lead_quality: "High".to_string(),
        }),
    }
}

pub(super) fn solar_record(id: &str) -> LeadRecord {
    LeadRecord::new(id, solar_bundle())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<LeadId, LeadRecord>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &str) -> Option<LeadRecord> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .get(&LeadId(id.to_string()))
            .cloned()
    }
}

impl LeadRepository for MemoryRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn store_score(&self, id: &LeadId, result: &ScoringResult) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        record.latest_score = Some(result.clone());
        Ok(())
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<LeadId>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.keys().skip(offset).take(limit).cloned().collect())
    }
}

/// Reads succeed but write-backs fail, as with a read replica.
#[derive(Default, Clone)]
pub(super) struct ReadOnlyRepository {
    inner: MemoryRepository,
}

impl ReadOnlyRepository {
    pub(super) fn seeded(records: Vec<LeadRecord>) -> Self {
        let inner = MemoryRepository::default();
        for record in records {
            inner.insert(record).expect("seed record");
        }
        Self { inner }
    }
}

impl LeadRepository for ReadOnlyRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("read-only replica".to_string()))
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn store_score(&self, _id: &LeadId, _result: &ScoringResult) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read-only replica".to_string()))
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<LeadId>, RepositoryError> {
        self.inner.list(offset, limit)
    }
}

pub(super) fn build_service() -> (Arc<LeadScoringService<MemoryRepository>>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = Arc::new(LeadScoringService::new(
        Arc::new(repository.clone()),
        ScoringKeywords::default(),
    ));
    (service, repository)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
