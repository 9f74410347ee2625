use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::scoring::domain::{
    AiAnalysis, AppointmentStats, Lead, LeadService, Note, PhotoAnalysis, PhotoConfidence,
    PhotoScope, ServiceStatus,
};
use crate::scoring::{ScoringEngine, ScoringInput, ScoringResult};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn fresh_lead() -> Lead {
    Lead {
        created_at: Some(now()),
        ..Lead::default()
    }
}

pub(super) fn aged_lead(days: i64) -> Lead {
    Lead {
        created_at: Some(now() - Duration::days(days)),
        ..Lead::default()
    }
}

/// Owner-occupied suburban street with a poorly insulated pre-war house.
pub(super) fn enriched_lead() -> Lead {
    Lead {
        ownership_rate: Some(84.0),
        median_wealth: Some(210.0),
        average_income: Some(48.0),
        high_income_pct: Some(22.0),
        low_income_pct: Some(12.0),
        household_size: Some(2.6),
        children_pct: Some(31.0),
        urbanization: Some(3.0),
        energy_class: Some("F".to_string()),
        energy_index: Some(2.2),
        construction_year: Some(1938),
        built_after_2000_pct: Some(8.0),
        woz_value: Some(415.0),
        gas_usage: Some(2100.0),
        electricity_usage: Some(3100.0),
        enrichment_confidence: Some(0.8),
        assigned_agent: true,
        created_at: Some(now() - Duration::hours(30)),
        source: Some("website".to_string()),
    }
}

pub(super) fn service(status: ServiceStatus, note: &str, source: Option<&str>) -> LeadService {
    LeadService {
        status,
        consumer_note: Some(note.to_string()),
        source: source.map(str::to_string),
    }
}

pub(super) fn recent_notes() -> Vec<Note> {
    vec![
        Note {
            created_at: now() - Duration::days(3),
            body: "Voicemail ingesproken".to_string(),
        },
        Note {
            created_at: now() - Duration::hours(5),
            body: "Klant teruggebeld, wil offerte".to_string(),
        },
    ]
}

pub(super) fn detailed_photos() -> PhotoAnalysis {
    PhotoAnalysis {
        confidence: Some(PhotoConfidence::Medium),
        scope: Some(PhotoScope::Large),
        safety_concerns: Vec::new(),
    }
}

pub(super) fn ai(urgency: &str, quality: &str) -> AiAnalysis {
    AiAnalysis {
        urgency_level: urgency.to_string(),
        lead_quality: quality.to_string(),
    }
}

pub(super) fn score_lead(lead: &Lead, service_type: &str) -> ScoringResult {
    let input = ScoringInput {
        service_type,
        ..ScoringInput::for_lead(lead, now())
    };
    ScoringEngine::default().recalculate(&input)
}

pub(super) fn no_appointments() -> AppointmentStats {
    AppointmentStats::default()
}
