use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Address-level enrichment snapshot for a prospective customer.
///
/// Every enrichment field is independently optional; `None` means the enrichment
/// provider had no signal, which is distinct from a measured zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    pub ownership_rate: Option<f64>,
    pub median_wealth: Option<f64>,
    pub average_income: Option<f64>,
    pub high_income_pct: Option<f64>,
    pub low_income_pct: Option<f64>,
    pub household_size: Option<f64>,
    pub children_pct: Option<f64>,
    /// Ordinal class 1 to 5; fractional input is rounded to the nearest class.
    pub urbanization: Option<f64>,
    pub energy_class: Option<String>,
    pub energy_index: Option<f64>,
    pub construction_year: Option<i32>,
    pub built_after_2000_pct: Option<f64>,
    pub woz_value: Option<f64>,
    pub gas_usage: Option<f64>,
    pub electricity_usage: Option<f64>,
    pub enrichment_confidence: Option<f64>,
    pub assigned_agent: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

/// Funnel stage of a requested work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceStatus {
    #[default]
    New,
    #[serde(rename = "Attempted_Contact")]
    AttemptedContact,
    Contacted,
    Scheduled,
    Completed,
    Closed,
    #[serde(other)]
    Unknown,
}

impl ServiceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ServiceStatus::New => "New",
            ServiceStatus::AttemptedContact => "Attempted_Contact",
            ServiceStatus::Contacted => "Contacted",
            ServiceStatus::Scheduled => "Scheduled",
            ServiceStatus::Completed => "Completed",
            ServiceStatus::Closed => "Closed",
            ServiceStatus::Unknown => "Unknown",
        }
    }
}

/// One requested work item tied to a lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadService {
    pub status: ServiceStatus,
    pub consumer_note: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoConfidence {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoScope {
    Large,
    Medium,
    #[serde(other)]
    Small,
}

/// Latest AI assessment of the photos a consumer uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAnalysis {
    pub confidence: Option<PhotoConfidence>,
    pub scope: Option<PhotoScope>,
    #[serde(default)]
    pub safety_concerns: Vec<String>,
}

/// Aggregate appointment counters for a lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentStats {
    pub total: u32,
    pub scheduled: u32,
    pub completed: u32,
    pub cancelled: u32,
    pub has_upcoming: bool,
}

/// Qualitative output of the separate AI classification step.
///
/// Both fields are kept as raw strings: unrecognized values are legal input and
/// simply contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiAnalysis {
    pub urgency_level: String,
    pub lead_quality: String,
}

impl AiAnalysis {
    pub fn is_empty(&self) -> bool {
        self.urgency_level.trim().is_empty() && self.lead_quality.trim().is_empty()
    }
}
