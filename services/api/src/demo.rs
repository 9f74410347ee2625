use crate::infra::{parse_timestamp, InMemoryLeadRepository};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use lead_scoring::config::AppConfig;
use lead_scoring::error::AppError;
use lead_scoring::leads::{LeadBundle, LeadRecord, LeadScoringService};
use lead_scoring::scoring::{
    resolve, AiAnalysis, AppointmentStats, Lead, LeadService, Note, PhotoAnalysis,
    PhotoConfidence, PhotoScope, ScoringEngine, ScoringResult, ServiceStatus, BASE_SCORE,
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a lead bundle (lead, service, notes, appointments, ...)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Scoring time as RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Service type whose weight profile the sample leads are scored with
    #[arg(long, default_value = "solar")]
    pub(crate) service_type: String,
    /// Scoring time as RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { input, now } = args;

    let keywords = AppConfig::load()?.scoring.keywords()?;
    let raw = fs::read_to_string(&input)?;
    let bundle: LeadBundle = serde_json::from_str(&raw)?;

    let now = now.unwrap_or_else(Utc::now);
    let result = ScoringEngine::new(keywords).recalculate(&bundle.input(now));

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { service_type, now } = args;
    let now = now.unwrap_or_else(Utc::now);

    let keywords = AppConfig::load()?.scoring.keywords()?;
    let service = LeadScoringService::new(Arc::new(InMemoryLeadRepository::default()), keywords);

    println!(
        "Lead scoring demo: service type '{}' -> profile '{}'",
        service_type,
        resolve(&service_type).name
    );

    for (id, bundle) in sample_bundles(&service_type, now) {
        service.register(LeadRecord::new(id, bundle))?;
    }

    for (lead_id, result) in service.recalculate_all(now)? {
        println!("\n{}", lead_id.0);
        render_result(&result);
    }

    Ok(())
}

fn render_result(result: &ScoringResult) {
    println!(
        "  score {} (pre-AI {}, AI {:+})",
        result.score,
        result.score_pre_ai,
        result.ai_adjustment()
    );
    println!("  {:<20} {:>6.1}", "base", BASE_SCORE);
    for (key, value) in &result.factors {
        println!("  {:<20} {:>+6.1}", key, value);
    }
}

/// A hot, a warm and a cold lead for the given vertical, timed relative to `now`.
pub(crate) fn sample_bundles(service_type: &str, now: DateTime<Utc>) -> Vec<(&'static str, LeadBundle)> {
    let hot = LeadBundle {
        lead: Lead {
            ownership_rate: Some(84.0),
            median_wealth: Some(210.0),
            average_income: Some(58.0),
            energy_class: Some("E".to_string()),
            construction_year: Some(1968),
            gas_usage: Some(2100.0),
            electricity_usage: Some(3900.0),
            enrichment_confidence: Some(0.9),
            created_at: Some(now - Duration::hours(3)),
            ..Lead::default()
        },
        service: Some(LeadService {
            status: ServiceStatus::New,
            consumer_note: Some(
                "Onze cv-ketel geeft storing en we willen graag zo snel mogelijk een offerte."
                    .to_string(),
            ),
            source: Some("referral".to_string()),
        }),
        service_type: service_type.to_string(),
        notes: vec![Note {
            created_at: now - Duration::hours(1),
            body: "Klant teruggebeld, wil deze week langs".to_string(),
        }],
        photo_analysis: Some(PhotoAnalysis {
            confidence: Some(PhotoConfidence::High),
            scope: Some(PhotoScope::Medium),
            safety_concerns: Vec::new(),
        }),
        appointments: AppointmentStats {
            total: 1,
            scheduled: 1,
            has_upcoming: true,
            ..AppointmentStats::default()
        },
        ai_analysis: Some(AiAnalysis {
            urgency_level: "High".to_string(),
            lead_quality: "Urgent".to_string(),
        }),
    };

    let warm = LeadBundle {
        lead: Lead {
            ownership_rate: Some(62.0),
            median_wealth: Some(80.0),
            energy_class: Some("C".to_string()),
            enrichment_confidence: Some(0.6),
            created_at: Some(now - Duration::days(4)),
            source: Some("google ads".to_string()),
            ..Lead::default()
        },
        service: Some(LeadService {
            status: ServiceStatus::AttemptedContact,
            consumer_note: Some("Graag informatie".to_string()),
            source: None,
        }),
        service_type: service_type.to_string(),
        ai_analysis: Some(AiAnalysis {
            urgency_level: "Medium".to_string(),
            lead_quality: "Potential".to_string(),
        }),
        ..LeadBundle::default()
    };

    let cold = LeadBundle {
        lead: Lead {
            ownership_rate: Some(22.0),
            low_income_pct: Some(38.0),
            energy_class: Some("A++".to_string()),
            construction_year: Some(2019),
            created_at: Some(now - Duration::days(60)),
            source: Some("purchased list".to_string()),
            ..Lead::default()
        },
        service: Some(LeadService {
            status: ServiceStatus::Closed,
            consumer_note: None,
            source: None,
        }),
        service_type: service_type.to_string(),
        appointments: AppointmentStats {
            total: 2,
            cancelled: 2,
            ..AppointmentStats::default()
        },
        ai_analysis: Some(AiAnalysis {
            urgency_level: "Low".to_string(),
            lead_quality: "Junk".to_string(),
        }),
        ..LeadBundle::default()
    };

    vec![("demo-1-hot", hot), ("demo-2-warm", warm), ("demo-3-cold", cold)]
}
