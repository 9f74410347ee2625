use chrono::{DateTime, Duration, Utc};

use super::super::domain::{
    AppointmentStats, Note, PhotoAnalysis, PhotoConfidence, PhotoScope, ServiceStatus,
};
use super::super::keywords::ScoringKeywords;

fn age_of(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - created_at).max(Duration::zero())
}

/// Freshness of the lead relative to `now`.
pub(crate) fn lead_age(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(created_at) = created_at else {
        return 0.0;
    };

    let age = age_of(created_at, now);
    if age <= Duration::hours(24) {
        8.0
    } else if age <= Duration::hours(72) {
        5.0
    } else if age <= Duration::days(7) {
        2.0
    } else if age <= Duration::days(30) {
        -2.0
    } else {
        -6.0
    }
}

pub(crate) fn status(status: Option<ServiceStatus>) -> f64 {
    match status {
        Some(ServiceStatus::New) => 5.0,
        Some(ServiceStatus::AttemptedContact) => 2.0,
        Some(ServiceStatus::Contacted) => 1.0,
        Some(ServiceStatus::Scheduled) => -2.0,
        Some(ServiceStatus::Completed | ServiceStatus::Closed) => -5.0,
        Some(ServiceStatus::Unknown) | None => 0.0,
    }
}

/// Note volume plus recency of the latest note, clamped to [0, 6].
pub(crate) fn notes_activity(notes: &[Note], now: DateTime<Utc>) -> f64 {
    let count = match notes.len() {
        0 => 0.0,
        1 => 1.0,
        2..=4 => 2.0,
        _ => 3.0,
    };

    let recency = notes
        .iter()
        .map(|note| note.created_at)
        .max()
        .map(|latest| {
            let age = age_of(latest, now);
            if age <= Duration::hours(24) {
                3.0
            } else if age <= Duration::hours(72) {
                2.0
            } else if age <= Duration::days(7) {
                1.0
            } else {
                0.0
            }
        })
        .unwrap_or(0.0);

    f64::clamp(count + recency, 0.0, 6.0)
}

pub(crate) fn photo_analysis(analysis: Option<&PhotoAnalysis>) -> f64 {
    let Some(analysis) = analysis else {
        return 0.0;
    };

    let confidence = match analysis.confidence {
        Some(PhotoConfidence::High) => 2.0,
        Some(PhotoConfidence::Medium) => 1.0,
        Some(PhotoConfidence::Low | PhotoConfidence::Unknown) | None => 0.0,
    };
    let scope = match analysis.scope {
        Some(PhotoScope::Large) => 2.0,
        Some(PhotoScope::Medium) => 1.0,
        Some(PhotoScope::Small) | None => 0.0,
    };
    let safety = if analysis.safety_concerns.is_empty() {
        0.0
    } else {
        2.0
    };

    f64::clamp(2.0 + confidence + scope + safety, 0.0, 8.0)
}

/// Length of the consumer's free-text request plus a one-time urgency bonus.
pub(crate) fn consumer_note(note: Option<&str>, keywords: &ScoringKeywords) -> f64 {
    let note = note.map(str::trim).unwrap_or_default();
    if note.is_empty() {
        return 0.0;
    }

    let length = match note.chars().count() {
        0..=49 => 1.0,
        50..=149 => 3.0,
        150..=299 => 4.0,
        _ => 6.0,
    };
    let urgency = if keywords.has_urgency(&note.to_lowercase()) {
        2.0
    } else {
        0.0
    };

    f64::clamp(length + urgency, 0.0, 8.0)
}

/// Service-level source takes precedence over the lead-level one when present.
pub(crate) fn source_quality(
    service_source: Option<&str>,
    lead_source: Option<&str>,
    keywords: &ScoringKeywords,
) -> f64 {
    let source = [service_source, lead_source]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|source| !source.is_empty());

    source
        .and_then(|source| keywords.source_points(&source.to_lowercase()))
        .unwrap_or(0.0)
}

pub(crate) fn assignment(assigned_agent: bool) -> f64 {
    if assigned_agent {
        4.0
    } else {
        0.0
    }
}

/// Appointment engagement, clamped to [-3, 10].
pub(crate) fn appointments(stats: &AppointmentStats) -> f64 {
    let mut points = 0.0;

    if stats.has_upcoming {
        points += 4.0;
    }

    points += 2.0 * f64::from(stats.completed);
    if stats.completed >= 2 {
        points += 2.0;
    }

    points += 1.5 * f64::from(stats.scheduled);

    if stats.cancelled > 0 {
        let denominator = stats.total.max(stats.cancelled);
        let rate = f64::from(stats.cancelled) / f64::from(denominator);
        if rate >= 0.5 {
            points -= 3.0;
        } else {
            points -= f64::from(stats.cancelled);
        }
    }

    f64::clamp(points, -3.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid now")
    }

    fn note_at(hours_ago: i64) -> Note {
        Note {
            created_at: now() - Duration::hours(hours_ago),
            body: "called back".to_string(),
        }
    }

    #[test]
    fn lead_age_buckets() {
        assert_eq!(lead_age(Some(now()), now()), 8.0);
        assert_eq!(lead_age(Some(now() - Duration::hours(48)), now()), 5.0);
        assert_eq!(lead_age(Some(now() - Duration::days(5)), now()), 2.0);
        assert_eq!(lead_age(Some(now() - Duration::days(20)), now()), -2.0);
        assert_eq!(lead_age(Some(now() - Duration::days(45)), now()), -6.0);
        assert_eq!(lead_age(None, now()), 0.0);
    }

    #[test]
    fn future_creation_counts_as_brand_new() {
        assert_eq!(lead_age(Some(now() + Duration::hours(3)), now()), 8.0);
    }

    #[test]
    fn status_points_follow_the_funnel() {
        assert_eq!(status(Some(ServiceStatus::New)), 5.0);
        assert_eq!(status(Some(ServiceStatus::Scheduled)), -2.0);
        assert_eq!(status(Some(ServiceStatus::Closed)), -5.0);
        assert_eq!(status(Some(ServiceStatus::Unknown)), 0.0);
        assert_eq!(status(None), 0.0);
    }

    #[test]
    fn notes_combine_count_and_recency() {
        assert_eq!(notes_activity(&[], now()), 0.0);
        assert_eq!(notes_activity(&[note_at(200)], now()), 1.0);
        assert_eq!(notes_activity(&[note_at(300), note_at(2)], now()), 5.0);
        let busy: Vec<_> = (0..6).map(note_at).collect();
        assert_eq!(notes_activity(&busy, now()), 6.0);
    }

    #[test]
    fn photo_analysis_rewards_detail_and_safety() {
        let full = PhotoAnalysis {
            confidence: Some(PhotoConfidence::High),
            scope: Some(PhotoScope::Large),
            safety_concerns: vec!["exposed wiring".to_string()],
        };
        assert_eq!(photo_analysis(Some(&full)), 8.0);

        let bare = PhotoAnalysis {
            confidence: Some(PhotoConfidence::Low),
            scope: None,
            safety_concerns: Vec::new(),
        };
        assert_eq!(photo_analysis(Some(&bare)), 2.0);
        assert_eq!(photo_analysis(None), 0.0);
    }

    #[test]
    fn consumer_note_length_and_urgency() {
        let keywords = ScoringKeywords::default();
        assert_eq!(consumer_note(None, &keywords), 0.0);
        assert_eq!(consumer_note(Some("   "), &keywords), 0.0);
        assert_eq!(consumer_note(Some("offerte graag"), &keywords), 1.0);
        assert_eq!(consumer_note(Some("SPOED: lekkage"), &keywords), 3.0);

        let long = "a".repeat(320);
        assert_eq!(consumer_note(Some(&long), &keywords), 6.0);
        let long_urgent = format!("{long} kapot");
        assert_eq!(consumer_note(Some(&long_urgent), &keywords), 8.0);
    }

    #[test]
    fn service_source_overrides_lead_source() {
        let keywords = ScoringKeywords::default();
        assert_eq!(
            source_quality(Some("Referral"), Some("cold list"), &keywords),
            6.0
        );
        assert_eq!(source_quality(Some(" "), Some("cold list"), &keywords), -2.0);
        assert_eq!(source_quality(None, None, &keywords), 0.0);
        assert_eq!(source_quality(Some("flyer"), None, &keywords), 0.0);
    }

    #[test]
    fn appointments_with_completed_history() {
        let stats = AppointmentStats {
            total: 3,
            scheduled: 0,
            completed: 2,
            cancelled: 1,
            has_upcoming: false,
        };
        // 2 x 2 completed + 2 bonus - 1 cancellation
        assert_eq!(appointments(&stats), 5.0);
    }

    #[test]
    fn unrecognized_photo_confidence_scores_like_low() {
        let analysis = PhotoAnalysis {
            confidence: Some(PhotoConfidence::Unknown),
            scope: Some(PhotoScope::Medium),
            safety_concerns: Vec::new(),
        };
        assert_eq!(photo_analysis(Some(&analysis)), 3.0);
    }

    #[test]
    fn heavy_cancellation_is_a_flat_penalty() {
        let stats = AppointmentStats {
            total: 2,
            scheduled: 0,
            completed: 0,
            cancelled: 2,
            has_upcoming: false,
        };
        assert_eq!(appointments(&stats), -3.0);
    }

    #[test]
    fn appointments_are_capped() {
        let stats = AppointmentStats {
            total: 6,
            scheduled: 2,
            completed: 4,
            cancelled: 0,
            has_upcoming: true,
        };
        assert_eq!(appointments(&stats), 10.0);
    }

    #[test]
    fn cancellations_without_total_are_still_defined() {
        let stats = AppointmentStats {
            cancelled: 1,
            ..AppointmentStats::default()
        };
        assert_eq!(appointments(&stats), -3.0);
    }
}
