use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;

use super::repository::{LeadBundle, LeadId, LeadRecord, LeadRepository, LeadStatusView};
use super::service::LeadScoringService;
use crate::error::AppError;
use crate::scoring::{registered_service_types, ScoringResult, SCORING_VERSION};

/// Registered weight profiles, for UI pickers and audits.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileListing {
    pub version: &'static str,
    pub service_types: Vec<&'static str>,
}

/// Router builder exposing lead registration, recalculation and preview endpoints.
pub fn lead_router<R>(service: Arc<LeadScoringService<R>>) -> Router
where
    R: LeadRepository + 'static,
{
    Router::new()
        .route("/api/v1/leads", post(register_handler::<R>))
        .route("/api/v1/leads/:lead_id", get(status_handler::<R>))
        .route("/api/v1/leads/:lead_id/score", post(recalculate_handler::<R>))
        .route("/api/v1/scoring/preview", post(preview_handler::<R>))
        .route("/api/v1/scoring/profiles", get(profiles_handler))
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Json(record): Json<LeadRecord>,
) -> Result<(StatusCode, Json<LeadStatusView>), AppError>
where
    R: LeadRepository + 'static,
{
    let stored = service.register(record)?;
    Ok((StatusCode::CREATED, Json(stored.status_view())))
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Path(lead_id): Path<String>,
) -> Result<Json<LeadStatusView>, AppError>
where
    R: LeadRepository + 'static,
{
    let record = service.get(&LeadId(lead_id))?;
    Ok(Json(record.status_view()))
}

pub(crate) async fn recalculate_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Path(lead_id): Path<String>,
) -> Result<Json<ScoringResult>, AppError>
where
    R: LeadRepository + 'static,
{
    let result = service.recalculate(&LeadId(lead_id), Utc::now())?;
    Ok(Json(result))
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Json(bundle): Json<LeadBundle>,
) -> Json<ScoringResult>
where
    R: LeadRepository + 'static,
{
    Json(service.score_bundle(&bundle, Utc::now()))
}

pub(crate) async fn profiles_handler() -> Json<ProfileListing> {
    Json(ProfileListing {
        version: SCORING_VERSION,
        service_types: registered_service_types(),
    })
}
