use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;

use super::repository::SchoolRepository;
use super::service::SchoolHealthService;
use crate::error::AppError;
use crate::health::domain::{SchoolId, Status};
use crate::health::report::views::{NationalSummaryView, RiskRegister, SchoolHealthView, SchoolRow};

/// Router builder exposing the read-only health endpoints.
pub fn health_router<R>(service: Arc<SchoolHealthService<R>>) -> Router
where
    R: SchoolRepository + 'static,
{
    Router::new()
        .route("/api/v1/national", get(national_handler::<R>))
        .route("/api/v1/schools", get(schools_handler::<R>))
        .route("/api/v1/schools/:school_id", get(school_handler::<R>))
        .route("/api/v1/risks", get(risks_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SchoolsQuery {
    status: Option<String>,
}

pub(crate) async fn national_handler<R>(
    State(service): State<Arc<SchoolHealthService<R>>>,
) -> Result<Json<NationalSummaryView>, AppError>
where
    R: SchoolRepository + 'static,
{
    let view = service.national(Local::now().date_naive())?;
    Ok(Json(view))
}

pub(crate) async fn schools_handler<R>(
    State(service): State<Arc<SchoolHealthService<R>>>,
    Query(query): Query<SchoolsQuery>,
) -> Result<Json<Vec<SchoolRow>>, AppError>
where
    R: SchoolRepository + 'static,
{
    let status = query
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?;
    let rows = service.rows(status)?;
    Ok(Json(rows))
}

pub(crate) async fn school_handler<R>(
    State(service): State<Arc<SchoolHealthService<R>>>,
    Path(school_id): Path<String>,
) -> Result<Json<SchoolHealthView>, AppError>
where
    R: SchoolRepository + 'static,
{
    let report = service.report(&SchoolId(school_id))?;
    Ok(Json(report))
}

pub(crate) async fn risks_handler<R>(
    State(service): State<Arc<SchoolHealthService<R>>>,
) -> Result<Json<RiskRegister>, AppError>
where
    R: SchoolRepository + 'static,
{
    let register = service.risk_register()?;
    Ok(Json(register))
}
