use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use academia_core::{AppError, ErrorResponse};

use super::model::{DashboardSummary, RecentEnrollment, TopCourse, TopNParams};
use super::service::DashboardService;
use crate::state::AppState;

/// Courses with the most enrollments
///
/// Public unless `DASHBOARD_REQUIRE_AUTH=true`.
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/cursos",
    params(TopNParams),
    responses(
        (status = 200, description = "Top courses", body = Vec<TopCourse>),
        (status = 401, description = "Unauthorized (only when the dashboard requires auth)", body = ErrorResponse)
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_top_courses(
    State(state): State<AppState>,
    Query(params): Query<TopNParams>,
) -> Result<Json<Vec<TopCourse>>, AppError> {
    let courses = DashboardService::get_top_courses(&state.db, params.limit()).await?;
    Ok(Json(courses))
}

/// Latest enrollments
///
/// Public unless `DASHBOARD_REQUIRE_AUTH=true`.
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/inscripciones",
    params(TopNParams),
    responses(
        (status = 200, description = "Most recent enrollments", body = Vec<RecentEnrollment>),
        (status = 401, description = "Unauthorized (only when the dashboard requires auth)", body = ErrorResponse)
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_recent_enrollments(
    State(state): State<AppState>,
    Query(params): Query<TopNParams>,
) -> Result<Json<Vec<RecentEnrollment>>, AppError> {
    let enrollments = DashboardService::get_recent_enrollments(&state.db, params.limit()).await?;
    Ok(Json(enrollments))
}

#[utoipa::path(
    get,
    path = "/api/admin/dashboard/resumen",
    responses(
        (status = 200, description = "Global counters", body = DashboardSummary),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Dashboard",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let summary = DashboardService::get_summary(&state.db).await?;
    Ok(Json(summary))
}
