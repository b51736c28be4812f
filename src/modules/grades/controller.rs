use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use academia_core::{AppError, ErrorResponse};
use academia_models::SuccessResponse;

use super::model::{
    EnrollmentFilterParams, GRADE_UPDATED, GradeStatistics, PaginatedEnrollmentsResponse,
    UpdateGradeDto,
};
use super::service::GradeService;
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::validator::JsonBody;

/// Enrollments with their grades
#[utoipa::path(
    get,
    path = "/api/admin/calificaciones",
    params(EnrollmentFilterParams),
    responses(
        (status = 200, description = "Graded and ungraded enrollments", body = PaginatedEnrollmentsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Grades",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn get_grades(
    State(state): State<AppState>,
    Query(filters): Query<EnrollmentFilterParams>,
) -> Result<Json<PaginatedEnrollmentsResponse>, AppError> {
    let grades = EnrollmentService::get_enrollments(&state.db, filters).await?;
    Ok(Json(grades))
}

/// Set the final grade of an enrollment
#[utoipa::path(
    put,
    path = "/api/admin/calificaciones/{id}",
    params(
        ("id" = i32, Path, description = "Enrollment ID")
    ),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade recorded", body = SuccessResponse),
        (status = 400, description = "Grade outside [0, 100] or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Grades",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(dto): JsonBody<UpdateGradeDto>,
) -> Result<Json<SuccessResponse>, AppError> {
    GradeService::update_grade(&state.db, id, dto).await?;
    Ok(Json(SuccessResponse::new(GRADE_UPDATED)))
}

#[utoipa::path(
    get,
    path = "/api/admin/calificaciones/estadisticas",
    responses(
        (status = 200, description = "Grade statistics", body = GradeStatistics),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Grades",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn get_grade_statistics(
    State(state): State<AppState>,
) -> Result<Json<GradeStatistics>, AppError> {
    let stats = GradeService::get_statistics(&state.db).await?;
    Ok(Json(stats))
}
