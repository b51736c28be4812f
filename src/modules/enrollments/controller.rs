use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;

use academia_core::{AppError, ErrorResponse};

use super::model::{
    CreateEnrollmentDto, Enrollment, EnrollmentFilterParams, PaginatedEnrollmentsResponse,
};
use super::service::EnrollmentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/admin/inscripciones",
    params(EnrollmentFilterParams),
    responses(
        (status = 200, description = "Enrollments", body = PaginatedEnrollmentsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Enrollments",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn get_enrollments(
    State(state): State<AppState>,
    Query(filters): Query<EnrollmentFilterParams>,
) -> Result<Json<PaginatedEnrollmentsResponse>, AppError> {
    let enrollments = EnrollmentService::get_enrollments(&state.db, filters).await?;
    Ok(Json(enrollments))
}

#[utoipa::path(
    post,
    path = "/api/admin/inscripciones",
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Student enrolled", body = Enrollment),
        (status = 400, description = "Section is full", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student or section not found", body = ErrorResponse),
        (status = 409, description = "Student already enrolled in the section", body = ErrorResponse)
    ),
    tag = "Enrollments",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let enrollment = EnrollmentService::create_enrollment(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}
