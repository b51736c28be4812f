use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use academia_core::{AppError, ErrorResponse};

use super::model::{
    Certificate, CertificateFilterParams, CertificateStatistics, IssueCertificateDto,
    PaginatedCertificatesResponse,
};
use super::service::CertificateService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/admin/certificaciones",
    params(CertificateFilterParams),
    responses(
        (status = 200, description = "Issued certificates", body = PaginatedCertificatesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Certificates",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn get_certificates(
    State(state): State<AppState>,
    Query(filters): Query<CertificateFilterParams>,
) -> Result<Json<PaginatedCertificatesResponse>, AppError> {
    let certificates = CertificateService::get_certificates(&state.db, filters).await?;
    Ok(Json(certificates))
}

/// Issue the certificate of a completed enrollment
#[utoipa::path(
    post,
    path = "/api/admin/certificaciones",
    request_body = IssueCertificateDto,
    responses(
        (status = 201, description = "Certificate issued", body = Certificate),
        (status = 400, description = "Enrollment is not completed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 409, description = "Certificate already issued", body = ErrorResponse)
    ),
    tag = "Certificates",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn issue_certificate(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IssueCertificateDto>,
) -> Result<(StatusCode, Json<Certificate>), AppError> {
    let certificate = CertificateService::issue_certificate(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(certificate)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/certificaciones/{id}",
    params(
        ("id" = i32, Path, description = "Certificate ID")
    ),
    responses(
        (status = 204, description = "Certificate revoked"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Certificate not found", body = ErrorResponse)
    ),
    tag = "Certificates",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn revoke_certificate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    CertificateService::revoke_certificate(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/certificaciones/estadisticas",
    responses(
        (status = 200, description = "Certificate statistics", body = CertificateStatistics),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Certificates",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn get_certificate_statistics(
    State(state): State<AppState>,
) -> Result<Json<CertificateStatistics>, AppError> {
    let stats = CertificateService::get_statistics(&state.db).await?;
    Ok(Json(stats))
}
