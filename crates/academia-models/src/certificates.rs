//! Certificate models.
//!
//! A certificate's existence is the "issued" signal for an enrollment; there
//! is no state column. At most one certificate exists per enrollment.

use academia_core::serde::deserialize_optional_i64;
use academia_core::{PaginationMeta, PaginationParams};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const CERTIFICATE_NOT_FOUND: &str = "Certificado no encontrado";
pub const CERTIFICATE_ALREADY_ISSUED: &str = "La inscripción ya tiene un certificado emitido";
pub const ENROLLMENT_NOT_COMPLETED: &str =
    "Solo se pueden emitir certificados para inscripciones completadas";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Certificate {
    pub id: i32,
    pub id_inscripcion: i32,
    pub codigo: String,
    pub fecha_emision: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CertificateWithDetails {
    pub id: i32,
    pub id_inscripcion: i32,
    pub codigo: String,
    pub fecha_emision: DateTime<Utc>,
    pub estudiante: String,
    pub email: String,
    pub curso: String,
    pub paralelo: String,
    pub calificacion_final: Option<f64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssueCertificateDto {
    pub id_inscripcion: i32,
}

#[derive(Debug, Deserialize, Default, IntoParams)]
pub struct CertificateFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl CertificateFilterParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.limit)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCertificatesResponse {
    pub data: Vec<CertificateWithDetails>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CertificatesByCourse {
    pub id_curso: i32,
    pub curso: String,
    pub emitidos: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CertificateStatistics {
    pub total_emitidos: i64,
    /// Issued during the last 30 days
    pub emitidos_ultimo_mes: i64,
    /// Completed enrollments still without a certificate
    pub pendientes: i64,
    pub por_curso: Vec<CertificatesByCourse>,
}

/// Builds a certificate code such as `CERT-2026-000042`.
///
/// The enrollment id makes it unique because an enrollment holds at most one
/// certificate.
pub fn certificate_code(id_inscripcion: i32, issued_at: DateTime<Utc>) -> String {
    format!("CERT-{}-{:06}", issued_at.year(), id_inscripcion)
}
