//! Dashboard aggregates.

use academia_core::serde::deserialize_optional_i64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::enrollments::EnrollmentStatus;

pub const DEFAULT_TOP_N: i64 = 5;
pub const MAX_TOP_N: i64 = 50;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TopCourse {
    pub id: i32,
    pub nombre: String,
    pub paralelos: i64,
    pub inscripciones: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RecentEnrollment {
    pub id: i32,
    pub estudiante: String,
    pub curso: String,
    pub paralelo: String,
    pub estado: EnrollmentStatus,
    pub fecha_inscripcion: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DashboardSummary {
    pub total_estudiantes: i64,
    pub total_instructores: i64,
    pub cursos_activos: i64,
    pub inscripciones_activas: i64,
    pub certificados_emitidos: i64,
}

#[derive(Debug, Deserialize, Default, IntoParams)]
pub struct TopNParams {
    /// Number of rows to return (1-50, default: 5)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl TopNParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_TOP_N).clamp(1, MAX_TOP_N)
    }
}
