//! Enrollment ("inscripción") models, grade rules and DTOs.
//!
//! An enrollment links a student to a section. Its final grade lives on the
//! same row. Grades are in [0, 100]; a grade of 51 or more moves an `active`
//! enrollment to `completed`. Enrollments in any other state keep their state.

use academia_core::serde::{deserialize_optional_i32, deserialize_optional_i64};
use academia_core::{PaginationMeta, PaginationParams};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;
pub const PASSING_GRADE: f64 = 51.0;

pub const GRADE_OUT_OF_RANGE: &str = "La calificación debe estar entre 0 y 100";
pub const GRADE_UPDATED: &str = "Calificación actualizada correctamente";
pub const ENROLLMENT_NOT_FOUND: &str = "Inscripción no encontrada";

/// `estado_inscripcion` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_inscripcion", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Withdrawn,
}

impl EnrollmentStatus {
    /// State after recording `grade`. Only `active` enrollments move.
    pub fn after_grade(self, grade: f64) -> Self {
        match self {
            EnrollmentStatus::Active if is_passing_grade(grade) => EnrollmentStatus::Completed,
            EnrollmentStatus::Active => EnrollmentStatus::Active,
            EnrollmentStatus::Completed => EnrollmentStatus::Completed,
            EnrollmentStatus::Withdrawn => EnrollmentStatus::Withdrawn,
        }
    }
}

pub fn is_valid_grade(grade: f64) -> bool {
    grade.is_finite() && (MIN_GRADE..=MAX_GRADE).contains(&grade)
}

pub fn is_passing_grade(grade: f64) -> bool {
    grade >= PASSING_GRADE
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Enrollment {
    pub id: i32,
    pub id_estudiante: i32,
    pub id_paralelo: i32,
    pub estado: EnrollmentStatus,
    pub calificacion_final: Option<f64>,
    pub observaciones: Option<String>,
    pub fecha_inscripcion: chrono::DateTime<chrono::Utc>,
}

/// Enrollment joined with student, section and course names.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct EnrollmentDetails {
    pub id: i32,
    pub id_estudiante: i32,
    pub estudiante: String,
    pub email: String,
    pub id_paralelo: i32,
    pub paralelo: String,
    pub id_curso: i32,
    pub curso: String,
    pub estado: EnrollmentStatus,
    pub calificacion_final: Option<f64>,
    pub observaciones: Option<String>,
    pub fecha_inscripcion: chrono::DateTime<chrono::Utc>,
    pub tiene_certificado: bool,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateEnrollmentDto {
    pub id_estudiante: i32,
    pub id_paralelo: i32,
}

/// Body of `PUT /api/admin/calificaciones/{id}`.
///
/// The range of `calificacion_final` is checked by the grade service before
/// the validator rules run, because it answers 400 with a fixed message.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateGradeDto {
    #[schema(example = 75.0)]
    pub calificacion_final: f64,
    #[validate(length(max = 2000, message = "Las observaciones no pueden superar 2000 caracteres"))]
    pub observaciones: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
pub struct EnrollmentFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    pub estado: Option<EnrollmentStatus>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub id_paralelo: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub id_curso: Option<i32>,
}

impl EnrollmentFilterParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.limit)
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PaginatedEnrollmentsResponse {
    pub data: Vec<EnrollmentDetails>,
    pub meta: PaginationMeta,
}

/// Raw aggregates as returned by the statistics query.
#[derive(FromRow, Debug, Clone, Default)]
pub struct GradeAggregates {
    pub total_inscripciones: i64,
    pub calificadas: i64,
    pub aprobadas: i64,
    pub reprobadas: i64,
    pub promedio: Option<f64>,
    pub nota_maxima: Option<f64>,
    pub nota_minima: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GradeStatistics {
    pub total_inscripciones: i64,
    pub calificadas: i64,
    pub sin_calificar: i64,
    pub aprobadas: i64,
    pub reprobadas: i64,
    pub promedio: Option<f64>,
    pub nota_maxima: Option<f64>,
    pub nota_minima: Option<f64>,
    /// Percentage of graded enrollments that passed, 0 when nothing is graded.
    pub tasa_aprobacion: f64,
}

impl From<GradeAggregates> for GradeStatistics {
    fn from(agg: GradeAggregates) -> Self {
        let tasa_aprobacion = if agg.calificadas == 0 {
            0.0
        } else {
            round2(agg.aprobadas as f64 * 100.0 / agg.calificadas as f64)
        };

        Self {
            total_inscripciones: agg.total_inscripciones,
            calificadas: agg.calificadas,
            sin_calificar: agg.total_inscripciones - agg.calificadas,
            aprobadas: agg.aprobadas,
            reprobadas: agg.reprobadas,
            promedio: agg.promedio.map(round2),
            nota_maxima: agg.nota_maxima,
            nota_minima: agg.nota_minima,
            tasa_aprobacion,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_range_is_inclusive() {
        assert!(is_valid_grade(0.0));
        assert!(is_valid_grade(100.0));
        assert!(is_valid_grade(51.0));
        assert!(is_valid_grade(99.99));
        assert!(!is_valid_grade(-0.01));
        assert!(!is_valid_grade(100.01));
        assert!(!is_valid_grade(150.0));
        assert!(!is_valid_grade(f64::NAN));
        assert!(!is_valid_grade(f64::INFINITY));
    }

    #[test]
    fn test_passing_threshold() {
        assert!(is_passing_grade(51.0));
        assert!(is_passing_grade(75.0));
        assert!(!is_passing_grade(50.99));
        assert!(!is_passing_grade(0.0));
    }

    #[test]
    fn test_active_enrollment_completes_on_passing_grade() {
        assert_eq!(
            EnrollmentStatus::Active.after_grade(75.0),
            EnrollmentStatus::Completed
        );
        assert_eq!(
            EnrollmentStatus::Active.after_grade(51.0),
            EnrollmentStatus::Completed
        );
    }

    #[test]
    fn test_active_enrollment_stays_active_on_failing_grade() {
        assert_eq!(
            EnrollmentStatus::Active.after_grade(50.0),
            EnrollmentStatus::Active
        );
    }

    #[test]
    fn test_transition_is_idempotent() {
        let once = EnrollmentStatus::Active.after_grade(80.0);
        let twice = once.after_grade(80.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_active_enrollments_never_move() {
        assert_eq!(
            EnrollmentStatus::Withdrawn.after_grade(90.0),
            EnrollmentStatus::Withdrawn
        );
        assert_eq!(
            EnrollmentStatus::Completed.after_grade(10.0),
            EnrollmentStatus::Completed
        );
    }

    #[test]
    fn test_update_grade_dto_requires_grade() {
        assert!(serde_json::from_str::<UpdateGradeDto>(r#"{"observaciones":"x"}"#).is_err());

        let dto: UpdateGradeDto =
            serde_json::from_str(r#"{"calificacion_final": 75}"#).unwrap();
        assert_eq!(dto.calificacion_final, 75.0);
        assert!(dto.observaciones.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_grade_statistics_from_aggregates() {
        let stats = GradeStatistics::from(GradeAggregates {
            total_inscripciones: 10,
            calificadas: 3,
            aprobadas: 2,
            reprobadas: 1,
            promedio: Some(61.666_666),
            nota_maxima: Some(90.0),
            nota_minima: Some(40.0),
        });

        assert_eq!(stats.sin_calificar, 7);
        assert_eq!(stats.promedio, Some(61.67));
        assert_eq!(stats.tasa_aprobacion, 66.67);
    }

    #[test]
    fn test_grade_statistics_with_nothing_graded() {
        let stats = GradeStatistics::from(GradeAggregates::default());
        assert_eq!(stats.tasa_aprobacion, 0.0);
        assert_eq!(stats.promedio, None);
        assert_eq!(stats.sin_calificar, 0);
    }
}
