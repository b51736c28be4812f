//! Course and section ("paralelo") models and DTOs.

use academia_core::serde::deserialize_optional_i64;
use academia_core::{PaginationMeta, PaginationParams};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const COURSE_NOT_FOUND: &str = "Curso no encontrado";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub duracion_horas: i32,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 150, message = "El nombre del curso es obligatorio"))]
    pub nombre: String,
    pub descripcion: Option<String>,
    #[validate(range(min = 1, max = 2000, message = "La duración debe estar entre 1 y 2000 horas"))]
    pub duracion_horas: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 150))]
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    #[validate(range(min = 1, max = 2000))]
    pub duracion_horas: Option<i32>,
    pub activo: Option<bool>,
}

#[derive(Debug, Deserialize, Default, IntoParams)]
pub struct CourseFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    /// Case-insensitive substring match on the course name
    pub nombre: Option<String>,
    pub activo: Option<bool>,
}

impl CourseFilterParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.limit)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub data: Vec<Course>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Section {
    pub id: i32,
    pub id_curso: i32,
    pub id_instructor: Option<i32>,
    pub nombre: String,
    pub cupo: i32,
    pub fecha_inicio: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A section with its instructor's name and how many seats are taken.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SectionWithStats {
    pub id: i32,
    pub id_curso: i32,
    pub id_instructor: Option<i32>,
    pub instructor: Option<String>,
    pub nombre: String,
    pub cupo: i32,
    pub fecha_inicio: NaiveDate,
    /// Enrollments that are not withdrawn
    pub inscritos: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSectionDto {
    #[validate(length(min = 1, max = 50, message = "El nombre del paralelo es obligatorio"))]
    pub nombre: String,
    /// `instructor.id`, not the user id
    pub id_instructor: Option<i32>,
    #[validate(range(min = 1, max = 500, message = "El cupo debe estar entre 1 y 500"))]
    pub cupo: i32,
    #[schema(value_type = String, format = Date, example = "2026-03-02")]
    pub fecha_inicio: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_dto_validation() {
        let valid = CreateCourseDto {
            nombre: "Soldadura industrial".to_string(),
            descripcion: None,
            duracion_horas: 40,
        };
        assert!(valid.validate().is_ok());

        let no_hours = CreateCourseDto {
            nombre: "Soldadura industrial".to_string(),
            descripcion: None,
            duracion_horas: 0,
        };
        assert!(no_hours.validate().is_err());

        let no_name = CreateCourseDto {
            nombre: String::new(),
            descripcion: None,
            duracion_horas: 40,
        };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_update_course_dto_allows_partial_updates() {
        let dto: UpdateCourseDto = serde_json::from_str(r#"{"activo": false}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.activo, Some(false));
        assert!(dto.nombre.is_none());
    }

    #[test]
    fn test_create_section_dto_parses_date() {
        let dto: CreateSectionDto = serde_json::from_str(
            r#"{"nombre":"A","cupo":25,"fecha_inicio":"2026-03-02"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.fecha_inicio, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert!(dto.id_instructor.is_none());
    }

    #[test]
    fn test_create_section_dto_rejects_zero_capacity() {
        let dto = CreateSectionDto {
            nombre: "A".to_string(),
            id_instructor: None,
            cupo: 0,
            fecha_inicio: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        };
        assert!(dto.validate().is_err());
    }
}
