//! Enrollment data models and DTOs, re-exported from `academia-models`.

pub use academia_models::enrollments::*;

pub const SECTION_NOT_FOUND: &str = "Paralelo no encontrado";
pub const STUDENT_NOT_FOUND: &str = "Estudiante no encontrado";
pub const SECTION_FULL: &str = "El paralelo no tiene cupos disponibles";
pub const ALREADY_ENROLLED: &str = "El estudiante ya está inscrito en este paralelo";
