pub use academia_models::courses::*;

pub const INSTRUCTOR_NOT_FOUND: &str = "Instructor no encontrado";
pub const SECTION_NAME_TAKEN: &str = "Ya existe un paralelo con ese nombre en el curso";
pub const COURSE_HAS_ENROLLMENTS: &str = "No se puede eliminar un curso con inscripciones";
