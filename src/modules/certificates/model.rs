pub use academia_models::certificates::*;
pub use academia_models::enrollments::{ENROLLMENT_NOT_FOUND, EnrollmentStatus};
