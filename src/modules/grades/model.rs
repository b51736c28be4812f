pub use academia_models::enrollments::{
    ENROLLMENT_NOT_FOUND, EnrollmentFilterParams, EnrollmentStatus, GRADE_OUT_OF_RANGE,
    GRADE_UPDATED, GradeAggregates, GradeStatistics, PASSING_GRADE, PaginatedEnrollmentsResponse,
    UpdateGradeDto, is_valid_grade,
};
