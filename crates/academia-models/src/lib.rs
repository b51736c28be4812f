//! # Academia Models
//!
//! Domain models and DTOs for the Academia API: database rows, request and
//! response bodies, validation rules, and the grading rules.
//!
//! # Modules
//!
//! - [`auth`]: Login request and response bodies
//! - [`certificates`]: Issued certificates and their statistics
//! - [`common`]: Shared acknowledgment body
//! - [`courses`]: Courses and sections ("paralelos")
//! - [`dashboard`]: Dashboard aggregates
//! - [`enrollments`]: Enrollments, grades and the grade/status rules
//! - [`notifications`]: Per-user notifications
//! - [`users`]: Users and the closed set of roles
//!
//! # Example
//!
//! ```ignore
//! use academia_models::enrollments::{EnrollmentStatus, is_valid_grade};
//!
//! assert!(is_valid_grade(75.0));
//! assert_eq!(EnrollmentStatus::Active.after_grade(75.0), EnrollmentStatus::Completed);
//! ```

pub mod auth;
pub mod certificates;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod notifications;
pub mod users;

pub use auth::{LoginRequest, LoginResponse, LoginUser, UserCredentials};

pub use certificates::{
    Certificate, CertificateFilterParams, CertificateStatistics, CertificateWithDetails,
    CertificatesByCourse, IssueCertificateDto, PaginatedCertificatesResponse, certificate_code,
};

pub use common::SuccessResponse;

pub use courses::{
    Course, CourseFilterParams, CreateCourseDto, CreateSectionDto, PaginatedCoursesResponse,
    Section, SectionWithStats, UpdateCourseDto,
};

pub use dashboard::{DashboardSummary, RecentEnrollment, TopCourse, TopNParams};

pub use enrollments::{
    CreateEnrollmentDto, Enrollment, EnrollmentDetails, EnrollmentFilterParams, EnrollmentStatus,
    GradeAggregates, GradeStatistics, PaginatedEnrollmentsResponse, UpdateGradeDto,
    is_passing_grade, is_valid_grade,
};

pub use notifications::{
    CreateNotificationDto, Notification, NotificationListResponse, ReadAllResponse,
};

pub use users::{
    CreateUserDto, CreateUserResponse, GateUserRow, PaginatedUsersResponse, SessionUser,
    UpdateUserStatusDto, User, UserFilterParams, UserRole,
};
