use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use academia_core::{ErrorResponse, PaginationMeta};
use academia_models::{
    Certificate, CertificateStatistics, CertificateWithDetails, CertificatesByCourse, Course,
    CreateCourseDto, CreateEnrollmentDto, CreateNotificationDto, CreateSectionDto, CreateUserDto,
    CreateUserResponse, DashboardSummary, Enrollment, EnrollmentDetails, EnrollmentStatus,
    GradeStatistics, IssueCertificateDto, LoginRequest, LoginResponse, LoginUser, Notification,
    NotificationListResponse, PaginatedCertificatesResponse, PaginatedCoursesResponse,
    PaginatedEnrollmentsResponse, PaginatedUsersResponse, ReadAllResponse, RecentEnrollment,
    Section, SectionWithStats, SessionUser, SuccessResponse, TopCourse, UpdateCourseDto,
    UpdateGradeDto, UpdateUserStatusDto, User, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::get_session,
        crate::modules::notifications::controller::get_notifications,
        crate::modules::notifications::controller::mark_as_read,
        crate::modules::notifications::controller::mark_all_as_read,
        crate::modules::notifications::controller::delete_notification,
        crate::modules::notifications::controller::create_notification,
        crate::modules::grades::controller::get_grades,
        crate::modules::grades::controller::update_grade,
        crate::modules::grades::controller::get_grade_statistics,
        crate::modules::certificates::controller::get_certificates,
        crate::modules::certificates::controller::issue_certificate,
        crate::modules::certificates::controller::revoke_certificate,
        crate::modules::certificates::controller::get_certificate_statistics,
        crate::modules::dashboard::controller::get_top_courses,
        crate::modules::dashboard::controller::get_recent_enrollments,
        crate::modules::dashboard::controller::get_summary,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::get_sections,
        crate::modules::courses::controller::create_section,
        crate::modules::enrollments::controller::get_enrollments,
        crate::modules::enrollments::controller::create_enrollment,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::update_user_status,
    ),
    components(
        schemas(
            ErrorResponse,
            SuccessResponse,
            PaginationMeta,
            LoginRequest,
            LoginResponse,
            LoginUser,
            SessionUser,
            User,
            UserRole,
            CreateUserDto,
            CreateUserResponse,
            UpdateUserStatusDto,
            PaginatedUsersResponse,
            Notification,
            NotificationListResponse,
            CreateNotificationDto,
            ReadAllResponse,
            Enrollment,
            EnrollmentDetails,
            EnrollmentStatus,
            CreateEnrollmentDto,
            UpdateGradeDto,
            PaginatedEnrollmentsResponse,
            GradeStatistics,
            Certificate,
            CertificateWithDetails,
            CertificatesByCourse,
            CertificateStatistics,
            IssueCertificateDto,
            PaginatedCertificatesResponse,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            PaginatedCoursesResponse,
            Section,
            SectionWithStats,
            CreateSectionDto,
            TopCourse,
            RecentEnrollment,
            DashboardSummary,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Session cookie login and logout"),
        (name = "Notifications", description = "Per-user notifications"),
        (name = "Grades", description = "Final grades and grade statistics"),
        (name = "Certificates", description = "Completion certificates"),
        (name = "Dashboard", description = "Dashboard listings and counters"),
        (name = "Courses", description = "Courses and their sections"),
        (name = "Enrollments", description = "Student enrollments"),
        (name = "Users", description = "User management")
    ),
    info(
        title = "Academia API",
        version = "0.1.0",
        description = "Administration API for an academy: courses, enrollments, grades, certificates and notifications behind a cookie-carried JWT session.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            )
        }
    }
}
