pub mod auth;
pub mod certificates;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod grades;
pub mod notifications;
pub mod users;
