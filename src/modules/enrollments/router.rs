use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_enrollment, get_enrollments};

pub fn init_enrollments_router() -> Router<AppState> {
    Router::new().route("/", get(get_enrollments).post(create_enrollment))
}
