use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{get_grade_statistics, get_grades, update_grade};

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_grades))
        .route("/estadisticas", get(get_grade_statistics))
        .route("/{id}", put(update_grade))
}
