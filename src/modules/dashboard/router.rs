use axum::{Router, middleware, routing::get};

use crate::middleware::auth::{require_admin, require_dashboard_access};
use crate::state::AppState;

use super::controller::{get_recent_enrollments, get_summary, get_top_courses};

/// The two listings follow the dashboard access policy; the summary is
/// always admin-only.
pub fn init_dashboard_router(state: &AppState) -> Router<AppState> {
    let listings = Router::new()
        .route("/cursos", get(get_top_courses))
        .route("/inscripciones", get(get_recent_enrollments))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_dashboard_access,
        ));

    let summary = Router::new()
        .route("/resumen", get(get_summary))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    listings.merge(summary)
}
