use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_governor::GovernorLayer;

use crate::state::AppState;

use super::controller::{get_session, login, logout};

pub fn init_auth_router(state: &AppState) -> Router<AppState> {
    let login_governor = Arc::new(state.rate_limit_config.login_governor_config());

    Router::new()
        .route(
            "/login",
            post(login).layer(GovernorLayer::new(login_governor)),
        )
        .route("/logout", post(logout))
        .route("/session", get(get_session))
}
