use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::controller::{
    create_notification, delete_notification, get_notifications, mark_all_as_read, mark_as_read,
};

/// Routes for the caller's own notifications. Each handler authenticates
/// through the `AuthUser` extractor.
pub fn init_notifications_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_notifications))
        .route("/read-all", put(mark_all_as_read))
        .route("/{id}/read", put(mark_as_read))
        .route("/{id}", delete(delete_notification))
}

pub fn init_admin_notifications_router() -> Router<AppState> {
    Router::new().route("/", post(create_notification))
}
