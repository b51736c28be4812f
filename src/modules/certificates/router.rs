use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{
    get_certificate_statistics, get_certificates, issue_certificate, revoke_certificate,
};

pub fn init_certificates_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_certificates).post(issue_certificate))
        .route("/estadisticas", get(get_certificate_statistics))
        .route("/{id}", delete(revoke_certificate))
}
