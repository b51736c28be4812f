use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_admin;
use crate::modules::auth::init_auth_router;
use crate::modules::certificates::init_certificates_router;
use crate::modules::courses::init_courses_router;
use crate::modules::dashboard::init_dashboard_router;
use crate::modules::enrollments::init_enrollments_router;
use crate::modules::grades::init_grades_router;
use crate::modules::notifications::{init_admin_notifications_router, init_notifications_router};
use crate::modules::users::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_cookies::CookieManagerLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .merge(init_auth_router(&state))
                .nest("/notificaciones", init_notifications_router())
                .nest(
                    "/admin/notificaciones",
                    init_admin_notifications_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/admin/calificaciones",
                    init_grades_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/admin/certificaciones",
                    init_certificates_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/admin/cursos",
                    init_courses_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/admin/inscripciones",
                    init_enrollments_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/admin/usuarios",
                    init_users_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest("/admin/dashboard", init_dashboard_router(&state)),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            // Credentials are required for the session cookie to cross origins.
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::COOKIE,
                ])
                .allow_credentials(true)
        })
        .layer(CookieManagerLayer::new())
        .layer(middleware::from_fn(logging_middleware))
}
