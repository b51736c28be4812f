use axum::Json;
use axum::extract::State;
use tower_cookies::Cookies;
use tracing::{info, instrument};

use academia_core::{AppError, ErrorResponse};
use academia_models::SuccessResponse;

use super::model::{LOGGED_OUT, LoginRequest, LoginResponse, SessionUser};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::session_cookie::{expired_session_cookie, session_cookie};
use crate::validator::ValidatedJson;

/// Log in and receive the session cookie
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, cookies, dto))]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token, user) = AuthService::login(&state.db, dto, &state.jwt_config).await?;

    cookies.add(session_cookie(
        token,
        &state.session_config,
        state.jwt_config.session_expiry,
    ));
    info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

/// Log out by clearing the session cookie
///
/// Always succeeds, with or without a session. The token itself is not
/// revoked and stays valid until it expires.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = SuccessResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, cookies))]
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Json<SuccessResponse> {
    cookies.add(expired_session_cookie(&state.session_config));
    Json(SuccessResponse::new(LOGGED_OUT))
}

/// Current session user
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "The authenticated user", body = SessionUser),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("session_cookie" = []))
)]
#[instrument(skip(auth_user))]
pub async fn get_session(auth_user: AuthUser) -> Json<SessionUser> {
    Json(auth_user.0)
}
