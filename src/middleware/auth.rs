use anyhow::Context;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_cookies::Cookies;
use tracing::{debug, instrument};

use academia_auth::verify_session_token;
use academia_core::AppError;
use academia_core::errors::UNAUTHORIZED_MESSAGE;
use academia_models::users::{GateUserRow, SessionUser, UserRole};

use crate::state::AppState;

fn reject(reason: &'static str) -> AppError {
    debug!(reason, "Session rejected");
    AppError::unauthorized(UNAUTHORIZED_MESSAGE.to_string())
}

/// Verifies the session cookie and reloads its user.
///
/// `required` is the role the route demands, `None` for any active user.
/// Every rejection is the same 401 so callers cannot tell a missing cookie
/// from an expired token or a deactivated account; the reason is logged at
/// debug level only.
///
/// # Errors
///
/// 401 on any verification failure, 500 if the user lookup fails.
#[instrument(skip(state, cookies))]
pub async fn verify_session(
    state: &AppState,
    cookies: &Cookies,
    required: Option<UserRole>,
) -> Result<SessionUser, AppError> {
    let cookie = cookies
        .get(&state.session_config.cookie_name)
        .ok_or_else(|| reject("missing session cookie"))?;

    let claims = verify_session_token(cookie.value(), &state.jwt_config)
        .map_err(|_| reject("invalid or expired token"))?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| reject("non-numeric token subject"))?;

    let user = sqlx::query_as::<_, GateUserRow>(
        "SELECT id, email, rol, activo FROM usuario WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&state.db)
    .await
    .context("Failed to load session user")
    .map_err(AppError::database)?
    .ok_or_else(|| reject("user no longer exists"))?;

    if !user.activo {
        return Err(reject("user is inactive"));
    }

    if let Some(required) = required
        && !user.rol.satisfies(required)
    {
        return Err(reject("role does not satisfy route requirement"));
    }

    Ok(SessionUser {
        id: user.id,
        email: user.email,
        rol: user.rol,
    })
}

/// The verified caller.
///
/// Reuses the identity stored by [`require_admin`] when the route is
/// behind it; otherwise verifies the session itself, admitting any active
/// user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionUser);

impl AuthUser {
    pub fn id(&self) -> i32 {
        self.0.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal_error(msg.to_string()))?;

        let user = verify_session(state, &cookies, None).await?;
        Ok(AuthUser(user))
    }
}

/// Like [`AuthUser`] but only admits admins.
#[derive(Debug, Clone)]
pub struct AdminUser(pub SessionUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(AuthUser(user)) = parts.extensions.get::<AuthUser>()
            && user.rol.satisfies(UserRole::Admin)
        {
            return Ok(AdminUser(user.clone()));
        }

        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal_error(msg.to_string()))?;

        let user = verify_session(state, &cookies, Some(UserRole::Admin)).await?;
        Ok(AdminUser(user))
    }
}

async fn require_role(
    state: &AppState,
    cookies: &Cookies,
    mut req: Request,
    next: Next,
    role: UserRole,
) -> Response {
    match verify_session(state, cookies, Some(role)).await {
        Ok(user) => {
            req.extensions_mut().insert(AuthUser(user));
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

/// Gate for admin routes. The wrapped handler never runs on failure.
///
/// ```rust,ignore
/// let admin_routes = init_grades_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(
    State(state): State<AppState>,
    cookies: Cookies,
    req: Request,
    next: Next,
) -> Response {
    require_role(&state, &cookies, req, next, UserRole::Admin).await
}

/// Gate for the dashboard listings: open unless `DASHBOARD_REQUIRE_AUTH` is set.
pub async fn require_dashboard_access(
    State(state): State<AppState>,
    cookies: Cookies,
    req: Request,
    next: Next,
) -> Response {
    if !state.dashboard_config.require_auth {
        return next.run(req).await;
    }

    require_role(&state, &cookies, req, next, UserRole::Admin).await
}
