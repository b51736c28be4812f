use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use academia_core::{AppError, ErrorResponse};

use super::model::{
    CreateUserDto, CreateUserResponse, PaginatedUsersResponse, UpdateUserStatusDto, User,
    UserFilterParams,
};
use super::service::UserService;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a user with a fixed role
#[utoipa::path(
    post,
    path = "/api/admin/usuarios",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Users",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/admin/usuarios",
    params(UserFilterParams),
    responses(
        (status = 200, description = "Users", body = PaginatedUsersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Users",
    security(("session_cookie" = []))
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let users = UserService::get_users(&state.db, filters).await?;
    Ok(Json(users))
}

/// Activate or deactivate a user
#[utoipa::path(
    put,
    path = "/api/admin/usuarios/{id}/estado",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Status updated", body = User),
        (status = 400, description = "An admin cannot deactivate their own account", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, admin), fields(caller_id = admin.0.id))]
pub async fn update_user_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateUserStatusDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_status(&state.db, admin.0.id, id, dto.activo).await?;
    Ok(Json(user))
}
