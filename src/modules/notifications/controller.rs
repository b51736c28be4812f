use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use academia_core::{AppError, ErrorResponse};
use academia_models::SuccessResponse;

use super::model::{
    CreateNotificationDto, NOTIFICATION_DELETED, NOTIFICATION_READ, Notification,
    NotificationListResponse, ReadAllResponse,
};
use super::service::NotificationService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// The caller's notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notificaciones",
    responses(
        (status = 200, description = "Own notifications and unread count", body = NotificationListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.id()))]
pub async fn get_notifications(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<NotificationListResponse>, AppError> {
    let notifications =
        NotificationService::get_user_notifications(&state.db, auth_user.id()).await?;
    Ok(Json(notifications))
}

#[utoipa::path(
    put,
    path = "/api/notificaciones/{id}/read",
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = SuccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Not found or not owned by the caller", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.id()))]
pub async fn mark_as_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    NotificationService::mark_as_read(&state.db, id, auth_user.id()).await?;
    Ok(Json(SuccessResponse::new(NOTIFICATION_READ)))
}

#[utoipa::path(
    put,
    path = "/api/notificaciones/read-all",
    responses(
        (status = 200, description = "All own notifications marked as read", body = ReadAllResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.id()))]
pub async fn mark_all_as_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ReadAllResponse>, AppError> {
    let updated = NotificationService::mark_all_as_read(&state.db, auth_user.id()).await?;
    Ok(Json(ReadAllResponse {
        success: true,
        updated,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/notificaciones/{id}",
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted", body = SuccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Not found or not owned by the caller", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.id()))]
pub async fn delete_notification(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    NotificationService::delete_notification(&state.db, id, auth_user.id()).await?;
    Ok(Json(SuccessResponse::new(NOTIFICATION_DELETED)))
}

/// Send a notification to a user
#[utoipa::path(
    post,
    path = "/api/admin/notificaciones",
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipient not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Notifications",
    security(("session_cookie" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_notification(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateNotificationDto>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification = NotificationService::create_notification(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}
