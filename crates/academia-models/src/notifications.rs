//! Notification models and DTOs.
//!
//! A notification belongs to exactly one user. Only that user may mark it
//! read or delete it; for anyone else it does not exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub const NOTIFICATION_NOT_FOUND: &str = "Notificación no encontrada";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: i32,
    pub id_usuario: i32,
    pub titulo: String,
    pub mensaje: String,
    pub leida: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationListResponse {
    pub data: Vec<Notification>,
    pub unread: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationDto {
    pub id_usuario: i32,
    #[validate(length(min = 1, max = 200, message = "El título es obligatorio"))]
    pub titulo: String,
    #[validate(length(min = 1, max = 2000, message = "El mensaje es obligatorio"))]
    pub mensaje: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadAllResponse {
    pub success: bool,
    /// Notifications that were unread before the call
    pub updated: u64,
}
