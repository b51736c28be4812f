//! Notification persistence.
//!
//! Every mutation filters on both the notification id and the caller's user
//! id in a single statement. A notification owned by someone else therefore
//! affects zero rows and is reported exactly like a missing one.

use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::{info, instrument};

use academia_core::AppError;

use super::model::{
    CreateNotificationDto, NOTIFICATION_NOT_FOUND, Notification, NotificationListResponse,
    RECIPIENT_NOT_FOUND,
};

pub struct NotificationService;

impl NotificationService {
    #[instrument(skip(db))]
    pub async fn get_user_notifications(
        db: &PgPool,
        user_id: i32,
    ) -> Result<NotificationListResponse, AppError> {
        let data = sqlx::query_as::<_, Notification>(
            r#"SELECT id, id_usuario, titulo, mensaje, leida, created_at
               FROM notificacion
               WHERE id_usuario = $1
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch notifications")
        .map_err(AppError::database)?;

        let unread = data.iter().filter(|n| !n.leida).count() as i64;

        Ok(NotificationListResponse { data, unread })
    }

    #[instrument(skip(db))]
    pub async fn mark_as_read(db: &PgPool, id: i32, user_id: i32) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE notificacion SET leida = TRUE WHERE id = $1 AND id_usuario = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await
        .context("Failed to mark notification as read")
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(NOTIFICATION_NOT_FOUND)));
        }

        Ok(())
    }

    /// Marks every unread notification of the caller as read and returns how
    /// many changed.
    #[instrument(skip(db))]
    pub async fn mark_all_as_read(db: &PgPool, user_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE notificacion SET leida = TRUE WHERE id_usuario = $1 AND leida = FALSE",
        )
        .bind(user_id)
        .execute(db)
        .await
        .context("Failed to mark notifications as read")
        .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(db))]
    pub async fn delete_notification(db: &PgPool, id: i32, user_id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notificacion WHERE id = $1 AND id_usuario = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete notification")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(NOTIFICATION_NOT_FOUND)));
        }

        Ok(())
    }

    #[instrument(skip(db, dto), fields(id_usuario = dto.id_usuario))]
    pub async fn create_notification(
        db: &PgPool,
        dto: CreateNotificationDto,
    ) -> Result<Notification, AppError> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"INSERT INTO notificacion (id_usuario, titulo, mensaje)
               VALUES ($1, $2, $3)
               RETURNING id, id_usuario, titulo, mensaje, leida, created_at"#,
        )
        .bind(dto.id_usuario)
        .bind(&dto.titulo)
        .bind(&dto.mensaje)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::not_found(anyhow!(RECIPIENT_NOT_FOUND));
            }
            AppError::database(anyhow::Error::from(e).context("Failed to create notification"))
        })?;

        info!(notification_id = notification.id, "Notification created");
        Ok(notification)
    }
}
