use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::{info, instrument};

use academia_core::{AppError, PaginationMeta, hash_password};

use super::model::{
    CANNOT_DEACTIVATE_SELF, CreateUserDto, CreateUserResponse, EMAIL_TAKEN,
    PaginatedUsersResponse, USER_NOT_FOUND, User, UserFilterParams, UserRole,
};

const USER_COLUMNS: &str = "id, email, nombre, apellido, rol, activo, created_at";

pub struct UserService;

impl UserService {
    /// Creates a user and, for students and instructors, its profile row in
    /// the same transaction.
    #[instrument(skip(db, dto), fields(email = %dto.email, rol = %dto.rol))]
    pub async fn create_user(
        db: &PgPool,
        dto: CreateUserDto,
    ) -> Result<CreateUserResponse, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"INSERT INTO usuario (email, password_hash, nombre, apellido, rol)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(dto.email.trim().to_lowercase())
        .bind(&password_hash)
        .bind(dto.nombre.trim())
        .bind(dto.apellido.trim())
        .bind(dto.rol)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow!(EMAIL_TAKEN));
            }
            AppError::database(anyhow::Error::from(e).context("Failed to create user"))
        })?;

        let id_perfil = match dto.rol {
            UserRole::Admin => None,
            UserRole::Student => Some(
                sqlx::query_scalar::<_, i32>(
                    "INSERT INTO estudiante (id_usuario) VALUES ($1) RETURNING id",
                )
                .bind(user.id)
                .fetch_one(&mut *tx)
                .await
                .context("Failed to create student profile")
                .map_err(AppError::database)?,
            ),
            UserRole::Instructor => Some(
                sqlx::query_scalar::<_, i32>(
                    "INSERT INTO instructor (id_usuario, especialidad) VALUES ($1, $2) RETURNING id",
                )
                .bind(user.id)
                .bind(&dto.especialidad)
                .fetch_one(&mut *tx)
                .await
                .context("Failed to create instructor profile")
                .map_err(AppError::database)?,
            ),
        };

        tx.commit()
            .await
            .context("Failed to commit user creation")
            .map_err(AppError::database)?;

        info!(user_id = user.id, "User created");
        Ok(CreateUserResponse { user, id_perfil })
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        filters: UserFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let pagination = filters.pagination();

        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM usuario
               WHERE ($1::rol_usuario IS NULL OR rol = $1)
                 AND ($2::bool IS NULL OR activo = $2)"#,
        )
        .bind(filters.rol)
        .bind(filters.activo)
        .fetch_one(db)
        .await
        .context("Failed to count users")
        .map_err(AppError::database)?;

        let data = sqlx::query_as::<_, User>(&format!(
            r#"SELECT {USER_COLUMNS} FROM usuario
               WHERE ($1::rol_usuario IS NULL OR rol = $1)
                 AND ($2::bool IS NULL OR activo = $2)
               ORDER BY apellido, nombre, id
               LIMIT $3 OFFSET $4"#
        ))
        .bind(filters.rol)
        .bind(filters.activo)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch users")
        .map_err(AppError::database)?;

        Ok(PaginatedUsersResponse {
            data,
            meta: PaginationMeta::new(total, &pagination),
        })
    }

    /// Activates or deactivates a user. A deactivated user fails the session
    /// gate on the next request even with an unexpired token.
    #[instrument(skip(db))]
    pub async fn update_status(
        db: &PgPool,
        caller_id: i32,
        user_id: i32,
        activo: bool,
    ) -> Result<User, AppError> {
        if caller_id == user_id && !activo {
            return Err(AppError::bad_request(anyhow!(CANNOT_DEACTIVATE_SELF)));
        }

        let user = sqlx::query_as::<_, User>(&format!(
            r#"UPDATE usuario SET activo = $2, updated_at = NOW()
               WHERE id = $1
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(user_id)
        .bind(activo)
        .fetch_optional(db)
        .await
        .context("Failed to update user status")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))?;

        info!(user_id, activo, "User status updated");
        Ok(user)
    }
}
