//! Administrative commands run from `academia-cli`.

use anyhow::{Context, bail};
use sqlx::PgPool;

use academia_core::hash_password;
use academia_models::users::UserRole;

/// Inserts an active admin. Admins can also be created through the API, but
/// only by another admin, so the first one comes from here.
pub async fn create_admin(
    db: &PgPool,
    nombre: &str,
    apellido: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    if password.len() < 8 {
        bail!("Password must be at least 8 characters");
    }

    let password_hash =
        hash_password(password).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.error))?;

    let id = sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO usuario (email, password_hash, nombre, apellido, rol)
           VALUES ($1, $2, $3, $4, $5)
           ON CONFLICT (email) DO NOTHING
           RETURNING id"#,
    )
    .bind(email.trim().to_lowercase())
    .bind(password_hash)
    .bind(nombre.trim())
    .bind(apellido.trim())
    .bind(UserRole::Admin)
    .fetch_optional(db)
    .await
    .context("Failed to insert admin")?;

    match id {
        Some(id) => Ok(id),
        None => bail!("User with this email already exists"),
    }
}
