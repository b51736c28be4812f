use anyhow::Context;
use sqlx::PgPool;
use tracing::{debug, instrument};

use academia_auth::create_session_token;
use academia_config::JwtConfig;
use academia_core::{AppError, verify_password};

use super::model::{INVALID_CREDENTIALS, LoginRequest, LoginUser, UserCredentials};

pub struct AuthService;

impl AuthService {
    /// Checks credentials and issues a session token.
    ///
    /// Unknown email, wrong password and inactive account all produce the
    /// same 401.
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(String, LoginUser), AppError> {
        let invalid = || AppError::unauthorized(INVALID_CREDENTIALS.to_string());

        let user = sqlx::query_as::<_, UserCredentials>(
            r#"SELECT id, email, password_hash, nombre, apellido, rol, activo
               FROM usuario
               WHERE email = $1"#,
        )
        .bind(dto.email.trim().to_lowercase())
        .fetch_optional(db)
        .await
        .context("Failed to load user for login")
        .map_err(AppError::database)?
        .ok_or_else(invalid)?;

        if !verify_password(&dto.password, &user.password_hash)? {
            debug!(user_id = user.id, "Login rejected: wrong password");
            return Err(invalid());
        }

        if !user.activo {
            debug!(user_id = user.id, "Login rejected: inactive user");
            return Err(invalid());
        }

        let token = create_session_token(user.id, &user.email, user.rol.as_str(), jwt_config)?;

        Ok((token, LoginUser::from(user)))
    }
}
