//! Session token creation and verification.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Verification
//! checks signature and expiry only; it never says *why* a token was
//! rejected, so callers cannot tell a tampered token from an expired one.
//!
//! # Example
//!
//! ```ignore
//! use academia_auth::{create_session_token, verify_session_token};
//! use academia_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_session_token(42, "admin@academia.test", "admin", &config)?;
//! let claims = verify_session_token(&token, &config)?;
//! assert_eq!(claims.sub, "42");
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use academia_config::JwtConfig;
use academia_core::AppError;
use academia_core::errors::UNAUTHORIZED_MESSAGE;

use crate::claims::SessionClaims;

/// Creates a signed session token for the given user.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_session_token(
    user_id: i32,
    email: &str,
    rol: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.session_expiry.max(0) as usize;

    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        rol: rol.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create session token: {}", e)))
}

/// Verifies a session token and returns its claims.
///
/// # Errors
///
/// Returns a generic unauthorized error for a bad signature, an expired
/// token or a malformed token alike.
pub fn verify_session_token(token: &str, jwt_config: &JwtConfig) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(UNAUTHORIZED_MESSAGE.to_string()))
}
