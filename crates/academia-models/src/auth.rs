//! Login and session DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserRole;

pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas";
pub const LOGGED_OUT: &str = "Sesión cerrada correctamente";

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    #[schema(example = "admin@academia.test")]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Row loaded on login, including the hash to check against.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub nombre: String,
    pub apellido: String,
    pub rol: UserRole,
    pub activo: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUser {
    pub id: i32,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub rol: UserRole,
}

impl From<UserCredentials> for LoginUser {
    fn from(row: UserCredentials) -> Self {
        Self {
            id: row.id,
            email: row.email,
            nombre: row.nombre,
            apellido: row.apellido,
            rol: row.rol,
        }
    }
}

/// Body of a successful login. The token itself travels in the cookie.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: LoginUser,
}
