//! User domain models and DTOs.
//!
//! A user's role is chosen by the admin who creates the account and never
//! changes afterwards. Students and instructors additionally get a profile
//! row (`estudiante` / `instructor`) created in the same transaction.

use academia_core::PaginationParams;
use academia_core::serde::deserialize_optional_i64;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Closed set of roles, stored as the `rol_usuario` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "rol_usuario", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Instructor,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Instructor => "instructor",
            UserRole::Student => "student",
        }
    }

    /// Whether a user holding `self` passes a gate that requires `required`.
    ///
    /// Roles are not hierarchical: an admin gate admits admins only.
    pub fn satisfies(&self, required: UserRole) -> bool {
        *self == required
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "instructor" => Ok(UserRole::Instructor),
            "student" => Ok(UserRole::Student),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

/// A user row, without the password hash.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub rol: UserRole,
    pub activo: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// The minimal identity the session gate hands to handlers.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
    pub rol: UserRole,
}

/// Row loaded by the gate: identity plus the active flag it must check.
#[derive(FromRow, Debug, Clone)]
pub struct GateUserRow {
    pub id: i32,
    pub email: String,
    pub rol: UserRole,
    pub activo: bool,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "El email no es válido"))]
    pub email: String,
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "El nombre es obligatorio"))]
    pub nombre: String,
    #[validate(length(min = 1, max = 100, message = "El apellido es obligatorio"))]
    pub apellido: String,
    pub rol: UserRole,
    /// Instructor specialty, ignored for other roles.
    #[validate(length(max = 200))]
    pub especialidad: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserStatusDto {
    pub activo: bool,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
pub struct UserFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    pub rol: Option<UserRole>,
    pub activo: Option<bool>,
}

impl UserFilterParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.limit)
    }
}

/// A newly created user and the id of its role profile.
///
/// `id_perfil` is the `estudiante.id` or `instructor.id` that enrollments
/// and sections refer to; admins have no profile.
#[derive(Serialize, Debug, ToSchema)]
pub struct CreateUserResponse {
    #[serde(flatten)]
    pub user: User,
    pub id_perfil: Option<i32>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub meta: academia_core::PaginationMeta,
}
