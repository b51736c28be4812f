//! User data models and DTOs, re-exported from `academia-models`.

pub use academia_models::users::*;

pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const EMAIL_TAKEN: &str = "El email ya está registrado";
pub const CANNOT_DEACTIVATE_SELF: &str = "No puedes desactivar tu propia cuenta";
