pub use academia_models::notifications::*;

pub const RECIPIENT_NOT_FOUND: &str = "Usuario destinatario no encontrado";
pub const NOTIFICATION_READ: &str = "Notificación marcada como leída";
pub const NOTIFICATION_DELETED: &str = "Notificación eliminada";
