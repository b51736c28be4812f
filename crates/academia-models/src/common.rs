use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "success": true, "message": "..." }` acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
