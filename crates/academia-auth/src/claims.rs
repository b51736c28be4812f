//! Claims carried by the session token.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for the session cookie.
///
/// The token proves who the bearer was at login time. It is not trusted for
/// authorization on its own: the gate reloads the user on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// Role at login time (`admin`, `instructor` or `student`)
    pub rol: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl SessionClaims {
    /// Parses the subject as a numeric user id.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}
