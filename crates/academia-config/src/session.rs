//! Session cookie configuration.
//!
//! - `SESSION_COOKIE_NAME`: cookie carrying the session token (default: `token`)
//! - `APP_ENV`: when `production`, the cookie is marked `Secure`

use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            secure: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "token".to_string()),
            secure: is_production(env::var("APP_ENV").ok().as_deref()),
        }
    }
}

fn is_production(app_env: Option<&str>) -> bool {
    app_env.is_some_and(|v| v.eq_ignore_ascii_case("production"))
}
