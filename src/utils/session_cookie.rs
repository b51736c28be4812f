//! The session cookie.
//!
//! Both builders produce the same attributes (`HttpOnly`, `SameSite=Strict`,
//! `Path=/`, `Secure` in production) so that the clearing cookie replaces
//! the one set at login.

use tower_cookies::Cookie;
use tower_cookies::cookie::SameSite;
use tower_cookies::cookie::time::{Duration, OffsetDateTime};

use crate::config::session::SessionConfig;

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(token: String, config: &SessionConfig, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(config.secure)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Empty, already-expired cookie that makes the browser drop the session.
pub fn expired_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), String::new()))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(config.secure)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
