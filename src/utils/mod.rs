//! Shared utilities.
//!
//! - [`session_cookie`]: builders for the session cookie set on login and cleared on logout

pub mod session_cookie;
