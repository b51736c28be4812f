//! Configuration modules for the Academia API.
//!
//! Everything is loaded from environment variables (after `dotenvy` has read
//! `.env`). See each submodule for variable names and defaults.
//!
//! - [`cors`]: allowed origins
//! - [`dashboard`]: whether the dashboard listings require an admin session
//! - [`jwt`]: session token secret and lifetime
//! - [`rate_limit`]: login throttling
//! - [`session`]: session cookie name and `Secure` flag

pub use academia_config::{cors, dashboard, jwt, rate_limit, session};
