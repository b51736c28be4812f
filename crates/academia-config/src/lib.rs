//! # Academia Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: session token signing secret and lifetime
//! - [`session`]: session cookie name and `Secure` flag
//! - [`cors`]: allowed origins
//! - [`rate_limit`]: login throttling
//! - [`dashboard`]: access policy for the dashboard listings
//!
//! # Example
//!
//! ```ignore
//! use academia_config::{JwtConfig, SessionConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let session_config = SessionConfig::from_env();
//! ```

pub mod cors;
pub mod dashboard;
pub mod jwt;
pub mod rate_limit;
pub mod session;

pub use cors::CorsConfig;
pub use dashboard::DashboardConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use session::SessionConfig;
