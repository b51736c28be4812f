//! Session verification and the request authorization gate.
//!
//! # Flow
//!
//! 1. The client sends the session cookie set at login
//! 2. [`auth::verify_session`] checks the token and reloads the user
//! 3. On failure the request ends with 401 before any handler runs
//! 4. On success the handler receives the caller through [`auth::AuthUser`]
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware};
//! use crate::middleware::auth::{AuthUser, require_admin};
//!
//! // Admin-only routes
//! let admin = init_grades_router()
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
//!
//! // Any active user
//! async fn list_own(AuthUser(user): AuthUser) -> impl IntoResponse {
//!     // ...
//! }
//! ```

pub mod auth;
