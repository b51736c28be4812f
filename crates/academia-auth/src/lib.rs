//! # Academia Auth
//!
//! Session token claims and JWT utilities.
//!
//! - [`claims`]: [`SessionClaims`] carried inside the session cookie
//! - [`jwt`]: token creation and verification
//!
//! Tokens are never stored server-side. Validity is proven by signature and
//! expiry; there is no revocation list, so a copied token keeps working until
//! it expires even after the cookie was cleared.

pub mod claims;
pub mod jwt;

pub use claims::SessionClaims;
pub use jwt::{create_session_token, verify_session_token};
