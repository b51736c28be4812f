//! Allowed CORS origins.
//!
//! - `ALLOWED_ORIGINS`: comma-separated list (default: the local API and the
//!   Vite dev server)
//!
//! Credentials are always allowed so the session cookie can travel, which
//! rules out a `*` origin; a `*` entry is dropped.

use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());
        Self {
            allowed_origins: parse_origins(&raw),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty() && *s != "*")
        .map(str::to_string)
        .collect()
}
