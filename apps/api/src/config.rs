//! Application configuration loading from environment variables.
//!
//! Everything is read once at startup with `std::env::var` (after `dotenvy` has
//! loaded an optional `.env` file). The generation credential is the exception
//! to "fail at startup": it is optional here and checked on each analysis call.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,image_analyzer=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `API_KEY`: Generation API credential (`GEMINI_API_KEY` is also accepted)
//! - `GENERATION_MODEL`: Model identifier (default: "gemini-2.5-flash")
//! - `GENERATION_BASE_URL`: Endpoint root (default: Gemini v1beta)
//! - `GENERATION_TIMEOUT_SECONDS`: Client-side timeout for generation calls (default: none)
//! - `MAX_UPLOAD_BYTES`: Largest accepted request body (default: 10 MiB)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins (default: any origin)

use crate::infrastructure::generation::gemini_client::DEFAULT_BASE_URL;
use std::{fmt, time::Duration};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Static credential for the generation endpoint. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Credential for the generation endpoint; `None` makes every analysis fail
    pub api_key: Option<ApiKey>,

    /// Model identifier placed in the request path
    pub generation_model: String,

    /// Root URL of the generation API (e.g., `https://generativelanguage.googleapis.com/v1beta`)
    pub generation_base_url: String,

    /// Optional timeout for a single generation call, in seconds
    pub generation_timeout_seconds: Option<u64>,

    /// Largest request body accepted by the analyze endpoints
    pub max_upload_bytes: usize,

    /// Origins allowed by CORS; empty allows any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            api_key: env_optional("API_KEY")
                .or_else(|| env_optional("GEMINI_API_KEY"))
                .map(ApiKey::new),
            generation_model: env_or("GENERATION_MODEL", DEFAULT_MODEL.to_string())?,
            generation_base_url: env_or("GENERATION_BASE_URL", DEFAULT_BASE_URL.to_string())?,
            generation_timeout_seconds: match env_optional("GENERATION_TIMEOUT_SECONDS") {
                Some(raw) => Some(raw.parse().map_err(|e| {
                    anyhow::anyhow!("Failed to parse GENERATION_TIMEOUT_SECONDS: {}", e)
                })?),
                None => None,
            },
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            allowed_origins: parse_list(&env_optional("ALLOWED_ORIGINS").unwrap_or_default()),
        })
    }

    pub fn generation_timeout(&self) -> Option<Duration> {
        self.generation_timeout_seconds.map(Duration::from_secs)
    }
}

/// Read a variable, treating empty or whitespace-only values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env_optional(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
