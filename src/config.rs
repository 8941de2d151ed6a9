use std::env;
use std::time::Duration;

use anyhow::Result;

/// Which domain-age lookup backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum AgeBackend {
    /// In-memory table (default) — deterministic, no network
    Static,
    /// RDAP registry lookups — network-bound, best effort
    Rdap,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Which age provider to use (default: Static)
    pub age_backend: AgeBackend,
    /// RDAP bootstrap endpoint
    pub rdap_url: String,
    /// Hard timeout for a single RDAP lookup
    pub rdap_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let age_backend = match env::var("PALISADE_AGE_PROVIDER").as_deref() {
            Ok("rdap") => AgeBackend::Rdap,
            // "static" or unset both default to the table
            _ => AgeBackend::Static,
        };

        let rdap_timeout = env::var("PALISADE_RDAP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(crate::age::rdap::DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            age_backend,
            rdap_url: env::var("PALISADE_RDAP_URL")
                .unwrap_or_else(|_| crate::age::rdap::DEFAULT_RDAP_URL.to_string()),
            rdap_timeout,
        })
    }
}
