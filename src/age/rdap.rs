// RDAP-backed age lookups.
//
// RDAP (RFC 9083) is the registry successor to WHOIS and serves
// structured JSON over plain HTTP. The bootstrap service at rdap.org
// redirects to the authoritative registry for any TLD. Every lookup
// carries a hard timeout so a slow registry can never stall the scoring
// path; failures surface as errors the scorer downgrades to "age unknown".

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;

use super::traits::DomainAgeProvider;

/// Default bootstrap endpoint; redirects to the authoritative registry.
pub const DEFAULT_RDAP_URL: &str = "https://rdap.org";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Domain-age provider backed by an RDAP registry endpoint.
pub struct RdapAgeProvider {
    client: Client,
    base_url: String,
}

impl RdapAgeProvider {
    /// Create a provider against the given endpoint with a per-request
    /// timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build RDAP HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DomainAgeProvider for RdapAgeProvider {
    async fn age_days(&self, domain: &str) -> Result<u32> {
        let url = format!("{}/domain/{}", self.base_url, domain);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/rdap+json")
            .send()
            .await
            .context("Failed to call RDAP endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("RDAP endpoint returned {} for {}", response.status(), domain);
        }

        let body: RdapResponse = response
            .json()
            .await
            .context("Failed to parse RDAP response")?;

        let registered = registration_date(&body)
            .with_context(|| format!("No registration event for {domain}"))?;

        let age_days = (Utc::now() - registered).num_days().max(0) as u32;
        debug!(domain = %domain, age_days, "RDAP age lookup");
        Ok(age_days)
    }
}

/// Pull the registration event date out of an RDAP response.
fn registration_date(response: &RdapResponse) -> Option<DateTime<Utc>> {
    response
        .events
        .iter()
        .find(|e| e.event_action == "registration")
        .and_then(|e| DateTime::parse_from_rfc3339(&e.event_date).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// --- RDAP response types (the subset we read) ---

#[derive(Debug, serde::Deserialize)]
struct RdapResponse {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapEvent {
    event_action: String,
    event_date: String,
}
