// Static age table — deterministic in-memory provider.
//
// Serves fixed ages for known domains and the default for everything
// else. This is the provider used in tests and in runs where no registry
// lookup is configured.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use super::traits::{DomainAgeProvider, DEFAULT_AGE_DAYS};

/// In-memory domain-age provider.
#[derive(Debug, Clone, Default)]
pub struct StaticAgeTable {
    ages: HashMap<String, u32>,
}

impl StaticAgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixed age for a domain. Domains are stored lower-cased.
    pub fn with_age(mut self, domain: &str, age_days: u32) -> Self {
        self.ages.insert(domain.to_ascii_lowercase(), age_days);
        self
    }
}

#[async_trait]
impl DomainAgeProvider for StaticAgeTable {
    async fn age_days(&self, domain: &str) -> Result<u32> {
        Ok(self.ages.get(domain).copied().unwrap_or(DEFAULT_AGE_DAYS))
    }
}
