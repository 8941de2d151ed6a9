// Domain-age provider trait — the swap-ready abstraction.

use anyhow::Result;
use async_trait::async_trait;

/// Age assumed for domains the provider doesn't know or fails to look up.
/// Old enough that the young-domain penalty never applies.
pub const DEFAULT_AGE_DAYS: u32 = 30;

/// Trait for looking up a domain's age in days. Implementations may be
/// backed by network registries, so the method is async. Callers must
/// treat errors as "age unknown" rather than letting them reach verdicts.
#[async_trait]
pub trait DomainAgeProvider: Send + Sync {
    /// The domain's age in days.
    async fn age_days(&self, domain: &str) -> Result<u32>;
}
