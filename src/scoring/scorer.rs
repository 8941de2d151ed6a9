// The risk scorer — trust sets, heuristic accumulation, verdicts.
//
// Scoring never fails: malformed input produces a maximal-risk result,
// and a failing age lookup falls back to the default age. The personal
// trusted list is the only mutable state; it is guarded by an RwLock that
// is never held across an await.

use std::collections::HashSet;
use std::sync::RwLock;

use tracing::debug;

use crate::age::traits::{DomainAgeProvider, DEFAULT_AGE_DAYS};
use crate::domain::extract_domain;

use super::heuristics;
use super::policy::RiskPolicy;
use super::verdict::{RiskResult, Verdict, INVALID_URL_SCORE};

pub const REASON_TRUSTED: &str = "In personal trusted list";
pub const REASON_WHITELISTED: &str = "In global whitelist";
pub const REASON_INVALID_URL: &str = "Invalid URL format";
pub const REASON_DANGEROUS_EXTENSION: &str = "Dangerous file extension";
pub const REASON_SUSPICIOUS_TLD: &str = "Suspicious top-level domain";
pub const REASON_USERINFO: &str = "Contains @ symbol (phishing attempt)";
pub const REASON_IP_HOST: &str = "IP address instead of domain";
pub const REASON_BRAND: &str = "Brand impersonation detected";
pub const REASON_YOUNG_DOMAIN: &str = "New domain (less than 14 days)";
pub const REASON_CLEAN: &str = "No suspicious patterns detected";

/// URL reputation classifier.
///
/// Holds the personal trusted list (mutable, grows monotonically, lives
/// for the process only) and the global whitelist (seeded at construction,
/// immutable). Verdicts are a deterministic function of the URL and the
/// two sets, given a fixed age provider.
pub struct RiskScorer {
    policy: RiskPolicy,
    whitelist: HashSet<String>,
    trusted: RwLock<HashSet<String>>,
    age_provider: Box<dyn DomainAgeProvider>,
}

impl RiskScorer {
    /// Create a scorer with the default policy.
    pub fn new(age_provider: Box<dyn DomainAgeProvider>) -> Self {
        Self::with_policy(RiskPolicy::default(), age_provider)
    }

    /// Create a scorer with a custom policy.
    pub fn with_policy(policy: RiskPolicy, age_provider: Box<dyn DomainAgeProvider>) -> Self {
        let whitelist = policy
            .global_whitelist
            .iter()
            .map(|d| d.to_ascii_lowercase())
            .collect();
        Self {
            policy,
            whitelist,
            trusted: RwLock::new(HashSet::new()),
            age_provider,
        }
    }

    /// Add a URL's domain to the personal trusted list.
    ///
    /// Malformed input is a silent no-op — this is a low-stakes,
    /// user-initiated action. Re-adding an existing domain has no
    /// additional effect.
    pub fn add_trusted(&self, url: &str) {
        if let Some(domain) = extract_domain(url) {
            let mut trusted = self.trusted.write().unwrap_or_else(|e| e.into_inner());
            if trusted.insert(domain.clone()) {
                debug!(domain = %domain, "Added domain to personal trusted list");
            }
        }
    }

    /// Feedback-loop alias for `add_trusted`: a URL the user has reviewed
    /// after a warn/block is permanently allowed for its domain.
    pub fn unblock(&self, url: &str) {
        self.add_trusted(url);
    }

    /// Whether a domain is currently in the personal trusted list.
    pub fn is_trusted(&self, domain: &str) -> bool {
        self.trusted
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(domain)
    }

    /// Classify a URL.
    ///
    /// Every input, valid or not, yields a well-formed result: callers
    /// never need error handling around this method.
    pub async fn score(&self, url: &str) -> RiskResult {
        let Some(domain) = extract_domain(url) else {
            return RiskResult {
                verdict: Verdict::Block,
                score: INVALID_URL_SCORE,
                reasons: vec![REASON_INVALID_URL.to_string()],
            };
        };

        // Trust short-circuit. The personal list is checked before the
        // global whitelist; the order is part of the contract.
        {
            let trusted = self.trusted.read().unwrap_or_else(|e| e.into_inner());
            if trusted.contains(&domain) {
                return allow_with(REASON_TRUSTED);
            }
        }
        if self.whitelist.contains(&domain) {
            return allow_with(REASON_WHITELISTED);
        }

        let url_lower = url.to_lowercase();
        let mut score = 0;
        let mut reasons = Vec::new();

        if heuristics::has_dangerous_extension(&url_lower, &self.policy.dangerous_extensions) {
            score += self.policy.extension_weight;
            reasons.push(REASON_DANGEROUS_EXTENSION.to_string());
        }

        if heuristics::has_suspicious_tld(&domain, &self.policy.suspicious_tlds) {
            score += self.policy.tld_weight;
            reasons.push(REASON_SUSPICIOUS_TLD.to_string());
        }

        if heuristics::has_userinfo_marker(url) {
            score += self.policy.userinfo_weight;
            reasons.push(REASON_USERINFO.to_string());
        }

        if heuristics::is_ipv4_literal(&domain) {
            score += self.policy.ip_weight;
            reasons.push(REASON_IP_HOST.to_string());
        }

        if heuristics::mentions_brand(&url_lower, &self.policy.impersonated_brands) {
            score += self.policy.brand_weight;
            reasons.push(REASON_BRAND.to_string());
        }

        // The age penalty never applies to developer TLDs
        if !heuristics::is_developer_site(&domain, &self.policy.developer_tlds) {
            let age_days = match self.age_provider.age_days(&domain).await {
                Ok(days) => days,
                Err(e) => {
                    debug!(domain = %domain, error = %e, "Age lookup failed, treating age as unknown");
                    DEFAULT_AGE_DAYS
                }
            };
            if age_days < self.policy.young_domain_cutoff_days {
                score += self.policy.young_domain_weight;
                reasons.push(REASON_YOUNG_DOMAIN.to_string());
            }
        }

        let verdict = Verdict::from_score(score, &self.policy);
        if reasons.is_empty() {
            reasons.push(REASON_CLEAN.to_string());
        }

        RiskResult {
            verdict,
            score,
            reasons,
        }
    }
}

fn allow_with(reason: &str) -> RiskResult {
    RiskResult {
        verdict: Verdict::Allow,
        score: 0,
        reasons: vec![reason.to_string()],
    }
}
