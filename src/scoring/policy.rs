// Scoring policy — every tunable the classifier consults.
//
// Weights, verdict thresholds, and the pattern lists are struct fields
// with documented defaults rather than scattered literals, so tests and
// deployments can tune them without touching scoring logic.

/// Seed membership for the global whitelist.
const GLOBAL_WHITELIST: &[&str] = &[
    "google.com",
    "github.com",
    "microsoft.com",
    "apple.com",
    "amazon.com",
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "youtube.com",
    "wikipedia.org",
    "stackoverflow.com",
    "reddit.com",
];

const DANGEROUS_EXTENSIONS: &[&str] = &[".zip", ".mov", ".exe"];
const SUSPICIOUS_TLDS: &[&str] = &[".xyz", ".top", ".tk"];
const IMPERSONATED_BRANDS: &[&str] = &["paypal", "google", "bank"];
const DEVELOPER_TLDS: &[&str] = &[".dev", ".io"];

/// Configurable weights, thresholds, and pattern lists for URL scoring.
///
/// Heuristics are additive and independent: every matching check
/// contributes its weight, and the sum is never capped.
#[derive(Debug, Clone)]
pub struct RiskPolicy {
    /// Added when the URL ends with a dangerous file extension (default 30)
    pub extension_weight: u32,
    /// Added when the domain ends with a suspicious TLD (default 15)
    pub tld_weight: u32,
    /// Added when the URL contains a literal `@` (default 50)
    pub userinfo_weight: u32,
    /// Added when the host is a dotted-quad IPv4 literal (default 20)
    pub ip_weight: u32,
    /// Added when the URL mentions an impersonated brand (default 40)
    pub brand_weight: u32,
    /// Added when the domain is younger than the cutoff (default 25)
    pub young_domain_weight: u32,
    /// Scores at or above this are WARN (default 20)
    pub warn_threshold: u32,
    /// Scores at or above this are BLOCK (default 50)
    pub block_threshold: u32,
    /// Domains younger than this many days take the age penalty (default 14)
    pub young_domain_cutoff_days: u32,
    /// Case-insensitive URL suffixes treated as dangerous downloads
    pub dangerous_extensions: Vec<String>,
    /// Domain suffixes with a history of abuse
    pub suspicious_tlds: Vec<String>,
    /// Brand names matched as raw substrings of the full URL. Matching is
    /// naive on purpose: "bank" also hits unrelated words, and existing
    /// verdict expectations depend on that.
    pub impersonated_brands: Vec<String>,
    /// Domain suffixes exempt from the age penalty
    pub developer_tlds: Vec<String>,
    /// Domains considered universally safe
    pub global_whitelist: Vec<String>,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            extension_weight: 30,
            tld_weight: 15,
            userinfo_weight: 50,
            ip_weight: 20,
            brand_weight: 40,
            young_domain_weight: 25,
            warn_threshold: 20,
            block_threshold: 50,
            young_domain_cutoff_days: 14,
            dangerous_extensions: owned(DANGEROUS_EXTENSIONS),
            suspicious_tlds: owned(SUSPICIOUS_TLDS),
            impersonated_brands: owned(IMPERSONATED_BRANDS),
            developer_tlds: owned(DEVELOPER_TLDS),
            global_whitelist: owned(GLOBAL_WHITELIST),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
