// Domain extraction — URL string to lower-cased hostname.
//
// Two strategies, tried in order: standards-based parsing via the `url`
// crate, then a fallback pattern that pulls the authority segment out of
// strings the parser rejects. A URL that yields no domain by either
// strategy is the caller's terminal error case.

use std::sync::OnceLock;

use regex_lite::Regex;
use url::Url;

/// Extract the lower-cased hostname from a URL string.
///
/// The result never includes userinfo or a port. Returns None when neither
/// the parser nor the fallback pattern finds a host.
pub fn extract_domain(raw: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(raw) {
        if let Some(host) = parsed.host_str() {
            if !host.is_empty() {
                return Some(host.to_ascii_lowercase());
            }
        }
    }

    // The parser rejects some inputs a browser bar would still load, e.g.
    // dotted-quad hosts with out-of-range octets. Grab the authority
    // segment directly for those.
    let caps = authority_pattern().captures(raw)?;
    caps.get(1).map(|m| m.as_str().to_ascii_lowercase())
}

fn authority_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://([^/]+)").expect("authority pattern is valid"))
}
