// Heuristic checks — independent, additive URL risk signals.
//
// Each function inspects the full URL string and/or the extracted domain
// and reports whether one signal fired. Matching is case-insensitive; the
// scorer lower-cases the URL once and passes it down.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Whether the URL ends with one of the dangerous download extensions.
pub fn has_dangerous_extension(url_lower: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| url_lower.ends_with(ext.as_str()))
}

/// Whether the domain carries one of the suspicious TLDs.
pub fn has_suspicious_tld(domain: &str, tlds: &[String]) -> bool {
    tlds.iter().any(|tld| domain.ends_with(tld.as_str()))
}

/// Whether the raw URL embeds a literal `@` — the classic userinfo
/// obfuscation, as in "https://trusted.com@evil.example/".
pub fn has_userinfo_marker(url: &str) -> bool {
    url.contains('@')
}

/// Whether the domain is a dotted-quad IPv4 literal.
///
/// Octet ranges are not validated: "999.999.999.999" counts.
pub fn is_ipv4_literal(domain: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").expect("ipv4 pattern is valid"));
    pattern.is_match(domain)
}

/// Whether the URL mentions one of the impersonated brand names anywhere,
/// including subdomains, paths, and query strings.
pub fn mentions_brand(url_lower: &str, brands: &[String]) -> bool {
    brands.iter().any(|brand| url_lower.contains(brand.as_str()))
}

/// Whether the domain belongs to a developer TLD exempt from age penalties.
pub fn is_developer_site(domain: &str, developer_tlds: &[String]) -> bool {
    developer_tlds.iter().any(|tld| domain.ends_with(tld.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extension_matches_suffix_only() {
        let exts = list(&[".zip", ".exe"]);
        assert!(has_dangerous_extension("https://example.com/file.zip", &exts));
        assert!(!has_dangerous_extension("https://example.com/file.zip?x=1", &exts));
        assert!(!has_dangerous_extension("https://example.com/file.txt", &exts));
    }

    #[test]
    fn ipv4_literal_is_permissive() {
        assert!(is_ipv4_literal("192.168.1.1"));
        assert!(is_ipv4_literal("999.999.999.999"));
        assert!(!is_ipv4_literal("1.2.3"));
        assert!(!is_ipv4_literal("1234.1.1.1"));
        assert!(!is_ipv4_literal("a.b.c.d"));
        assert!(!is_ipv4_literal("example.com"));
    }

    #[test]
    fn brand_match_is_raw_substring() {
        let brands = list(&["bank"]);
        assert!(mentions_brand("https://mybank-account.com", &brands));
        // Unrelated word containing the brand still matches
        assert!(mentions_brand("https://burbank-movers.com", &brands));
        assert!(!mentions_brand("https://example.com", &brands));
    }

    #[test]
    fn developer_tlds_match_suffix() {
        let tlds = list(&[".dev", ".io"]);
        assert!(is_developer_site("legitimate.dev", &tlds));
        assert!(is_developer_site("coolapp.io", &tlds));
        assert!(!is_developer_site("suspicious.xyz", &tlds));
    }
}
