// Unit tests for scoring primitives.
//
// Tests isolated pure functions: Verdict::from_score boundary conditions,
// policy defaults, individual heuristic checks, domain extraction edge
// cases, and truncate_chars UTF-8 safety.

use palisade::domain::extract_domain;
use palisade::output::truncate_chars;
use palisade::scoring::heuristics;
use palisade::scoring::policy::RiskPolicy;
use palisade::scoring::verdict::{Verdict, INVALID_URL_SCORE};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// Verdict::from_score — boundary conditions
// ============================================================

#[test]
fn verdict_zero_is_allow() {
    assert_eq!(Verdict::from_score(0, &RiskPolicy::default()), Verdict::Allow);
}

#[test]
fn verdict_just_below_warn() {
    assert_eq!(Verdict::from_score(19, &RiskPolicy::default()), Verdict::Allow);
}

#[test]
fn verdict_exact_warn_boundary() {
    assert_eq!(Verdict::from_score(20, &RiskPolicy::default()), Verdict::Warn);
}

#[test]
fn verdict_just_below_block() {
    assert_eq!(Verdict::from_score(49, &RiskPolicy::default()), Verdict::Warn);
}

#[test]
fn verdict_exact_block_boundary() {
    assert_eq!(Verdict::from_score(50, &RiskPolicy::default()), Verdict::Block);
}

#[test]
fn verdict_very_large() {
    assert_eq!(Verdict::from_score(1000, &RiskPolicy::default()), Verdict::Block);
}

#[test]
fn verdict_invalid_url_score_is_block() {
    assert_eq!(
        Verdict::from_score(INVALID_URL_SCORE, &RiskPolicy::default()),
        Verdict::Block
    );
}

#[test]
fn verdict_custom_thresholds() {
    let policy = RiskPolicy {
        warn_threshold: 10,
        block_threshold: 30,
        ..RiskPolicy::default()
    };
    assert_eq!(Verdict::from_score(9, &policy), Verdict::Allow);
    assert_eq!(Verdict::from_score(10, &policy), Verdict::Warn);
    assert_eq!(Verdict::from_score(29, &policy), Verdict::Warn);
    assert_eq!(Verdict::from_score(30, &policy), Verdict::Block);
}

// ============================================================
// Verdict round-trip: as_str -> Display -> serde
// ============================================================

#[test]
fn verdict_as_str_all_variants() {
    assert_eq!(Verdict::Allow.as_str(), "ALLOW");
    assert_eq!(Verdict::Warn.as_str(), "WARN");
    assert_eq!(Verdict::Block.as_str(), "BLOCK");
}

#[test]
fn verdict_display_matches_as_str() {
    for verdict in [Verdict::Allow, Verdict::Warn, Verdict::Block] {
        assert_eq!(verdict.to_string(), verdict.as_str());
    }
}

#[test]
fn verdict_serde_round_trip() {
    for verdict in [Verdict::Allow, Verdict::Warn, Verdict::Block] {
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, format!("\"{}\"", verdict.as_str()));
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }
}

// ============================================================
// RiskPolicy — documented defaults
// ============================================================

#[test]
fn default_weights_match_documented_values() {
    let policy = RiskPolicy::default();
    assert_eq!(policy.extension_weight, 30);
    assert_eq!(policy.tld_weight, 15);
    assert_eq!(policy.userinfo_weight, 50);
    assert_eq!(policy.ip_weight, 20);
    assert_eq!(policy.brand_weight, 40);
    assert_eq!(policy.young_domain_weight, 25);
    assert_eq!(policy.warn_threshold, 20);
    assert_eq!(policy.block_threshold, 50);
    assert_eq!(policy.young_domain_cutoff_days, 14);
}

#[test]
fn default_lists_cover_known_patterns() {
    let policy = RiskPolicy::default();
    assert_eq!(policy.global_whitelist.len(), 12);
    assert!(policy.global_whitelist.contains(&"google.com".to_string()));
    assert!(policy.global_whitelist.contains(&"stackoverflow.com".to_string()));
    assert_eq!(policy.dangerous_extensions, list(&[".zip", ".mov", ".exe"]));
    assert_eq!(policy.suspicious_tlds, list(&[".xyz", ".top", ".tk"]));
    assert_eq!(policy.impersonated_brands, list(&["paypal", "google", "bank"]));
    assert_eq!(policy.developer_tlds, list(&[".dev", ".io"]));
}

// ============================================================
// Heuristics — dangerous extensions
// ============================================================

#[test]
fn extension_matches_every_default() {
    let exts = list(&[".zip", ".mov", ".exe"]);
    for url in [
        "https://example.com/file.zip",
        "https://example.com/video.mov",
        "https://example.com/program.exe",
    ] {
        assert!(
            heuristics::has_dangerous_extension(url, &exts),
            "{url} should match"
        );
    }
}

#[test]
fn extension_is_suffix_only() {
    let exts = list(&[".exe"]);
    assert!(!heuristics::has_dangerous_extension(
        "https://example.com/program.exe?download=1",
        &exts
    ));
    assert!(!heuristics::has_dangerous_extension(
        "https://example.com/exercise",
        &exts
    ));
}

// ============================================================
// Heuristics — suspicious TLDs and developer TLDs
// ============================================================

#[test]
fn suspicious_tld_matches_domain_suffix() {
    let tlds = list(&[".xyz", ".top", ".tk"]);
    assert!(heuristics::has_suspicious_tld("suspicious.xyz", &tlds));
    assert!(heuristics::has_suspicious_tld("newsite.top", &tlds));
    assert!(heuristics::has_suspicious_tld("malicious.tk", &tlds));
    assert!(!heuristics::has_suspicious_tld("example.com", &tlds));
}

#[test]
fn developer_tld_matches_domain_suffix() {
    let tlds = list(&[".dev", ".io"]);
    assert!(heuristics::is_developer_site("legitimate.dev", &tlds));
    assert!(heuristics::is_developer_site("coolapp.io", &tlds));
    assert!(!heuristics::is_developer_site("suspicious.xyz", &tlds));
}

// ============================================================
// Heuristics — userinfo marker
// ============================================================

#[test]
fn userinfo_marker_anywhere_in_url() {
    assert!(heuristics::has_userinfo_marker(
        "https://example.com@evil.example/phishing"
    ));
    assert!(heuristics::has_userinfo_marker(
        "https://example.com/reply?to=a@b"
    ));
    assert!(!heuristics::has_userinfo_marker("https://example.com/page"));
}

// ============================================================
// Heuristics — IPv4 literal (permissive on purpose)
// ============================================================

#[test]
fn ipv4_literal_matches_dotted_quads() {
    assert!(heuristics::is_ipv4_literal("192.168.1.1"));
    assert!(heuristics::is_ipv4_literal("8.8.8.8"));
}

#[test]
fn ipv4_literal_does_not_validate_octets() {
    assert!(heuristics::is_ipv4_literal("999.999.999.999"));
}

#[test]
fn ipv4_literal_rejects_other_shapes() {
    assert!(!heuristics::is_ipv4_literal("1.2.3"));
    assert!(!heuristics::is_ipv4_literal("1.2.3.4.5"));
    assert!(!heuristics::is_ipv4_literal("1234.1.1.1"));
    assert!(!heuristics::is_ipv4_literal("a.b.c.d"));
    assert!(!heuristics::is_ipv4_literal("example.com"));
}

// ============================================================
// Heuristics — brand impersonation
// ============================================================

#[test]
fn brand_matches_anywhere_in_url() {
    let brands = list(&["paypal", "google", "bank"]);
    assert!(heuristics::mentions_brand("https://paypal-secure.com/login", &brands));
    assert!(heuristics::mentions_brand("https://google-drive.com/files", &brands));
    assert!(heuristics::mentions_brand("https://mybank-account.com", &brands));
    assert!(heuristics::mentions_brand("https://cdn.example.com/paypal/logo.png", &brands));
}

#[test]
fn brand_match_is_naive_substring() {
    // "bank" inside an unrelated word still matches; verdict expectations
    // depend on this staying permissive
    let brands = list(&["bank"]);
    assert!(heuristics::mentions_brand("https://burbank-city.example", &brands));
}

// ============================================================
// Domain extraction
// ============================================================

#[test]
fn extraction_standard_url() {
    assert_eq!(
        extract_domain("https://example.com/a/b?c=d"),
        Some("example.com".to_string())
    );
}

#[test]
fn extraction_lowercases() {
    assert_eq!(
        extract_domain("https://PAYPAL-SECure.com"),
        Some("paypal-secure.com".to_string())
    );
}

#[test]
fn extraction_strips_port_and_userinfo() {
    assert_eq!(
        extract_domain("http://example.com:8080/x"),
        Some("example.com".to_string())
    );
    assert_eq!(
        extract_domain("https://paypal-secure.xyz@192.168.1.1/malware.exe"),
        Some("192.168.1.1".to_string())
    );
}

#[test]
fn extraction_fallback_for_rejected_hosts() {
    assert_eq!(
        extract_domain("http://999.999.999.999/admin"),
        Some("999.999.999.999".to_string())
    );
}

#[test]
fn extraction_fails_without_scheme_or_shape() {
    assert_eq!(extract_domain("not-a-valid-url"), None);
    assert_eq!(extract_domain("example.com/page"), None);
    assert_eq!(extract_domain(""), None);
}

// ============================================================
// truncate_chars — UTF-8 safe truncation
// ============================================================

#[test]
fn truncate_within_limit() {
    assert_eq!(truncate_chars("https://a.com", 50), "https://a.com");
}

#[test]
fn truncate_over_limit() {
    assert_eq!(truncate_chars("abcdef", 5), "abcde...");
}

#[test]
fn truncate_multibyte_safe() {
    // Internationalized domain labels must not split mid-character
    let url = "https://bücher.example/straße";
    let result = truncate_chars(url, 10);
    assert_eq!(result, "https://bü...");
}
