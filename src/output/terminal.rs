// Colored terminal output for scoring results.
//
// All terminal-specific formatting lives here; main.rs delegates.

use colored::Colorize;

use crate::scoring::verdict::{RiskResult, Verdict};

/// Display a single scored URL with its reason breakdown.
pub fn display_result(url: &str, result: &RiskResult) {
    println!("\n{}", format!("=== Verdict for {url} ===").bold());
    println!("  Verdict: {}", colorize_verdict(result.verdict));
    println!("  Risk score: {}", result.score);
    println!("  Reasons:");
    for reason in &result.reasons {
        println!("    - {reason}");
    }
    println!();
}

/// Display a scored batch as a ranked table plus summary counts.
pub fn display_batch(results: &[(String, RiskResult)]) {
    if results.is_empty() {
        println!("No URLs scored.");
        return;
    }

    // Highest risk first; ties keep input order
    let mut ranked: Vec<&(String, RiskResult)> = results.iter().collect();
    ranked.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    println!(
        "\n{}",
        format!("=== URL Report ({} URLs) ===", results.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<52} {:>6}  {:<7}  {}",
        "Rank".dimmed(),
        "URL".dimmed(),
        "Score".dimmed(),
        "Verdict".dimmed(),
        "Reasons".dimmed(),
    );
    println!("  {}", "-".repeat(100).dimmed());

    for (i, (url, result)) in ranked.iter().enumerate() {
        println!(
            "  {:>4}. {:<52} {:>6}  {:<7}  {}",
            i + 1,
            super::truncate_chars(url, 50),
            result.score,
            colorize_verdict(result.verdict),
            result.reasons.join("; ").dimmed(),
        );
    }

    println!();

    // Summary
    let blocked = ranked
        .iter()
        .filter(|(_, r)| r.verdict == Verdict::Block)
        .count();
    let warned = ranked
        .iter()
        .filter(|(_, r)| r.verdict == Verdict::Warn)
        .count();
    let allowed = ranked.len() - blocked - warned;

    if blocked > 0 {
        println!("  {} {} blocked", "!!".red().bold(), blocked);
    }
    if warned > 0 {
        println!("  {} {} warned", "~".yellow(), warned);
    }
    println!("  {} {} allowed", "ok".green(), allowed);
}

/// Colorize a verdict for terminal display.
fn colorize_verdict(verdict: Verdict) -> colored::ColoredString {
    match verdict {
        Verdict::Block => verdict.as_str().red().bold(),
        Verdict::Warn => verdict.as_str().yellow(),
        Verdict::Allow => verdict.as_str().green(),
    }
}
