// Verdict types — the classifier's output contract.

use serde::{Deserialize, Serialize};

use super::policy::RiskPolicy;

/// Score assigned when no domain can be extracted from the input.
pub const INVALID_URL_SCORE: u32 = 100;

/// Final classification for a candidate URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Allow,
    Warn,
    Block,
}

impl Verdict {
    /// Determine the verdict from an accumulated risk score.
    ///
    /// The thresholds are inclusive lower bounds, so the three bands are
    /// contiguous and non-overlapping over the non-negative integers.
    pub fn from_score(score: u32, policy: &RiskPolicy) -> Self {
        if score >= policy.block_threshold {
            Verdict::Block
        } else if score >= policy.warn_threshold {
            Verdict::Warn
        } else {
            Verdict::Allow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow => "ALLOW",
            Verdict::Warn => "WARN",
            Verdict::Block => "BLOCK",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of classifying a single URL.
///
/// `reasons` is an append-only log of the checks that fired, in check
/// order, never deduplicated and never empty. A fresh value is produced
/// per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResult {
    pub verdict: Verdict,
    pub score: u32,
    pub reasons: Vec<String>,
}
