// Alert payload contracts — the data shapes the presentation layer renders.
//
// The alert/overlay windows live in a separate process and consume these
// shapes over an event channel; the classifier only has to produce them.
// Serialized field names are part of the wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::verdict::{RiskResult, Verdict};

/// Event name the alert window listens on.
pub const ALERT_EVENT: &str = "threat-alert";

/// Event name the alert window emits user decisions on.
pub const USER_ACTION_EVENT: &str = "threat-user-action";

/// Action string for "start the mitigating action now".
pub const ACTION_START: &str = "START_ACTION";

/// Alert severity, derived from the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Medium,
    High,
}

impl Severity {
    pub fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Allow => Severity::Info,
            Verdict::Warn => Severity::Medium,
            Verdict::Block => Severity::High,
        }
    }
}

/// Payload rendered by the transient alert window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatAlert {
    pub threat_type: String,
    pub severity: Severity,
    pub target: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Structured extras for richer renderers (score, raw reasons)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ThreatAlert {
    /// Build an alert from a scored URL.
    pub fn from_result(url: &str, result: &RiskResult) -> Self {
        Self {
            threat_type: "suspicious_url".to_string(),
            severity: Severity::from_verdict(result.verdict),
            target: url.to_string(),
            message: result.reasons.join("; "),
            explanation: None,
            timestamp: Utc::now(),
            details: serde_json::to_value(result).ok(),
        }
    }
}

/// A user decision emitted back from the alert window, carrying enough of
/// the original alert for whoever owns enforcement to act on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAction {
    pub action: String,
    pub threat_type: String,
    pub target: String,
    pub timestamp: DateTime<Utc>,
}
