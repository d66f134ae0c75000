use serde::{Deserialize, Serialize};

/// Severity of a diagnostic finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    /// Data is broken or unusable.
    Critical,
    /// Data is suspicious and needs attention.
    Warning,
    /// Optimization tip.
    Info,
}

/// A single diagnostic finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub column: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub level: AlertLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}
