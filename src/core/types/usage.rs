//! Provider-agnostic usage snapshots

use serde::{Deserialize, Serialize};

/// A named quota dimension expressed as a percentage consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageWindow {
    pub label: String,
    /// Always within `[0, 100]`
    pub used_percent: f64,
}

impl UsageWindow {
    /// Create a window, clamping the percentage into `[0, 100]`
    pub fn new(label: impl Into<String>, used_percent: f64) -> Self {
        Self {
            label: label.into(),
            used_percent: used_percent.clamp(0.0, 100.0),
        }
    }
}

/// Usage snapshot for one provider account.
///
/// When `error` is set, `windows` is empty and `plan` is not meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    pub provider: String,
    pub display_name: String,
    pub windows: Vec<UsageWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UsageSnapshot {
    /// Snapshot carrying an error for display
    pub fn failed(
        provider: impl Into<String>,
        display_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            display_name: display_name.into(),
            windows: Vec::new(),
            plan: None,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
