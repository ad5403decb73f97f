//! Deserializable instance configuration

use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings applied through [`InstanceBuilder::config`](super::InstanceBuilder::config).
///
/// `min_severity` uses the canonical, case-sensitive severity text.
///
/// # Example
///
/// ```
/// use labelled_logger::core::{InstanceConfig, Severity};
///
/// let config: InstanceConfig =
///     serde_json::from_str(r#"{"min_severity": "DEBUG", "labels": {"service": "api"}}"#)
///         .unwrap();
///
/// assert_eq!(config.min_severity, Severity::Debug);
/// assert_eq!(config.labels["service"], "api");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstanceConfig {
    pub min_severity: Severity,
    pub labels: BTreeMap<String, String>,
}

impl InstanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}
