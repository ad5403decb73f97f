//! Output format configuration for entries
//!
//! Provides different renderings of a finalized entry:
//! - Text: Human-readable line (default)
//! - Json: Machine-readable JSON object
//! - Logfmt: Key-value format compatible with log aggregation tools
//!
//! Every format yields a single line without the trailing newline.

use super::entry::Entry;
use super::labels::Labels;
use super::severity::DEFAULT_COLOR;
use super::timestamp::TimestampFormat;
use colored::Colorize;

/// Output format for entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `ERROR 2025-01-08 10:30:45.123 +0000 payment [order=42 service=checkout]: card declined`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"...","severity":"ERROR","context":"payment","labels":{"order":"42"},"message":"card declined"}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `timestamp="..." severity=ERROR context=payment order=42 message="card declined"`
    Logfmt,
}

impl OutputFormat {
    /// Render `entry` with `labels` in place of the entry's own labels.
    ///
    /// Handlers pass the entry's labels merged with their ambient labels.
    pub fn format(
        &self,
        entry: &Entry<'_>,
        labels: &Labels,
        timestamp_format: &TimestampFormat,
    ) -> String {
        match self {
            OutputFormat::Text => {
                let severity = format!("{:5}", entry.severity_text());
                format_text(entry, labels, timestamp_format, &severity)
            }
            OutputFormat::Json => format_json(entry, labels, timestamp_format),
            OutputFormat::Logfmt => format_logfmt(entry, labels, timestamp_format),
        }
    }

    /// Like [`OutputFormat::format`], coloring the severity of text output.
    pub fn format_colored(
        &self,
        entry: &Entry<'_>,
        labels: &Labels,
        timestamp_format: &TimestampFormat,
    ) -> String {
        match self {
            OutputFormat::Text => {
                let color = entry.severity().map_or(DEFAULT_COLOR, |s| s.color());
                let severity = format!("{:5}", entry.severity_text())
                    .color(color)
                    .to_string();
                format_text(entry, labels, timestamp_format, &severity)
            }
            _ => self.format(entry, labels, timestamp_format),
        }
    }
}

/// Escape line breaks and tabs so an entry always renders on one line
fn sanitize(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn format_text(
    entry: &Entry<'_>,
    labels: &Labels,
    timestamp_format: &TimestampFormat,
    severity: &str,
) -> String {
    format!(
        "{} {} {} [{}]: {}",
        severity,
        timestamp_format.format(entry.timestamp()),
        sanitize(entry.context()),
        sanitize(&labels.format_fields()),
        sanitize(&entry.message().to_string())
    )
}

fn format_json(entry: &Entry<'_>, labels: &Labels, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    let timestamp = if timestamp_format.is_numeric() {
        serde_json::Value::Number(entry.timestamp().timestamp_millis().into())
    } else {
        serde_json::Value::String(timestamp_format.format(entry.timestamp()))
    };
    json_obj.insert("timestamp".to_string(), timestamp);

    json_obj.insert(
        "severity".to_string(),
        serde_json::Value::String(entry.severity_text().to_string()),
    );
    json_obj.insert(
        "context".to_string(),
        serde_json::Value::String(entry.context().to_string()),
    );

    let label_obj = labels
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect::<serde_json::Map<_, _>>();
    json_obj.insert("labels".to_string(), serde_json::Value::Object(label_obj));

    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(entry.message().to_string()),
    );

    serde_json::Value::Object(json_obj).to_string()
}

fn format_logfmt(
    entry: &Entry<'_>,
    labels: &Labels,
    timestamp_format: &TimestampFormat,
) -> String {
    let mut parts = Vec::with_capacity(labels.len() + 4);

    parts.push(format!(
        "timestamp={}",
        escape_logfmt_value(&timestamp_format.format(entry.timestamp()))
    ));
    parts.push(format!("severity={}", entry.severity_text()));
    parts.push(format!("context={}", escape_logfmt_value(entry.context())));

    for (key, value) in labels.iter() {
        parts.push(format!(
            "{}={}",
            escape_logfmt_key(key),
            escape_logfmt_value(value)
        ));
    }

    // Always quoted
    parts.push(format!(
        "message={}",
        quote_logfmt_value(&entry.message().to_string())
    ));

    parts.join(" ")
}

fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect()
}

fn escape_logfmt_value(value: &str) -> String {
    if value.is_empty() || value.contains([' ', '"', '=', '\n', '\r', '\t']) {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!(
        "\"{}\"",
        sanitize(&value.replace('\\', "\\\\").replace('"', "\\\""))
    )
}
