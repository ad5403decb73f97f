//! Severity definitions
//!
//! Severities are ordinals where a lower value is more severe: `Fatal` is 0
//! and `Trace` is 5. The derived ordering follows the ordinal, so
//! `Severity::Fatal < Severity::Trace`.

use super::error::LoggerError;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Color used for ordinals outside the canonical ladder.
pub const DEFAULT_COLOR: Color = Color::White;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    /// Not recoverable
    Fatal = 0,
    /// Possibly recoverable
    Error = 1,
    /// Operating concerns or a failure trajectory
    Warn = 2,
    #[default]
    Info = 3,
    /// Development data
    Debug = 4,
    /// Development data, finer than debug
    Trace = 5,
}

impl Severity {
    /// The six canonical severities, most severe first.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Severity::Fatal),
            1 => Some(Severity::Error),
            2 => Some(Severity::Warn),
            3 => Some(Severity::Info),
            4 => Some(Severity::Debug),
            5 => Some(Severity::Trace),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    /// Exact, case-sensitive lookup of the canonical text.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "FATAL" => Some(Severity::Fatal),
            "ERROR" => Some(Severity::Error),
            "WARN" => Some(Severity::Warn),
            "INFO" => Some(Severity::Info),
            "DEBUG" => Some(Severity::Debug),
            "TRACE" => Some(Severity::Trace),
            _ => None,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Severity::Fatal | Severity::Error => Color::Red,
            Severity::Warn => Color::Yellow,
            Severity::Info => Color::Cyan,
            Severity::Debug | Severity::Trace => Color::White,
        }
    }

    /// Returns true for severities that belong on an error-oriented stream.
    #[inline]
    pub fn is_error(self) -> bool {
        self <= Severity::Error
    }

    /// Ordinal to text mapping for the six canonical severities.
    pub fn all() -> BTreeMap<Severity, &'static str> {
        Self::ALL.iter().map(|s| (*s, s.as_str())).collect()
    }
}

/// Canonical text for an ordinal, `None` for unknown ordinals.
pub fn severity_text(ordinal: u8) -> Option<&'static str> {
    Severity::from_ordinal(ordinal).map(Severity::as_str)
}

/// Display color for an ordinal. Unknown ordinals get [`DEFAULT_COLOR`].
pub fn severity_color(ordinal: u8) -> Color {
    Severity::from_ordinal(ordinal).map_or(DEFAULT_COLOR, Severity::color)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::from_text(s).ok_or_else(|| LoggerError::invalid_severity(s))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.ordinal()
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(ordinal: u8) -> Result<Self, LoggerError> {
        Severity::from_ordinal(ordinal)
            .ok_or_else(|| LoggerError::invalid_severity(ordinal.to_string()))
    }
}
