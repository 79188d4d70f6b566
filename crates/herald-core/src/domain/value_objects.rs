//! Domain value objects: Justification, MessageKind, TimestampFormat.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Rendering logic lives with
//! the justifiers and the announcer, not here.
//!
//! Parsing is strict: an unknown name is a [`DomainError`], never a silent
//! default. Defaults exist only through `Default` impls, which callers opt
//! into explicitly.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Justification ────────────────────────────────────────────────────────────

/// How a banner anchors its text within the target width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
}

impl Justification {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Justification {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "center" | "centre" | "c" => Ok(Self::Center),
            "right" | "r" => Ok(Self::Right),
            other => Err(DomainError::UnknownJustification {
                value: other.to_string(),
            }),
        }
    }
}

// ── MessageKind ───────────────────────────────────────────────────────────────

/// The flavour of a status line, carried as a fixed prefix.
///
/// `Plain` is the only prefix-free kind; everything else gets a four-column
/// sigil so scanning a long log visually separates outcomes from chatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Plain,
    Debug,
    Info,
    Success,
    Warn,
    Error,
}

impl MessageKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// The prefix prepended to lines of this kind.
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Debug => " >> ",
            Self::Info => " -- ",
            Self::Success => " -> ",
            Self::Warn => " ?! ",
            Self::Error => " !! ",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "line" => Ok(Self::Plain),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "success" | "ok" => Ok(Self::Success),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            other => Err(DomainError::UnknownMessageKind {
                value: other.to_string(),
            }),
        }
    }
}

// ── TimestampFormat ───────────────────────────────────────────────────────────

/// Wall-clock rendering for progress lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// `[YYYYMMDDHHMMSS]` — sortable, grep-friendly.
    #[default]
    Compact,
    /// `MM/DD/YYYY HH:MM:SS TZ` — for humans reading live output.
    Verbose,
}

impl TimestampFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Verbose => "verbose",
        }
    }

    /// The chrono format string for this preset.
    pub const fn format_str(&self) -> &'static str {
        match self {
            Self::Compact => "[%Y%m%d%H%M%S]",
            Self::Verbose => "%m/%d/%Y %H:%M:%S %Z",
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimestampFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "verbose" => Ok(Self::Verbose),
            other => Err(DomainError::UnknownTimestampFormat {
                value: other.to_string(),
            }),
        }
    }
}

// ── Length parsing ────────────────────────────────────────────────────────────

/// Parse a column count from a textual source (CLI flag, env var).
///
/// `usize` already enforces non-negativity; this wraps the conversion error
/// into a [`DomainError`] naming the offending value instead of letting the
/// stdlib `ParseIntError` leak through.
pub fn parse_columns(s: &str) -> Result<usize, DomainError> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| DomainError::InvalidLength {
            value: s.to_string(),
        })
}
