//! Contains common, primitive types shared by every part of the picker.
//!
//! This module defines the component kinds a format string can carry, the
//! fixed token candidate lists for each kind, and the key type used to
//! identify registered change listeners.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::fmt;

/// Hour tokens, most specific first. `"HH"` must be tried before `"H"`.
pub const HOUR_TOKENS: &[&str] = &["HH", "H", "hh", "h", "kk", "k"];
/// Minute tokens, most specific first.
pub const MINUTE_TOKENS: &[&str] = &["mm", "m"];
/// Second tokens, most specific first.
pub const SECOND_TOKENS: &[&str] = &["ss", "s"];
/// Meridiem (AM/PM) tokens.
pub const MERIDIEM_TOKENS: &[&str] = &["A", "a"];

new_key_type! {
    /// Uniquely identifies a change listener registered on a `TimePicker`.
    ///
    /// Keys are never reused, so a stale id cannot remove someone else's listener.
    pub struct ListenerId;
}

/// One of the time components a format string can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Hour,
    Minute,
    Second,
    #[serde(alias = "apm")]
    Meridiem,
}

impl ComponentKind {
    /// Every kind, in the order substitution is performed.
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Hour,
        ComponentKind::Minute,
        ComponentKind::Second,
        ComponentKind::Meridiem,
    ];

    /// The priority-ordered token candidates for this kind.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            ComponentKind::Hour => HOUR_TOKENS,
            ComponentKind::Minute => MINUTE_TOKENS,
            ComponentKind::Second => SECOND_TOKENS,
            ComponentKind::Meridiem => MERIDIEM_TOKENS,
        }
    }

    /// The token assumed when the format carries none for this kind.
    ///
    /// Only the hour has one, so an hour column is always offered.
    pub fn fallback(self) -> Option<&'static str> {
        match self {
            ComponentKind::Hour => Some("HH"),
            _ => None,
        }
    }

    /// Lowercase name, as used in config files and the shell.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Hour => "hour",
            ComponentKind::Minute => "minute",
            ComponentKind::Second => "second",
            ComponentKind::Meridiem => "meridiem",
        }
    }

    /// Parses a lowercase kind name. Accepts `apm` for the meridiem.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hour" | "hours" => Some(ComponentKind::Hour),
            "minute" | "minutes" => Some(ComponentKind::Minute),
            "second" | "seconds" => Some(ComponentKind::Second),
            "meridiem" | "apm" => Some(ComponentKind::Meridiem),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
