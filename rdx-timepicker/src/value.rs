//! The caller-owned selection state and the disabled-value pass-through.

use crate::common::ComponentKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The currently selected string for each component.
///
/// An empty string is never stored; setting one clears the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    second: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "apm")]
    meridiem: Option<String>,
}

impl ValueBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for seeding a bag in one expression.
    pub fn with(mut self, kind: ComponentKind, value: impl Into<String>) -> Self {
        self.set(kind, value);
        self
    }

    pub fn get(&self, kind: ComponentKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    pub fn set(&mut self, kind: ComponentKind, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(kind) = (!value.is_empty()).then_some(value);
    }

    pub fn clear(&mut self, kind: ComponentKind) {
        *self.slot_mut(kind) = None;
    }

    pub fn is_set(&self, kind: ComponentKind) -> bool {
        self.slot(kind).is_some()
    }

    fn slot(&self, kind: ComponentKind) -> &Option<String> {
        match kind {
            ComponentKind::Hour => &self.hour,
            ComponentKind::Minute => &self.minute,
            ComponentKind::Second => &self.second,
            ComponentKind::Meridiem => &self.meridiem,
        }
    }

    fn slot_mut(&mut self, kind: ComponentKind) -> &mut Option<String> {
        match kind {
            ComponentKind::Hour => &mut self.hour,
            ComponentKind::Minute => &mut self.minute,
            ComponentKind::Second => &mut self.second,
            ComponentKind::Meridiem => &mut self.meridiem,
        }
    }
}

/// Whether a clear action makes sense: an hour or a minute is selected.
pub fn show_clear_allowed(value: &ValueBag) -> bool {
    value.is_set(ComponentKind::Hour) || value.is_set(ComponentKind::Minute)
}

/// Values the host wants greyed out in each picker column.
///
/// The picker never filters its lists by these; they travel alongside the
/// lists to whatever renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabledValues {
    #[serde(default)]
    pub hour: BTreeSet<String>,
    #[serde(default)]
    pub minute: BTreeSet<String>,
    #[serde(default)]
    pub second: BTreeSet<String>,
    #[serde(default, alias = "apm")]
    pub meridiem: BTreeSet<String>,
}

impl DisabledValues {
    pub fn for_kind(&self, kind: ComponentKind) -> &BTreeSet<String> {
        match kind {
            ComponentKind::Hour => &self.hour,
            ComponentKind::Minute => &self.minute,
            ComponentKind::Second => &self.second,
            ComponentKind::Meridiem => &self.meridiem,
        }
    }

    pub fn is_disabled(&self, kind: ComponentKind, value: &str) -> bool {
        self.for_kind(kind).contains(value)
    }
}
