//! Error types returned by the picker.

use crate::common::ComponentKind;
use thiserror::Error;

/// Everything that can go wrong while configuring or driving a `TimePicker`.
///
/// Token resolution and list generation never fail; an absent token simply
/// yields an empty list. Errors come only from configuration and selection.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("{component}-interval must be greater than 0, got {value}")]
    InvalidInterval { component: ComponentKind, value: i64 },

    #[error("the format string has no {0} component")]
    ComponentAbsent(ComponentKind),

    #[error("{value:?} is not a selectable {kind} value")]
    ValueNotOffered { kind: ComponentKind, value: String },

    #[error("the picker is disabled")]
    Disabled,

    #[error("failed to load picker configuration: {0}")]
    Config(#[from] config::ConfigError),
}
