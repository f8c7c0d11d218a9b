//! Defines the events a `TimePicker` broadcasts to its host.
//!
//! Hosts subscribe to these to persist the selection, re-render, or move
//! focus. The picker never waits on a subscriber.

use crate::token::ResolvedTokens;
use crate::value::ValueBag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Fired after every completed selection, clear or seed.
    TimeChanged { value: ValueBag },
    /// Fired when the format string is replaced.
    FormatChanged {
        format: String,
        resolved: ResolvedTokens,
    },
    /// Fired when the dropdown opens. The host should focus the first column.
    DropdownOpened,
    /// Fired when the dropdown closes, whatever closed it.
    DropdownClosed,
}
