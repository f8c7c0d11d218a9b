//! # Timepicker
//!
//! Format-driven time selection for Rust.
//!
//! Timepicker takes a display format such as `"hh:mm A"` and works out
//! everything a time-selection widget needs from it: which components the
//! format shows, which values each component may take, and how the chosen
//! values render back into the template.
//!
//! ## Core Concepts
//!
//! - **Token resolution**: each component (hour, minute, second, meridiem) has a
//!   fixed, priority-ordered list of tokens. The first one found in the format
//!   wins, so `"HH"` beats `"H"`. The hour falls back to `"HH"`; the others are
//!   simply not offered when absent.
//! - **Value lists**: the resolved token decides padding, 12- vs 24-hour mode and
//!   0- vs 1-based hours. Minutes and seconds step by a configurable interval.
//! - **Rendering**: the format is split once into literals and placeholders, and
//!   selected values are substituted into the placeholders.
//! - **Event-Driven**: a `TimePicker` announces every change on a broadcast
//!   channel and to registered listeners.
//!
//! ## Example Usage
//!
//! ```rust
//! use timepicker::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut picker = TimePicker::new(PickerConfig {
//!         format: "hh:mm A".to_string(),
//!         minute_interval: 15,
//!         ..Default::default()
//!     })?;
//!
//!     assert_eq!(picker.minutes(), vec!["00", "15", "30", "45"]);
//!
//!     picker.set_hours("09")?;
//!     picker.set_minutes("30")?;
//!     picker.set_apm("PM")?;
//!     assert_eq!(picker.display_time(), "09:30 PM");
//!     Ok(())
//! }
//! ```

pub const PICKER_NAME: &str = "Timepicker";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod events;
pub mod picker;
pub mod render;
pub mod time;
pub mod token;
pub mod value;
pub mod values;

/// A prelude module for easy importing of the most common Timepicker types.
pub mod prelude {
    pub use crate::common::{ComponentKind, ListenerId};
    pub use crate::config::PickerConfig;
    pub use crate::dropdown::{Dismissible, DropdownAction, DropdownState, Key};
    pub use crate::error::PickerError;
    pub use crate::events::PickerEvent;
    pub use crate::picker::TimePicker;
    pub use crate::render::{render, Template};
    pub use crate::token::{resolve, ResolvedTokens};
    pub use crate::value::{show_clear_allowed, DisabledValues, ValueBag};
    pub use crate::values::Interval;
}
