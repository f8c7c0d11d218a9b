//! Open/closed state of the picker's dropdown surface.
//!
//! Rendering and real focus handling belong to the host. This module only
//! decides when the surface opens or closes and which side effect the host
//! should run on entry to each state.

/// Whether the dropdown is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Side effect the host runs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownAction {
    /// Entered `Open`: move focus to the first picker column.
    FocusFirstColumn,
    /// Entered `Closed`.
    Blur,
}

/// Keys the surface reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// A surface that closes on Escape or when focus leaves it.
pub trait Dismissible {
    fn is_open(&self) -> bool;

    /// Closes the surface. Returns the entry action, or `None` if already closed.
    fn dismiss(&mut self) -> Option<DropdownAction>;

    fn on_key(&mut self, key: Key) -> Option<DropdownAction> {
        if key == Key::Escape && self.is_open() {
            self.dismiss()
        } else {
            None
        }
    }

    /// `target_inside` is `None` when focus went nowhere known, in which case
    /// the surface stays open.
    fn on_lose_focus(&mut self, target_inside: Option<bool>) -> Option<DropdownAction> {
        if self.is_open() && target_inside == Some(false) {
            self.dismiss()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    state: DropdownState,
}

impl Dropdown {
    pub fn state(&self) -> DropdownState {
        self.state
    }

    /// Flips the state. A disabled picker can be closed but never opened.
    pub fn toggle(&mut self, disabled: bool) -> Option<DropdownAction> {
        match self.state {
            DropdownState::Open => self.dismiss(),
            DropdownState::Closed if disabled => None,
            DropdownState::Closed => {
                self.state = DropdownState::Open;
                Some(DropdownAction::FocusFirstColumn)
            }
        }
    }
}

impl Dismissible for Dropdown {
    fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    fn dismiss(&mut self) -> Option<DropdownAction> {
        if self.is_open() {
            self.state = DropdownState::Closed;
            Some(DropdownAction::Blur)
        } else {
            None
        }
    }
}
