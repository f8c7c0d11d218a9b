//! The picker that ties format resolution, value lists and rendering together.

use crate::common::{ComponentKind, ListenerId};
use crate::config::PickerConfig;
use crate::dropdown::{Dismissible, Dropdown, DropdownAction, DropdownState, Key};
use crate::error::PickerError;
use crate::events::PickerEvent;
use crate::render::Template;
use crate::token::ResolvedTokens;
use crate::value::{show_clear_allowed, DisabledValues, ValueBag};
use crate::values::{self, Interval};
use chrono::{Local, NaiveTime};
use slotmap::SlotMap;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// A synchronous callback run with the updated value after every change.
pub type ChangeListener = Box<dyn FnMut(&ValueBag) + Send>;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A configurable time selector.
///
/// The picker owns the format string and its derived state. Value lists and
/// the display string are recomputed from the format on demand, so they can
/// never go stale. Changes are announced both on a broadcast channel and to
/// registered listeners.
pub struct TimePicker {
    format: String,
    resolved: ResolvedTokens,
    template: Template,
    minute_interval: Interval,
    second_interval: Interval,
    disabled: bool,
    hide_clear_button: bool,
    disabled_values: DisabledValues,
    value: ValueBag,
    dropdown: Dropdown,
    event_sender: broadcast::Sender<PickerEvent>,
    listeners: SlotMap<ListenerId, ChangeListener>,
}

// Construction and configuration.
impl TimePicker {
    /// Builds a picker, validating the configured intervals.
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        let minute_interval = Interval::new(ComponentKind::Minute, config.minute_interval)?;
        let second_interval = Interval::new(ComponentKind::Second, config.second_interval)?;
        let resolved = ResolvedTokens::from_format(&config.format);
        let template = Template::parse(&config.format, &resolved);
        let (event_sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            format: config.format,
            resolved,
            template,
            minute_interval,
            second_interval,
            disabled: config.disabled,
            hide_clear_button: config.hide_clear_button,
            disabled_values: config.disabled_values,
            value: ValueBag::new(),
            dropdown: Dropdown::default(),
            event_sender,
            listeners: SlotMap::with_key(),
        })
    }

    /// Replaces the format string and re-derives every token.
    ///
    /// The current value is kept as-is; callers that switch between 12- and
    /// 24-hour formats usually want to re-seed afterwards.
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
        self.resolved = ResolvedTokens::from_format(&self.format);
        self.template = Template::parse(&self.format, &self.resolved);
        self.event_sender
            .send(PickerEvent::FormatChanged {
                format: self.format.clone(),
                resolved: self.resolved.clone(),
            })
            .ok();
    }

    /// Sets the minute step. On error the previous interval stays in effect.
    pub fn set_minute_interval(&mut self, value: i64) -> Result<(), PickerError> {
        self.minute_interval = Interval::new(ComponentKind::Minute, value)
            .inspect_err(|e| warn!("rejected minute interval: {e}"))?;
        Ok(())
    }

    /// Sets the second step. On error the previous interval stays in effect.
    pub fn set_second_interval(&mut self, value: i64) -> Result<(), PickerError> {
        self.second_interval = Interval::new(ComponentKind::Second, value)
            .inspect_err(|e| warn!("rejected second interval: {e}"))?;
        Ok(())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_hide_clear_button(&mut self, hide: bool) {
        self.hide_clear_button = hide;
    }

    pub fn set_disabled_values(&mut self, disabled_values: DisabledValues) {
        self.disabled_values = disabled_values;
    }
}

// Derived, read-only state.
impl TimePicker {
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn resolved(&self) -> &ResolvedTokens {
        &self.resolved
    }

    pub fn hour_type(&self) -> &'static str {
        self.resolved.get(ComponentKind::Hour)
    }

    pub fn minute_type(&self) -> &'static str {
        self.resolved.get(ComponentKind::Minute)
    }

    pub fn second_type(&self) -> &'static str {
        self.resolved.get(ComponentKind::Second)
    }

    pub fn apm_type(&self) -> &'static str {
        self.resolved.get(ComponentKind::Meridiem)
    }

    pub fn is_twelve_hour(&self) -> bool {
        self.resolved.is_twelve_hour()
    }

    pub fn minute_interval(&self) -> Interval {
        self.minute_interval
    }

    pub fn second_interval(&self) -> Interval {
        self.second_interval
    }

    pub fn hours(&self) -> Vec<String> {
        self.values(ComponentKind::Hour)
    }

    pub fn minutes(&self) -> Vec<String> {
        self.values(ComponentKind::Minute)
    }

    pub fn seconds(&self) -> Vec<String> {
        self.values(ComponentKind::Second)
    }

    pub fn apms(&self) -> Vec<String> {
        self.values(ComponentKind::Meridiem)
    }

    /// The selectable values for `kind`. Empty when the format lacks it.
    pub fn values(&self, kind: ComponentKind) -> Vec<String> {
        values::values_for(
            kind,
            &self.resolved,
            self.minute_interval,
            self.second_interval,
        )
    }

    /// The format with every selected value substituted in.
    pub fn display_time(&self) -> String {
        self.template.render(&self.value)
    }

    pub fn show_clear_button(&self) -> bool {
        !self.hide_clear_button && show_clear_allowed(&self.value)
    }

    pub fn value(&self) -> &ValueBag {
        &self.value
    }

    /// The current value as a time of day, if an hour is selected.
    pub fn time(&self) -> Option<NaiveTime> {
        self.value.to_time(&self.resolved)
    }

    pub fn disabled_values(&self) -> &DisabledValues {
        &self.disabled_values
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

// Selection.
impl TimePicker {
    /// Selects `value` for `kind` and announces the change.
    ///
    /// The value must be one the picker offers for that kind. Disabled values
    /// are not checked here; that is the host's concern.
    pub fn select(&mut self, kind: ComponentKind, value: &str) -> Result<(), PickerError> {
        if self.disabled {
            return Err(PickerError::Disabled);
        }
        if !self.resolved.is_present(kind) {
            return Err(PickerError::ComponentAbsent(kind));
        }
        if !self.values(kind).iter().any(|v| v == value) {
            return Err(PickerError::ValueNotOffered {
                kind,
                value: value.to_string(),
            });
        }
        self.value.set(kind, value);
        info!(%kind, value, "selected");
        self.notify_change();
        Ok(())
    }

    pub fn set_hours(&mut self, value: &str) -> Result<(), PickerError> {
        self.select(ComponentKind::Hour, value)
    }

    pub fn set_minutes(&mut self, value: &str) -> Result<(), PickerError> {
        self.select(ComponentKind::Minute, value)
    }

    pub fn set_seconds(&mut self, value: &str) -> Result<(), PickerError> {
        self.select(ComponentKind::Second, value)
    }

    pub fn set_apm(&mut self, value: &str) -> Result<(), PickerError> {
        self.select(ComponentKind::Meridiem, value)
    }

    /// Empties every component, leaving the display as the bare format.
    pub fn clear(&mut self) -> Result<(), PickerError> {
        if self.disabled {
            return Err(PickerError::Disabled);
        }
        for kind in ComponentKind::ALL {
            self.value.clear(kind);
        }
        info!("cleared selection");
        self.notify_change();
        Ok(())
    }

    /// Replaces the whole value with `time`, snapped to the interval grid.
    pub fn seed(&mut self, time: NaiveTime) {
        self.value = ValueBag::from_time(
            time,
            &self.resolved,
            self.minute_interval,
            self.second_interval,
        );
        debug!(%time, display = %self.display_time(), "seeded value");
        self.notify_change();
    }

    /// Seeds the value from the local wall clock.
    pub fn seed_now(&mut self) {
        self.seed(Local::now().time());
    }

    fn notify_change(&mut self) {
        for (_id, listener) in self.listeners.iter_mut() {
            listener(&self.value);
        }
        self.event_sender
            .send(PickerEvent::TimeChanged {
                value: self.value.clone(),
            })
            .ok();
    }
}

// Dropdown handling.
impl TimePicker {
    pub fn dropdown_state(&self) -> DropdownState {
        self.dropdown.state()
    }

    /// Opens or closes the dropdown. Returns the host side effect, if any.
    pub fn toggle_dropdown(&mut self) -> Option<DropdownAction> {
        let action = self.dropdown.toggle(self.disabled);
        self.announce(action)
    }

    /// Forwards a key press to the dropdown.
    pub fn on_key(&mut self, key: Key) -> Option<DropdownAction> {
        let action = self.dropdown.on_key(key);
        self.announce(action)
    }

    /// Forwards a focus loss to the dropdown.
    pub fn on_lose_focus(&mut self, target_inside: Option<bool>) -> Option<DropdownAction> {
        let action = self.dropdown.on_lose_focus(target_inside);
        self.announce(action)
    }

    fn announce(&self, action: Option<DropdownAction>) -> Option<DropdownAction> {
        let event = match action? {
            DropdownAction::FocusFirstColumn => PickerEvent::DropdownOpened,
            DropdownAction::Blur => PickerEvent::DropdownClosed,
        };
        self.event_sender.send(event).ok();
        action
    }
}

// Subscription API.
impl TimePicker {
    /// Registers a callback run after every change.
    ///
    /// # Returns
    /// A `ListenerId` which can be used to later remove the listener.
    pub fn on_change(
        &mut self,
        listener: impl FnMut(&ValueBag) + Send + 'static,
    ) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    /// Removes a change listener.
    ///
    /// Returns `true` if the listener was found and removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Subscribes to the `PickerEvent` stream.
    pub fn subscribe_events(&self) -> broadcast::Receiver<PickerEvent> {
        self.event_sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn picker(format: &str) -> TimePicker {
        TimePicker::new(PickerConfig {
            format: format.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn exposes_resolved_types() {
        let p = picker("hh:mm:ss A");
        assert_eq!(p.hour_type(), "hh");
        assert_eq!(p.minute_type(), "mm");
        assert_eq!(p.second_type(), "ss");
        assert_eq!(p.apm_type(), "A");
        assert!(p.is_twelve_hour());
        assert_eq!(p.hours().len(), 12);
    }

    #[test]
    fn invalid_interval_keeps_previous_value() {
        let mut p = picker("HH:mm");
        p.set_minute_interval(15).unwrap();
        assert!(matches!(
            p.set_minute_interval(0),
            Err(PickerError::InvalidInterval { .. })
        ));
        assert!(p.set_minute_interval(-1).is_err());
        assert_eq!(p.minute_interval().get(), 15);
        assert_eq!(p.minutes(), vec!["00", "15", "30", "45"]);
    }

    #[test]
    fn new_rejects_bad_config() {
        let result = TimePicker::new(PickerConfig {
            second_interval: 0,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(PickerError::InvalidInterval {
                component: ComponentKind::Second,
                value: 0
            })
        ));
    }

    #[test]
    fn select_validates_against_value_lists() {
        let mut p = picker("HH:mm");
        p.set_hours("09").unwrap();
        assert!(matches!(
            p.set_hours("9"),
            Err(PickerError::ValueNotOffered { .. })
        ));
        assert!(matches!(
            p.set_seconds("00"),
            Err(PickerError::ComponentAbsent(ComponentKind::Second))
        ));
        p.set_minutes("30").unwrap();
        assert_eq!(p.display_time(), "09:30");
    }

    #[test]
    fn clear_empties_every_component() {
        let mut p = picker("hh:mm a");
        p.set_hours("10").unwrap();
        p.set_minutes("15").unwrap();
        p.set_apm("pm").unwrap();
        assert!(p.show_clear_button());
        p.clear().unwrap();
        assert!(!p.show_clear_button());
        assert_eq!(p.value(), &ValueBag::new());
        assert_eq!(p.display_time(), "hh:mm a");
    }

    #[test]
    fn hidden_clear_button_stays_hidden() {
        let mut p = picker("HH:mm");
        p.set_hide_clear_button(true);
        p.set_hours("01").unwrap();
        assert!(!p.show_clear_button());
    }

    #[test]
    fn disabled_picker_refuses_changes() {
        let mut p = picker("HH:mm");
        p.set_disabled(true);
        assert!(matches!(p.set_hours("01"), Err(PickerError::Disabled)));
        assert!(matches!(p.clear(), Err(PickerError::Disabled)));
        assert_eq!(p.toggle_dropdown(), None);
    }

    #[test]
    fn listeners_see_every_change_until_removed() {
        let mut p = picker("HH:mm");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = p.on_change(move |value| {
            sink.lock()
                .unwrap()
                .push(value.get(ComponentKind::Hour).map(str::to_string));
        });
        p.set_hours("05").unwrap();
        p.clear().unwrap();
        assert!(p.remove_listener(id));
        assert!(!p.remove_listener(id));
        p.set_hours("06").unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![Some("05".to_string()), None]);
    }

    #[test]
    fn listeners_may_hold_non_sync_state() {
        use std::cell::Cell;
        use std::sync::atomic::{AtomicU32, Ordering};

        let mut p = picker("HH:mm");
        let total = Arc::new(AtomicU32::new(0));
        let published = total.clone();
        let calls = Cell::new(0u32);
        p.on_change(move |_| {
            calls.set(calls.get() + 1);
            published.store(calls.get(), Ordering::Relaxed);
        });
        p.set_hours("01").unwrap();
        p.set_minutes("02").unwrap();
        assert_eq!(total.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn events_are_broadcast() {
        let mut p = picker("HH:mm");
        let mut rx = p.subscribe_events();
        p.set_hours("07").unwrap();
        p.toggle_dropdown();
        p.on_key(Key::Escape);
        p.set_format("H:mm");

        match rx.try_recv().unwrap() {
            PickerEvent::TimeChanged { value } => {
                assert_eq!(value.get(ComponentKind::Hour), Some("07"))
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(rx.try_recv().unwrap(), PickerEvent::DropdownOpened);
        assert_eq!(rx.try_recv().unwrap(), PickerEvent::DropdownClosed);
        assert!(matches!(
            rx.try_recv().unwrap(),
            PickerEvent::FormatChanged { .. }
        ));
    }

    #[test]
    fn seed_fills_visible_components() {
        let mut p = picker("hh:mm:ss a");
        p.set_minute_interval(5).unwrap();
        p.seed(NaiveTime::from_hms_opt(18, 22, 9).unwrap());
        assert_eq!(p.display_time(), "06:20:09 pm");
        assert_eq!(p.time(), NaiveTime::from_hms_opt(18, 20, 9));
    }

    #[test]
    fn stale_hour_after_format_switch_has_no_time() {
        let mut p = picker("HH:mm");
        p.set_hours("18").unwrap();
        assert_eq!(p.time(), NaiveTime::from_hms_opt(18, 0, 0));
        p.set_format("hh:mm A");
        assert!(!p.hours().contains(&"18".to_string()));
        assert_eq!(p.time(), None);
    }

    #[test]
    fn format_change_re_resolves() {
        let mut p = picker("HH:mm");
        assert_eq!(p.hours().len(), 24);
        p.set_format("h:mm A");
        assert_eq!(p.hour_type(), "h");
        assert_eq!(p.hours().len(), 12);
        assert_eq!(p.apms(), vec!["AM", "PM"]);
    }
}
