//! Generates the selectable values for each time component.
//!
//! Every generator is a pure function of the resolved token (plus the step
//! interval for minutes and seconds). An unresolved or unknown token yields
//! an empty list rather than an error.

use crate::common::ComponentKind;
use crate::error::PickerError;
use crate::token::ResolvedTokens;
use std::fmt;
use tracing::trace;

/// A strictly positive step between successive minute or second values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval(u32);

impl Interval {
    /// Validates a raw interval for `component`.
    ///
    /// Zero and negative values are rejected. Values of 60 or more are
    /// accepted and produce a single-entry list.
    pub fn new(component: ComponentKind, value: i64) -> Result<Self, PickerError> {
        match u32::try_from(value) {
            Ok(step) if step > 0 => Ok(Self(step)),
            _ if value > 0 => Ok(Self(u32::MAX)),
            _ => Err(PickerError::InvalidInterval { component, value }),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hour values for an hour token.
///
/// `h`/`hh` give twelve entries, everything else twenty-four. `H`/`HH`
/// count from zero, `h`/`hh`/`k`/`kk` from one.
pub fn hours(token: &str) -> Vec<String> {
    let count = if matches!(token, "h" | "hh") { 12 } else { 24 };
    let hours: Vec<String> = (0..count)
        .filter_map(|i: u32| match token {
            "H" => Some(i.to_string()),
            "HH" => Some(format!("{i:02}")),
            "h" | "k" => Some((i + 1).to_string()),
            "hh" | "kk" => Some(format!("{:02}", i + 1)),
            _ => None,
        })
        .collect();
    trace!(token, count = hours.len(), "generated hours");
    hours
}

/// Minute values for a minute token, stepping by `interval`.
pub fn minutes(token: &str, interval: Interval) -> Vec<String> {
    sexagesimal(token, "m", "mm", interval)
}

/// Second values for a second token, stepping by `interval`.
///
/// The plain `s` token yields strings just like `m` does.
pub fn seconds(token: &str, interval: Interval) -> Vec<String> {
    sexagesimal(token, "s", "ss", interval)
}

/// Meridiem labels, cased to match the token.
pub fn meridiems(token: &str) -> Vec<String> {
    match token {
        "A" => vec!["AM".to_string(), "PM".to_string()],
        "a" => vec!["am".to_string(), "pm".to_string()],
        _ => Vec::new(),
    }
}

/// The value list for any component, given the resolved tokens.
pub fn values_for(
    kind: ComponentKind,
    resolved: &ResolvedTokens,
    minute_interval: Interval,
    second_interval: Interval,
) -> Vec<String> {
    let token = resolved.get(kind);
    match kind {
        ComponentKind::Hour => hours(token),
        ComponentKind::Minute => minutes(token, minute_interval),
        ComponentKind::Second => seconds(token, second_interval),
        ComponentKind::Meridiem => meridiems(token),
    }
}

fn sexagesimal(token: &str, plain: &str, padded: &str, interval: Interval) -> Vec<String> {
    let step = usize::try_from(interval.get()).unwrap_or(usize::MAX);
    let values: Vec<String> = if token == plain {
        (0..60u32).step_by(step).map(|i| i.to_string()).collect()
    } else if token == padded {
        (0..60u32).step_by(step).map(|i| format!("{i:02}")).collect()
    } else {
        Vec::new()
    };
    trace!(token, step, count = values.len(), "generated sexagesimal values");
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every(n: i64) -> Interval {
        Interval::new(ComponentKind::Minute, n).unwrap()
    }

    #[test]
    fn padded_24_hour_list() {
        let list = hours("HH");
        assert_eq!(list.len(), 24);
        assert_eq!(list.first().map(String::as_str), Some("00"));
        assert_eq!(list.last().map(String::as_str), Some("23"));
    }

    #[test]
    fn hour_list_lengths_per_token() {
        for token in ["H", "HH", "k", "kk"] {
            assert_eq!(hours(token).len(), 24, "token {token}");
        }
        for token in ["h", "hh"] {
            assert_eq!(hours(token).len(), 12, "token {token}");
        }
        assert!(hours("").is_empty());
    }

    #[test]
    fn one_based_hour_lists() {
        let twelve: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        assert_eq!(hours("h"), twelve);
        assert_eq!(hours("hh")[0], "01");
        assert_eq!(hours("k").last().map(String::as_str), Some("24"));
        assert_eq!(hours("kk")[8], "09");
        assert_eq!(hours("H")[0], "0");
    }

    #[test]
    fn quarter_hour_minutes() {
        assert_eq!(minutes("mm", every(15)), vec!["00", "15", "30", "45"]);
        assert_eq!(minutes("m", every(15)), vec!["0", "15", "30", "45"]);
    }

    #[test]
    fn uneven_interval_stops_before_sixty() {
        let list = minutes("mm", every(7));
        assert_eq!(list.len(), 9);
        assert_eq!(list.last().map(String::as_str), Some("56"));
    }

    #[test]
    fn large_interval_yields_single_value() {
        assert_eq!(minutes("mm", every(60)), vec!["00"]);
        assert_eq!(seconds("s", every(90)), vec!["0"]);
        assert_eq!(seconds("ss", every(i64::MAX)), vec!["00"]);
    }

    #[test]
    fn plain_second_token_yields_strings() {
        let list = seconds("s", Interval::default());
        assert_eq!(list.len(), 60);
        assert_eq!(list[5], "5");
    }

    #[test]
    fn absent_tokens_yield_empty_lists() {
        assert!(minutes("", Interval::default()).is_empty());
        assert!(seconds("", Interval::default()).is_empty());
        assert!(meridiems("").is_empty());
    }

    #[test]
    fn meridiem_case_follows_token() {
        assert_eq!(meridiems("A"), vec!["AM", "PM"]);
        assert_eq!(meridiems("a"), vec!["am", "pm"]);
    }

    #[test]
    fn non_positive_intervals_are_rejected() {
        assert!(matches!(
            Interval::new(ComponentKind::Second, 0),
            Err(PickerError::InvalidInterval { value: 0, .. })
        ));
        assert!(Interval::new(ComponentKind::Minute, -5).is_err());
        assert_eq!(Interval::new(ComponentKind::Minute, 5).unwrap().get(), 5);
    }

    #[test]
    fn values_for_dispatches_on_kind() {
        let resolved = ResolvedTokens::from_format("hh:mm a");
        let list = values_for(ComponentKind::Meridiem, &resolved, every(1), every(1));
        assert_eq!(list, vec!["am", "pm"]);
        assert!(values_for(ComponentKind::Second, &resolved, every(1), every(1)).is_empty());
    }
}
