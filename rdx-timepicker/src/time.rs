//! Conversions between wall-clock times and picker values.
//!
//! A display is only meaningful once every visible component has a value, so
//! hosts usually seed the picker from the current time. These conversions
//! respect the hour convention of the resolved token and snap minutes and
//! seconds down onto the interval grid.

use crate::common::ComponentKind;
use crate::token::ResolvedTokens;
use crate::value::ValueBag;
use crate::values::Interval;
use chrono::{NaiveTime, Timelike};

impl ValueBag {
    /// Builds a bag holding `time` for every component `resolved` offers.
    pub fn from_time(
        time: NaiveTime,
        resolved: &ResolvedTokens,
        minute_interval: Interval,
        second_interval: Interval,
    ) -> Self {
        let mut bag = ValueBag::new();
        let hour = time.hour();

        let hour_value = match resolved.get(ComponentKind::Hour) {
            "H" => Some(hour.to_string()),
            "HH" => Some(format!("{hour:02}")),
            "h" => Some(twelve_hour(hour).to_string()),
            "hh" => Some(format!("{:02}", twelve_hour(hour))),
            "k" => Some(one_based(hour).to_string()),
            "kk" => Some(format!("{:02}", one_based(hour))),
            _ => None,
        };
        if let Some(value) = hour_value {
            bag.set(ComponentKind::Hour, value);
        }

        let minute = snap(time.minute(), minute_interval);
        match resolved.get(ComponentKind::Minute) {
            "m" => bag.set(ComponentKind::Minute, minute.to_string()),
            "mm" => bag.set(ComponentKind::Minute, format!("{minute:02}")),
            _ => {}
        }

        let second = snap(time.second(), second_interval);
        match resolved.get(ComponentKind::Second) {
            "s" => bag.set(ComponentKind::Second, second.to_string()),
            "ss" => bag.set(ComponentKind::Second, format!("{second:02}")),
            _ => {}
        }

        let pm = hour >= 12;
        match resolved.get(ComponentKind::Meridiem) {
            "A" => bag.set(ComponentKind::Meridiem, if pm { "PM" } else { "AM" }),
            "a" => bag.set(ComponentKind::Meridiem, if pm { "pm" } else { "am" }),
            _ => {}
        }
        bag
    }

    /// Reads the bag back as a time of day.
    ///
    /// Returns `None` when no hour is selected, or when a value does not
    /// parse or lies outside the range its token allows (`1..=12` for
    /// `h`/`hh`, `1..=24` for `k`/`kk`, `0..=23` for `H`/`HH`, `0..=59` for
    /// minutes and seconds). Missing minutes or seconds count as zero; a
    /// twelve-hour value without a meridiem is taken as AM.
    pub fn to_time(&self, resolved: &ResolvedTokens) -> Option<NaiveTime> {
        let raw_hour: u32 = self.get(ComponentKind::Hour)?.parse().ok()?;
        let hour = match resolved.get(ComponentKind::Hour) {
            "h" | "hh" if (1..=12).contains(&raw_hour) => {
                let pm = self
                    .get(ComponentKind::Meridiem)
                    .is_some_and(|m| m.eq_ignore_ascii_case("pm"));
                raw_hour % 12 + if pm { 12 } else { 0 }
            }
            "k" | "kk" if (1..=24).contains(&raw_hour) => raw_hour % 24,
            "H" | "HH" if raw_hour <= 23 => raw_hour,
            _ => return None,
        };
        let minute = parse_or_zero(self.get(ComponentKind::Minute))?;
        let second = parse_or_zero(self.get(ComponentKind::Second))?;
        NaiveTime::from_hms_opt(hour, minute, second)
    }
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn one_based(hour: u32) -> u32 {
    if hour == 0 {
        24
    } else {
        hour
    }
}

fn snap(value: u32, interval: Interval) -> u32 {
    value - value % interval.get()
}

fn parse_or_zero(value: Option<&str>) -> Option<u32> {
    match value {
        Some(v) => v.parse().ok().filter(|n| *n <= 59),
        None => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn every(n: i64) -> Interval {
        Interval::new(ComponentKind::Minute, n).unwrap()
    }

    #[test]
    fn seeds_twelve_hour_format() {
        let resolved = ResolvedTokens::from_format("hh:mm A");
        let bag = ValueBag::from_time(at(0, 7, 0), &resolved, every(1), every(1));
        assert_eq!(bag.get(ComponentKind::Hour), Some("12"));
        assert_eq!(bag.get(ComponentKind::Minute), Some("07"));
        assert_eq!(bag.get(ComponentKind::Meridiem), Some("AM"));
        assert!(!bag.is_set(ComponentKind::Second));
    }

    #[test]
    fn snaps_to_interval_grid() {
        let resolved = ResolvedTokens::from_format("H:m:ss");
        let bag = ValueBag::from_time(at(13, 44, 59), &resolved, every(15), every(20));
        assert_eq!(bag.get(ComponentKind::Hour), Some("13"));
        assert_eq!(bag.get(ComponentKind::Minute), Some("30"));
        assert_eq!(bag.get(ComponentKind::Second), Some("40"));
    }

    #[test]
    fn k_tokens_map_midnight_to_24() {
        let resolved = ResolvedTokens::from_format("kk:mm");
        let bag = ValueBag::from_time(at(0, 0, 0), &resolved, every(1), every(1));
        assert_eq!(bag.get(ComponentKind::Hour), Some("24"));
        assert_eq!(bag.to_time(&resolved), Some(at(0, 0, 0)));
    }

    #[test]
    fn reads_back_afternoon_time() {
        let resolved = ResolvedTokens::from_format("h:mm a");
        let bag = ValueBag::new()
            .with(ComponentKind::Hour, "3")
            .with(ComponentKind::Minute, "05")
            .with(ComponentKind::Meridiem, "pm");
        assert_eq!(bag.to_time(&resolved), Some(at(15, 5, 0)));
    }

    #[test]
    fn twelve_without_meridiem_is_midnight() {
        let resolved = ResolvedTokens::from_format("hh:mm");
        let bag = ValueBag::new().with(ComponentKind::Hour, "12");
        assert_eq!(bag.to_time(&resolved), Some(at(0, 0, 0)));
    }

    #[test]
    fn out_of_range_values_have_no_time() {
        let twelve = ResolvedTokens::from_format("hh:mm A");
        let bag = ValueBag::new().with(ComponentKind::Hour, "18");
        assert_eq!(bag.to_time(&twelve), None);
        let bag = ValueBag::new().with(ComponentKind::Hour, "0");
        assert_eq!(bag.to_time(&twelve), None);

        let one_based = ResolvedTokens::from_format("kk:mm");
        let bag = ValueBag::new().with(ComponentKind::Hour, "25");
        assert_eq!(bag.to_time(&one_based), None);
        let bag = ValueBag::new().with(ComponentKind::Hour, "0");
        assert_eq!(bag.to_time(&one_based), None);

        let zero_based = ResolvedTokens::from_format("HH:mm:ss");
        let bag = ValueBag::new().with(ComponentKind::Hour, "24");
        assert_eq!(bag.to_time(&zero_based), None);
        let bag = ValueBag::new()
            .with(ComponentKind::Hour, "10")
            .with(ComponentKind::Minute, "60");
        assert_eq!(bag.to_time(&zero_based), None);
        let bag = ValueBag::new()
            .with(ComponentKind::Hour, "10")
            .with(ComponentKind::Second, "75");
        assert_eq!(bag.to_time(&zero_based), None);
    }

    #[test]
    fn missing_hour_has_no_time() {
        let resolved = ResolvedTokens::from_format("HH:mm");
        let bag = ValueBag::new().with(ComponentKind::Minute, "10");
        assert_eq!(bag.to_time(&resolved), None);
    }
}
