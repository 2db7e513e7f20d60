//! Delivery windows
//!
//! 30-minute delivery slots between opening and closing time. The backend
//! can serve the authoritative list (`GET /orders/delivery-times/`); the
//! generator here produces the same shape locally and is regenerated on
//! every call, never cached.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// First slot of a day starts at this hour
pub const OPENING_HOUR: u32 = 10;
/// No slot ends later than this hour; the last slot is `"22:30-23:00"`
pub const CLOSING_HOUR: u32 = 23;

/// Day a delivery slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryDay {
    #[default]
    Today,
    Tomorrow,
}

impl std::fmt::Display for DeliveryDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryDay::Today => write!(f, "today"),
            DeliveryDay::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

/// One selectable delivery window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySlot {
    /// Stable identity, `"<day>-<time_range>"`
    pub id: String,
    /// `"HH:MM-HH:MM"`
    pub time_range: String,
    pub day: DeliveryDay,
}

impl DeliverySlot {
    pub fn new(time_range: impl Into<String>, day: DeliveryDay) -> Self {
        let time_range = time_range.into();
        Self {
            id: format!("{day}-{time_range}"),
            time_range,
            day,
        }
    }

    /// Decorate a server-provided window name; the backend only serves
    /// same-day windows.
    pub fn from_remote(time_range: impl Into<String>) -> Self {
        Self::new(time_range, DeliveryDay::Today)
    }

    /// Slot start (`"18:00-18:30"` → `"18:00"`), the value orders carry
    /// as `delivery_time`.
    pub fn start(&self) -> &str {
        self.time_range
            .split_once('-')
            .map_or(self.time_range.as_str(), |(start, _)| start)
    }
}

/// Generate the selectable slots for `day` given the current wall-clock time.
///
/// For today the first slot starts at `max(current hour + 1, OPENING_HOUR)`;
/// once that floor passes the last start (22:30) the list is empty.
pub fn generate_slots(day: DeliveryDay, now: NaiveTime) -> Vec<DeliverySlot> {
    let start_hour = match day {
        DeliveryDay::Today => (now.hour() + 1).max(OPENING_HOUR),
        DeliveryDay::Tomorrow => OPENING_HOUR,
    };

    let mut slots = Vec::new();
    for hour in start_hour..CLOSING_HOUR {
        for minute in [0, 30] {
            let (end_hour, end_minute) = if minute == 30 {
                (hour + 1, 0)
            } else {
                (hour, 30)
            };
            slots.push(DeliverySlot::new(
                format!("{hour:02}:{minute:02}-{end_hour:02}:{end_minute:02}"),
                day,
            ));
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn morning_slots_start_at_opening() {
        let slots = generate_slots(DeliveryDay::Today, at(9, 0));
        assert_eq!(slots.first().unwrap().time_range, "10:00-10:30");
    }

    #[test]
    fn afternoon_slots_start_after_current_hour() {
        let slots = generate_slots(DeliveryDay::Today, at(17, 20));
        assert_eq!(slots.first().unwrap().time_range, "18:00-18:30");
    }

    #[test]
    fn late_evening_has_no_slots() {
        assert!(generate_slots(DeliveryDay::Today, at(22, 45)).is_empty());
        assert!(generate_slots(DeliveryDay::Today, at(23, 0)).is_empty());
    }

    #[test]
    fn last_slot_ends_at_closing() {
        let slots = generate_slots(DeliveryDay::Tomorrow, at(12, 0));
        assert_eq!(slots.last().unwrap().time_range, "22:30-23:00");
    }

    #[test]
    fn tomorrow_ignores_current_time() {
        let slots = generate_slots(DeliveryDay::Tomorrow, at(22, 45));
        assert_eq!(slots.len(), 26);
        assert_eq!(slots.first().unwrap().time_range, "10:00-10:30");
    }

    #[test]
    fn slot_ids_are_day_scoped() {
        let today = DeliverySlot::new("18:00-18:30", DeliveryDay::Today);
        let tomorrow = DeliverySlot::new("18:00-18:30", DeliveryDay::Tomorrow);
        assert_eq!(today.id, "today-18:00-18:30");
        assert_ne!(today.id, tomorrow.id);
    }

    #[test]
    fn slot_start_is_range_prefix() {
        let slot = DeliverySlot::new("18:00-18:30", DeliveryDay::Today);
        assert_eq!(slot.start(), "18:00");
    }
}
