use serde::Serialize;

use crate::models::RoutineEntry;

pub const CANONICAL_DAYS: [&str; 5] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

/// Ordering of teaching days. Days not listed rank after every listed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOrder {
    days: Vec<String>,
}

impl Default for DayOrder {
    fn default() -> Self {
        Self::new(CANONICAL_DAYS.iter().map(|d| d.to_string()))
    }
}

impl DayOrder {
    pub fn new(days: impl IntoIterator<Item = String>) -> Self {
        Self {
            days: days.into_iter().map(|d| d.trim().to_string()).collect(),
        }
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn rank(&self, day: &str) -> usize {
        let day = day.trim();
        self.days
            .iter()
            .position(|d| d == day)
            .unwrap_or(usize::MAX)
    }
}

/// `"HH:MM"` to minutes since midnight. `None` outside `00:00..=23:59`.
pub fn clock_minutes(hhmm: &str) -> Option<u32> {
    let (hours, minutes) = hhmm.trim().split_once(':')?;
    let hours = parse_digits(hours)?;
    let minutes = parse_digits(minutes)?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Start of a `"HH:MM-HH:MM"` range in minutes since midnight.
pub fn start_minutes(range: &str) -> Option<u32> {
    let (start, _) = range.split_once('-')?;
    clock_minutes(start)
}

fn parse_digits(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

pub fn sort_key(entry: &RoutineEntry, days: &DayOrder) -> (usize, u32) {
    (
        days.rank(&entry.day),
        start_minutes(&entry.time_range).unwrap_or(u32::MAX),
    )
}

/// Orders entries by day, then by slot start. Equal keys keep their input order.
pub fn sort_entries(entries: &[RoutineEntry], days: &DayOrder) -> Vec<RoutineEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| sort_key(entry, days));
    sorted
}
