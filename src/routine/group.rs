use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use serde::Serialize;

use crate::format::format_range_12h;
use crate::models::RoutineEntry;
use crate::routine::{DayOrder, sort_entries};

/// Consecutive entries sharing one (day, time_range). The admin table merges
/// the day and time cells of a group while still printing one row per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowGroup {
    pub day: String,
    pub time_range: String,
    pub time_label: String,
    pub entries: Vec<RoutineEntry>,
}

impl RowGroup {
    pub fn row_span(&self) -> usize {
        self.entries.len()
    }
}

/// Groups an already sorted slice. Only adjacent entries are merged.
pub fn group_rows(sorted: &[RoutineEntry]) -> Vec<RowGroup> {
    let mut groups: Vec<RowGroup> = Vec::new();

    for entry in sorted {
        match groups.last_mut() {
            Some(group) if group.day == entry.day && group.time_range == entry.time_range => {
                group.entries.push(entry.clone());
            }
            _ => groups.push(RowGroup {
                day: entry.day.clone(),
                time_range: entry.time_range.clone(),
                time_label: format_range_12h(&entry.time_range),
                entries: vec![entry.clone()],
            }),
        }
    }

    groups
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCell {
    pub time_range: String,
    pub entries: Vec<RoutineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomRow {
    pub room: String,
    pub slots: Vec<SlotCell>,
}

impl RoomRow {
    pub fn slot(&self, time_range: &str) -> Option<&SlotCell> {
        self.slots.iter().find(|s| s.time_range == time_range)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGrid {
    pub day: String,
    pub rooms: Vec<RoomRow>,
}

impl DayGrid {
    pub fn room(&self, room: &str) -> Option<&RoomRow> {
        self.rooms.iter().find(|r| r.room == room)
    }
}

/// Nested day -> room -> time slot grouping for the public grid.
///
/// Days follow the configured day order, rooms sort naturally, and slots
/// follow their start time. A room only appears under a day when it has at
/// least one entry on that day. Entries sharing a cell are all kept, in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimetableGrid {
    days: Vec<DayGrid>,
}

impl TimetableGrid {
    pub fn build(entries: &[RoutineEntry], days: &DayOrder) -> Self {
        let mut grid: Vec<DayGrid> = Vec::new();

        for entry in sort_entries(entries, days) {
            let day_idx = match grid.iter().position(|d| d.day == entry.day) {
                Some(idx) => idx,
                None => {
                    grid.push(DayGrid {
                        day: entry.day.clone(),
                        rooms: Vec::new(),
                    });
                    grid.len() - 1
                }
            };
            let rooms = &mut grid[day_idx].rooms;

            let room_idx = match rooms.iter().position(|r| r.room == entry.room) {
                Some(idx) => idx,
                None => {
                    rooms.push(RoomRow {
                        room: entry.room.clone(),
                        slots: Vec::new(),
                    });
                    rooms.len() - 1
                }
            };
            let slots = &mut rooms[room_idx].slots;

            match slots.iter_mut().find(|s| s.time_range == entry.time_range) {
                Some(slot) => slot.entries.push(entry),
                None => slots.push(SlotCell {
                    time_range: entry.time_range.clone(),
                    entries: vec![entry],
                }),
            }
        }

        for day in &mut grid {
            day.rooms.sort_by(|a, b| natural_cmp(&a.room, &b.room));
        }

        Self { days: grid }
    }

    pub fn days(&self) -> &[DayGrid] {
        &self.days
    }

    pub fn day(&self, day: &str) -> Option<&DayGrid> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn entries_at(&self, day: &str, room: &str, time_range: &str) -> Option<&[RoutineEntry]> {
        self.day(day)?
            .room(room)?
            .slot(time_range)
            .map(|slot| slot.entries.as_slice())
    }

    pub fn total_entries(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.rooms)
            .flat_map(|r| &r.slots)
            .map(|s| s.entries.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Numeric-aware, case-insensitive ordering: `"2" < "10"`, `"Lab-2" < "lab-10"`.
/// Strings that compare equal that way fall back to byte order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ord = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let n = take_digits(&mut left);
                let m = take_digits(&mut right);
                let (n, m) = (n.trim_start_matches('0'), m.trim_start_matches('0'));
                n.len().cmp(&m.len()).then_with(|| n.cmp(m))
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                x.to_lowercase().cmp(y.to_lowercase())
            }
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }
    digits
}
