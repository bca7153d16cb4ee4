//! Display helpers for 24-hour slot strings.

/// `"13:05"` -> `"01:05 PM"`. `None` when the input is not a valid clock time.
pub fn to_12_hour(hhmm: &str) -> Option<String> {
    let (hours, minutes) = hhmm.trim().split_once(':')?;
    let hours: u32 = digits(hours)?;
    let minutes: u32 = digits(minutes)?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    let suffix = if hours < 12 { "AM" } else { "PM" };
    Some(format!("{:02}:{:02} {}", ((hours + 11) % 12) + 1, minutes, suffix))
}

/// `"12:00-13:30"` -> `"12:00 PM - 01:30 PM"`.
///
/// Anything that is not two valid clock times around a `-` comes back unchanged.
pub fn format_range_12h(range: &str) -> String {
    let Some((start, end)) = range.split_once('-') else {
        return range.to_string();
    };

    match (to_12_hour(start), to_12_hour(end)) {
        (Some(start), Some(end)) => format!("{} - {}", start, end),
        _ => range.to_string(),
    }
}

fn digits(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
