//! Week-order mapping for schedule day labels.
//!
//! Day of week is persisted as free text for file compatibility. This module
//! is the only place that interprets those labels.
//!
//! # Invariants
//! - Monday..Sunday map to 1..7; any unrecognized label maps to 8.
//! - Both the canonical English labels and the legacy Russian labels written
//!   by earlier releases are recognized.

use chrono::Weekday;

/// Order value for labels that are not a known weekday.
pub const UNKNOWN_DAY_ORDER: u8 = 8;

const WEEK: [(Weekday, &str, &str); 7] = [
    (Weekday::Mon, "Monday", "Понедельник"),
    (Weekday::Tue, "Tuesday", "Вторник"),
    (Weekday::Wed, "Wednesday", "Среда"),
    (Weekday::Thu, "Thursday", "Четверг"),
    (Weekday::Fri, "Friday", "Пятница"),
    (Weekday::Sat, "Saturday", "Суббота"),
    (Weekday::Sun, "Sunday", "Воскресенье"),
];

/// Resolves a stored label to a weekday, if it is one.
pub fn parse_day(label: &str) -> Option<Weekday> {
    let label = label.trim();
    WEEK.iter()
        .find(|(_, canonical, legacy)| *canonical == label || *legacy == label)
        .map(|(day, _, _)| *day)
}

/// Sort key for a stored day label.
pub fn day_order(label: &str) -> u8 {
    match parse_day(label) {
        // number_from_monday is 1..=7
        Some(day) => day.number_from_monday() as u8,
        None => UNKNOWN_DAY_ORDER,
    }
}

/// Canonical label written for new schedule items.
pub fn canonical_label(day: Weekday) -> &'static str {
    WEEK.iter()
        .find(|(candidate, _, _)| *candidate == day)
        .map_or("Monday", |(_, canonical, _)| *canonical)
}

/// Whether two stored labels name the same day.
///
/// Recognized labels compare by weekday so a legacy label matches its
/// English counterpart; anything else compares as trimmed text.
pub fn same_day(left: &str, right: &str) -> bool {
    match (parse_day(left), parse_day(right)) {
        (Some(a), Some(b)) => a == b,
        _ => left.trim() == right.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_label, day_order, same_day, UNKNOWN_DAY_ORDER};
    use chrono::Weekday;

    #[test]
    fn week_order_is_monday_first() {
        assert_eq!(day_order("Monday"), 1);
        assert_eq!(day_order("Wednesday"), 3);
        assert_eq!(day_order("Sunday"), 7);
        assert_eq!(day_order("Воскресенье"), 7);
    }

    #[test]
    fn unknown_labels_sort_last() {
        assert_eq!(day_order("Funday"), UNKNOWN_DAY_ORDER);
        assert_eq!(day_order(""), UNKNOWN_DAY_ORDER);
        assert_eq!(day_order("monday"), UNKNOWN_DAY_ORDER);
    }

    #[test]
    fn legacy_and_canonical_labels_are_the_same_day() {
        assert!(same_day("Понедельник", "Monday"));
        assert!(!same_day("Monday", "Tuesday"));
        assert!(same_day("Holiday", " Holiday "));
        assert_eq!(canonical_label(Weekday::Fri), "Friday");
    }
}
