// Date utility functions
// Day-name and time-label helpers shared by the axes and settings

use chrono::{Datelike, Local, NaiveTime, Weekday};

/// Canonical week order used by the roster and room views.
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English name of a weekday, e.g. `Weekday::Mon` -> `"Monday"`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEK_DAYS[weekday.num_days_from_monday() as usize]
}

/// Name of the current local weekday. Day view defaults to this.
pub fn current_day_name() -> &'static str {
    weekday_name(Local::now().weekday())
}

/// Resolve a day name case-insensitively to its canonical spelling.
pub fn canonical_day_name(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    WEEK_DAYS
        .iter()
        .copied()
        .find(|day| day.eq_ignore_ascii_case(trimmed))
}

/// Three-letter uppercase abbreviation used in week headers ("MON").
pub fn abbreviate_day(name: &str) -> String {
    name.chars().take(3).collect::<String>().to_uppercase()
}

/// Format a time of day the way slot labels are displayed ("7:00 AM").
pub fn format_time_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Parse a displayed slot label ("7:00 AM", "12:30 PM") back into a time.
///
/// Also accepts 24-hour "HH:MM" so configuration files can use either form.
pub fn parse_time_label(label: &str) -> Option<NaiveTime> {
    let trimmed = label.trim();
    NaiveTime::parse_from_str(trimmed, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}
