// Test fixtures - reusable test data
// Provides consistent axes and schedule entries across test files

#![allow(dead_code)]

use classroom_timetable::models::schedule_entry::ScheduleEntry;

/// Axes used by the worked examples
pub mod axes {
    /// Four half-hour ticks from 7:00 AM
    pub fn early_morning() -> Vec<&'static str> {
        vec!["7:00 AM", "7:30 AM", "8:00 AM", "8:30 AM"]
    }

    pub fn monday_only() -> Vec<&'static str> {
        vec!["Monday"]
    }
}

/// Sample schedule entries
pub mod entries {
    use super::*;

    pub fn entry(
        id: i64,
        day: &str,
        start: &str,
        end: &str,
        subject: &str,
        section: &str,
        teacher: &str,
    ) -> ScheduleEntry {
        ScheduleEntry::builder()
            .id(id)
            .day(day)
            .slots(start, end)
            .subject(subject)
            .section(section)
            .teacher(teacher)
            .status("Occupied")
            .build()
            .unwrap()
    }

    /// CS101 on Monday, 7:00 AM until 8:30 AM
    pub fn cs101_monday() -> ScheduleEntry {
        entry(1, "Monday", "7:00 AM", "8:30 AM", "CS101", "A", "Cruz")
    }

    /// A realistic week for one room, including one bad record
    pub fn room_week() -> Vec<ScheduleEntry> {
        vec![
            entry(10, "Monday", "7:00 AM", "8:30 AM", "CS101", "BSCS-1A", "Cruz"),
            entry(11, "Monday", "8:30 AM", "10:00 AM", "MATH11", "BSCS-1A", "Santos"),
            entry(12, "Tuesday", "1:00 PM", "3:00 PM", "PHYS21", "BSIT-2B", "Reyes"),
            entry(13, "Wednesday", "7:00 AM", "8:30 AM", "CS101", "BSCS-1A", "Cruz"),
            entry(14, "Friday", "5:00 PM", "7:00 PM", "NSTP", "BSCS-1A", "Garcia"),
            entry(15, "Saturday", "9:00 AM", "8:00 AM", "BROKEN", "X", "Nobody"),
        ]
    }
}
