// Settings module
// Timetable window and default view, persisted as TOML

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::axis::{ConfigError, DayAxis, TimeAxis};
use crate::models::ui::{ViewKind, ViewMode};
use crate::utils::date::{current_day_name, parse_time_label, WEEK_DAYS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// First slot of the day, "07:00" or "7:00 AM"
    pub start_time: String,
    /// Last slot boundary (inclusive)
    pub end_time: String,
    pub slot_minutes: u32,
    /// Days shown by the week and room views, in display order
    pub week_days: Vec<String>,
    pub default_view: ViewKind,
    /// Fixed day for day view; unset means today
    pub day: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_time: "07:00".to_string(),
            end_time: "19:00".to_string(),
            slot_minutes: 30,
            week_days: WEEK_DAYS.iter().map(|d| d.to_string()).collect(),
            default_view: ViewKind::Week,
            day: None,
        }
    }
}

impl Settings {
    /// The view selected when nothing else is requested.
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_kind(self.default_view, self.day.clone())
    }

    fn parse_bound(value: &str) -> Result<NaiveTime, ConfigError> {
        parse_time_label(value).ok_or_else(|| ConfigError::InvalidTimeLabel(value.to_string()))
    }

    /// Slot rows for every view.
    pub fn time_axis(&self) -> Result<TimeAxis, ConfigError> {
        let start = Self::parse_bound(&self.start_time)?;
        let end = Self::parse_bound(&self.end_time)?;
        TimeAxis::from_window(start, end, self.slot_minutes)
    }

    /// Day columns for a view. Day view without an explicit day uses today.
    pub fn day_axis(&self, view: &ViewMode) -> Result<DayAxis, ConfigError> {
        match view {
            ViewMode::Week | ViewMode::Room => DayAxis::new(&self.week_days),
            ViewMode::Day(Some(day)) => DayAxis::single(day),
            ViewMode::Day(None) => DayAxis::single(current_day_name()),
        }
    }

    /// Validate everything that would otherwise fail at build time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.time_axis()?;
        self.day_axis(&ViewMode::Week)?;
        if let Some(day) = &self.day {
            DayAxis::single(day)?;
        }
        Ok(())
    }
}
