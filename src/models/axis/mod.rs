//! Row and column axes of the timetable grid.
//!
//! A [`TimeAxis`] defines the slot rows and a [`DayAxis`] the day columns.
//! Both are immutable once built and answer label/index lookups in O(1).

use thiserror::Error;

mod day_axis;
mod time_axis;

pub use day_axis::DayAxis;
pub use time_axis::TimeAxis;

/// Lookup failures on an already-built axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxisError {
    #[error("label '{0}' is not on this axis")]
    NotFound(String),
    #[error("index {index} is out of range for an axis of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Invalid axis configuration. These are programmer errors and are reported
/// before any grid is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("time axis must contain at least one label")]
    EmptyTimeAxis,
    #[error("day axis must contain at least one day")]
    EmptyDayAxis,
    #[error("duplicate label '{0}'")]
    DuplicateLabel(String),
    #[error("'{0}' is not a valid time label")]
    InvalidTimeLabel(String),
    #[error("time label '{label}' does not come after '{previous}'")]
    NotIncreasing { previous: String, label: String },
    #[error("'{0}' is not a day of the week")]
    UnknownDay(String),
    #[error("slot length must be greater than zero minutes")]
    ZeroSlotLength,
    #[error("time window end {end} is before its start {start}")]
    InvertedWindow { start: String, end: String },
}
