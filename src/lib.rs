// Classroom Timetable Library
// Grid engine, settings and schedule feed decoding

pub mod models;
pub mod services;
pub mod utils;

pub use models::axis::{AxisError, ConfigError, DayAxis, TimeAxis};
pub use models::grid::{Grid, GridCell, OccupiedCell};
pub use models::schedule_entry::{EntryContent, ScheduleEntry};
pub use services::grid::{BuildOutcome, ClickResult, TimetableEngine};
