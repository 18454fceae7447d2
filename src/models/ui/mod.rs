// UI models module
// View modes the timetable screens switch between

use serde::{Deserialize, Serialize};

/// View names as stored in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Week,
    Day,
    Room,
}

/// Which timetable screen is being rendered.
///
/// The roster screens (week and day) collapse repeated slots into merged
/// blocks; the per-room timetable draws every slot on its own so each one can
/// be clicked individually.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Week,
    /// A single day; `None` means "today".
    Day(Option<String>),
    Room,
}

impl ViewMode {
    pub fn from_kind(kind: ViewKind, day: Option<String>) -> Self {
        match kind {
            ViewKind::Week => ViewMode::Week,
            ViewKind::Day => ViewMode::Day(day),
            ViewKind::Room => ViewMode::Room,
        }
    }

    pub fn merges(&self) -> bool {
        match self {
            ViewMode::Week | ViewMode::Day(_) => true,
            ViewMode::Room => false,
        }
    }

    pub fn is_single_day(&self) -> bool {
        matches!(self, ViewMode::Day(_))
    }
}
