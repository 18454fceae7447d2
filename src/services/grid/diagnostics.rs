use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why an entry was left off the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// A real weekday that the current view does not show (day view).
    #[error("day '{day}' is not shown in this view")]
    OutsideView { day: String },
    #[error("'{day}' is not a day of the week")]
    UnknownDay { day: String },
    #[error("start slot '{label}' is not on the time axis")]
    UnknownStartLabel { label: String },
    #[error("end slot '{label}' is not on the time axis")]
    UnknownEndLabel { label: String },
    #[error("slot range '{start}' to '{end}' is empty or inverted")]
    EmptyOrInvertedRange { start: String, end: String },
}

impl SkipReason {
    /// Filtering by view is expected; everything else points at bad data.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, SkipReason::OutsideView { .. })
    }
}

/// Something a build noticed while placing entries. None of these abort the
/// build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementDiagnostic {
    Skipped { entry_id: i64, reason: SkipReason },
    /// A later entry overwrote a slot already held by a different entry.
    Overlap {
        row: usize,
        col: usize,
        replaced_entry_id: i64,
        by_entry_id: i64,
    },
}

impl fmt::Display for PlacementDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementDiagnostic::Skipped { entry_id, reason } => {
                write!(f, "schedule {} skipped: {}", entry_id, reason)
            }
            PlacementDiagnostic::Overlap {
                row,
                col,
                replaced_entry_id,
                by_entry_id,
            } => write!(
                f,
                "schedule {} overwrote schedule {} at row {}, column {}",
                by_entry_id, replaced_entry_id, row, col
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_view_is_not_malformed() {
        let filtered = SkipReason::OutsideView {
            day: "Tuesday".into(),
        };
        assert!(!filtered.is_malformed());
        assert!(SkipReason::UnknownDay { day: "Blursday".into() }.is_malformed());
    }

    #[test]
    fn test_display_messages() {
        let skipped = PlacementDiagnostic::Skipped {
            entry_id: 4,
            reason: SkipReason::EmptyOrInvertedRange {
                start: "9:00 AM".into(),
                end: "8:00 AM".into(),
            },
        };
        assert_eq!(
            skipped.to_string(),
            "schedule 4 skipped: slot range '9:00 AM' to '8:00 AM' is empty or inverted"
        );

        let overlap = PlacementDiagnostic::Overlap {
            row: 2,
            col: 1,
            replaced_entry_id: 1,
            by_entry_id: 2,
        };
        assert_eq!(
            overlap.to_string(),
            "schedule 2 overwrote schedule 1 at row 2, column 1"
        );
    }
}
