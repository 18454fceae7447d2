use serde::Serialize;

use super::builder::{build_skeleton, place};
use super::diagnostics::PlacementDiagnostic;
use super::merge::compute_merge_runs;
use super::router::{resolve_click, ClickResult};
use crate::models::axis::{ConfigError, DayAxis, TimeAxis};
use crate::models::grid::Grid;
use crate::models::schedule_entry::ScheduleEntry;
use crate::models::settings::Settings;
use crate::models::ui::ViewMode;

/// A finished render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOutcome {
    pub grid: Grid,
    pub diagnostics: Vec<PlacementDiagnostic>,
}

impl BuildOutcome {
    /// Diagnostics for entries that look wrong, excluding view filtering.
    pub fn problems(&self) -> impl Iterator<Item = &PlacementDiagnostic> + '_ {
        self.diagnostics.iter().filter(|diagnostic| match diagnostic {
            PlacementDiagnostic::Skipped { reason, .. } => reason.is_malformed(),
            PlacementDiagnostic::Overlap { .. } => true,
        })
    }
}

/// Entry point for building timetable grids.
///
/// Holds the configured axes; every `build` produces a fresh grid and never
/// touches a previously returned one.
#[derive(Debug, Clone)]
pub struct TimetableEngine {
    time_axis: TimeAxis,
    day_axis: DayAxis,
}

impl TimetableEngine {
    pub fn new<T, D>(time_labels: T, days: D) -> Result<Self, ConfigError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Ok(Self {
            time_axis: TimeAxis::new(time_labels)?,
            day_axis: DayAxis::new(days)?,
        })
    }

    pub fn with_axes(time_axis: TimeAxis, day_axis: DayAxis) -> Self {
        Self {
            time_axis,
            day_axis,
        }
    }

    /// Engine for one of the standard views described by `settings`.
    pub fn for_view(settings: &Settings, view: &ViewMode) -> Result<Self, ConfigError> {
        Ok(Self::with_axes(settings.time_axis()?, settings.day_axis(view)?))
    }

    /// Replace both axes. On error the previous configuration is kept.
    pub fn configure<T, D>(&mut self, time_labels: T, days: D) -> Result<(), ConfigError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        *self = Self::new(time_labels, days)?;
        Ok(())
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    pub fn day_axis(&self) -> &DayAxis {
        &self.day_axis
    }

    pub fn skeleton(&self) -> Grid {
        build_skeleton(&self.time_axis, &self.day_axis)
    }

    /// Skeleton, placement and, when `merge` is set, merge analysis.
    pub fn build(&self, entries: &[ScheduleEntry], merge: bool) -> BuildOutcome {
        let placement = place(self.skeleton(), entries);
        let grid = if merge {
            compute_merge_runs(placement.grid)
        } else {
            placement.grid
        };

        let outcome = BuildOutcome {
            grid,
            diagnostics: placement.diagnostics,
        };
        for problem in outcome.problems() {
            log::warn!("{}", problem);
        }
        log::debug!(
            "built {}x{} timetable from {} entries ({} diagnostics, merge={})",
            outcome.grid.height(),
            outcome.grid.width(),
            entries.len(),
            outcome.diagnostics.len(),
            merge
        );
        outcome
    }

    /// Build with the merge policy that belongs to `view`.
    pub fn build_view(&self, entries: &[ScheduleEntry], view: &ViewMode) -> BuildOutcome {
        self.build(entries, view.merges())
    }

    pub fn resolve_click(&self, grid: &Grid, row: usize, col: usize) -> ClickResult {
        resolve_click(grid, row, col)
    }
}

impl Default for TimetableEngine {
    /// School day slots across the full week.
    fn default() -> Self {
        Self::with_axes(TimeAxis::school_day(), DayAxis::week())
    }
}
