//! Grid skeleton construction and entry placement.

use super::diagnostics::{PlacementDiagnostic, SkipReason};
use crate::models::axis::{DayAxis, TimeAxis};
use crate::models::grid::{Grid, GridCell, OccupiedCell};
use crate::models::schedule_entry::ScheduleEntry;
use crate::utils::date::canonical_day_name;

/// Result of placing entries: the filled grid plus what was skipped or
/// overwritten along the way.
#[derive(Debug, Clone)]
pub struct Placement {
    pub grid: Grid,
    pub diagnostics: Vec<PlacementDiagnostic>,
}

/// Headers in row 0, time labels in column 0, every slot empty.
pub fn build_skeleton(time_axis: &TimeAxis, day_axis: &DayAxis) -> Grid {
    let width = day_axis.len() + 1;
    let height = time_axis.len() + 1;
    let mut cells = Vec::with_capacity(width * height);

    cells.push(GridCell::Header {
        text: String::new(),
    });
    for index in 0..day_axis.len() {
        let text = day_axis.header_at(index).unwrap_or_default();
        cells.push(GridCell::Header { text });
    }

    for label in time_axis.labels() {
        cells.push(GridCell::TimeLabel {
            label: label.clone(),
        });
        cells.extend(std::iter::repeat(GridCell::Empty).take(width - 1));
    }

    Grid::from_parts(time_axis.clone(), day_axis.clone(), cells)
}

/// Column and half-open row range an entry would occupy.
struct SlotRange {
    col: usize,
    start_row: usize,
    end_row: usize,
}

fn resolve_slot_range(grid: &Grid, entry: &ScheduleEntry) -> Result<SlotRange, SkipReason> {
    let col = match grid.day_axis().index_of(&entry.day) {
        Ok(index) => index + 1,
        Err(_) if canonical_day_name(&entry.day).is_some() => {
            return Err(SkipReason::OutsideView {
                day: entry.day.clone(),
            })
        }
        Err(_) => {
            return Err(SkipReason::UnknownDay {
                day: entry.day.clone(),
            })
        }
    };

    let time_axis = grid.time_axis();
    let start_row = time_axis
        .index_of(&entry.start_label)
        .map_err(|_| SkipReason::UnknownStartLabel {
            label: entry.start_label.clone(),
        })?;
    let end_row = time_axis
        .index_of(&entry.end_label)
        .map_err(|_| SkipReason::UnknownEndLabel {
            label: entry.end_label.clone(),
        })?;

    if start_row >= end_row {
        return Err(SkipReason::EmptyOrInvertedRange {
            start: entry.start_label.clone(),
            end: entry.end_label.clone(),
        });
    }

    Ok(SlotRange {
        col,
        start_row,
        end_row,
    })
}

/// Place entries in input order.
///
/// Each entry fills the slots from its start label up to, but not including,
/// its end label. A later entry overwrites an earlier one in the same slot.
pub fn place(mut grid: Grid, entries: &[ScheduleEntry]) -> Placement {
    let mut diagnostics = Vec::new();

    for entry in entries {
        let range = match resolve_slot_range(&grid, entry) {
            Ok(range) => range,
            Err(reason) => {
                diagnostics.push(PlacementDiagnostic::Skipped {
                    entry_id: entry.id,
                    reason,
                });
                continue;
            }
        };

        let day = grid
            .day_axis()
            .label_at(range.col - 1)
            .map(str::to_string)
            .unwrap_or_else(|_| entry.day.clone());
        let content = entry.content();

        for slot in range.start_row..range.end_row {
            let time_label = grid
                .time_axis()
                .label_at(slot)
                .map(str::to_string)
                .unwrap_or_default();
            let cell = GridCell::Occupied(OccupiedCell {
                entry_id: entry.id,
                content: content.clone(),
                day: day.clone(),
                time_label,
                span_rows: 1,
                hidden: false,
            });

            let row = slot + 1;
            if let Some(GridCell::Occupied(previous)) = grid.set(row, range.col, cell) {
                if previous.entry_id != entry.id {
                    diagnostics.push(PlacementDiagnostic::Overlap {
                        row,
                        col: range.col,
                        replaced_entry_id: previous.entry_id,
                        by_entry_id: entry.id,
                    });
                }
            }
        }
    }

    Placement { grid, diagnostics }
}
