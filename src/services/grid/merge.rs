//! Merge analysis for the roster views.
//!
//! Consecutive slots in a column that show the same subject, section and
//! teacher are drawn as one tall block. The head cell gets the span and the
//! rows below it are hidden.

use serde::Serialize;

use crate::models::grid::{Grid, GridCell};

/// A maximal run of occupied rows in one column. Runs of free or unique
/// cells have length 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeRun {
    pub col: usize,
    pub start_row: usize,
    pub len: usize,
}

impl MergeRun {
    /// Rows covered by the run, end exclusive.
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.start_row..self.start_row + self.len
    }
}

fn fingerprint(grid: &Grid, row: usize, col: usize) -> Option<(&str, &str, &str)> {
    grid.get(row, col)
        .and_then(GridCell::as_occupied)
        .and_then(|cell| cell.content.fingerprint())
}

/// Partition every column's occupied rows into merge runs.
pub fn find_merge_runs(grid: &Grid) -> Vec<MergeRun> {
    let mut runs = Vec::new();

    for col in 1..grid.width() {
        let mut row = 1;
        while row < grid.height() {
            let occupied = grid.get(row, col).is_some_and(GridCell::is_occupied);
            if !occupied {
                row += 1;
                continue;
            }

            let mut len = 1;
            if let Some(head) = fingerprint(grid, row, col) {
                while row + len < grid.height()
                    && fingerprint(grid, row + len, col) == Some(head)
                {
                    len += 1;
                }
            }

            runs.push(MergeRun {
                col,
                start_row: row,
                len,
            });
            row += len;
        }
    }

    runs
}

/// Annotate a placed grid with spans and hidden flags.
///
/// Any previous annotation is cleared first, so running this on an already
/// merged grid gives the same result as running it once.
pub fn compute_merge_runs(mut grid: Grid) -> Grid {
    for row in 1..grid.height() {
        for col in 1..grid.width() {
            if let Some(GridCell::Occupied(cell)) = grid.get_mut(row, col) {
                cell.span_rows = 1;
                cell.hidden = false;
            }
        }
    }

    let runs = find_merge_runs(&grid);
    for run in runs.iter().filter(|run| run.len > 1) {
        for row in run.rows() {
            if let Some(GridCell::Occupied(cell)) = grid.get_mut(row, run.col) {
                if row == run.start_row {
                    cell.span_rows = run.len;
                } else {
                    cell.hidden = true;
                }
            }
        }
    }

    log::debug!(
        "merged {} runs across {} columns",
        runs.iter().filter(|run| run.len > 1).count(),
        grid.width() - 1
    );
    grid
}
