// Grid module
// Renderable timetable snapshot: a contiguous arena of cells indexed row-major

use serde::Serialize;

use crate::models::axis::{DayAxis, TimeAxis};
use crate::models::schedule_entry::EntryContent;

/// One slot of a placed schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupiedCell {
    pub entry_id: i64,
    pub content: EntryContent,
    pub day: String,
    /// The slot label of this cell's own row, not the entry's start.
    pub time_label: String,
    /// Rows covered when drawn; greater than 1 only on the head of a merge run.
    pub span_rows: usize,
    /// Continuation rows of a merge run are hidden but keep their content.
    pub hidden: bool,
}

impl OccupiedCell {
    pub fn is_merge_head(&self) -> bool {
        !self.hidden && self.span_rows > 1
    }

    pub fn display_text(&self) -> String {
        self.content.display_text()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    /// Row 0 only; the corner carries empty text.
    Header { text: String },
    /// Column 0 only, one per slot row.
    TimeLabel { label: String },
    Empty,
    Occupied(OccupiedCell),
}

impl GridCell {
    pub fn as_occupied(&self) -> Option<&OccupiedCell> {
        match self {
            GridCell::Occupied(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, GridCell::Occupied(_))
    }

    pub fn is_empty_slot(&self) -> bool {
        matches!(self, GridCell::Empty)
    }

    /// False only for hidden continuation cells of a merge run.
    pub fn is_rendered(&self) -> bool {
        !matches!(self, GridCell::Occupied(cell) if cell.hidden)
    }
}

/// A `(times + 1) × (days + 1)` timetable.
///
/// Cells live in one vector addressed by `row * width + col`. A grid is
/// built wholesale for each render pass and then treated as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    time_axis: TimeAxis,
    day_axis: DayAxis,
    width: usize,
    height: usize,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Assemble a grid from its axes and a full row-major cell vector.
    pub(crate) fn from_parts(time_axis: TimeAxis, day_axis: DayAxis, cells: Vec<GridCell>) -> Self {
        let width = day_axis.len() + 1;
        let height = time_axis.len() + 1;
        debug_assert_eq!(cells.len(), width * height);
        Self {
            time_axis,
            day_axis,
            width,
            height,
            cells,
        }
    }

    /// Number of columns, including the time-label column.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, including the header row.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    pub fn day_axis(&self) -> &DayAxis {
        &self.day_axis
    }

    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut GridCell> {
        self.index(row, col).map(move |idx| &mut self.cells[idx])
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: GridCell) -> Option<GridCell> {
        self.get_mut(row, col)
            .map(|slot| std::mem::replace(slot, cell))
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> Option<&[GridCell]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Cells of one column from the first slot row down (header excluded).
    pub fn column_slots(&self, col: usize) -> impl Iterator<Item = &GridCell> + '_ {
        (1..self.height).filter_map(move |row| self.get(row, col))
    }

    pub fn occupied_count_in_column(&self, col: usize) -> usize {
        self.column_slots(col).filter(|cell| cell.is_occupied()).count()
    }

    /// Ids of every entry that has at least one cell on the grid.
    pub fn placed_entry_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .cells
            .iter()
            .filter_map(GridCell::as_occupied)
            .map(|cell| cell.entry_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
