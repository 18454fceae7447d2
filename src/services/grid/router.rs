//! Turns clicks on grid coordinates into edit or create requests.

use serde::Serialize;

use crate::models::grid::{Grid, GridCell};

/// Open the edit form for an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRequest {
    pub entry_id: i64,
    pub day: String,
    pub time_label: String,
    pub status: String,
}

/// Open the create form pre-filled with a free slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRequest {
    pub day: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClickResult {
    Edit(EditRequest),
    Create(CreateRequest),
    Ignored,
}

/// Resolve a click at `(row, col)`.
///
/// Occupied cells always edit their own entry, including hidden rows and the
/// head of a merged block. Empty cells take their day from the column and
/// their time from the row's label cell.
pub fn resolve_click(grid: &Grid, row: usize, col: usize) -> ClickResult {
    match grid.get(row, col) {
        Some(GridCell::Occupied(cell)) => ClickResult::Edit(EditRequest {
            entry_id: cell.entry_id,
            day: cell.day.clone(),
            time_label: cell.time_label.clone(),
            status: cell.content.status.clone(),
        }),
        Some(GridCell::Empty) => create_request(grid, row, col)
            .map(ClickResult::Create)
            .unwrap_or(ClickResult::Ignored),
        Some(GridCell::Header { .. }) | Some(GridCell::TimeLabel { .. }) | None => {
            ClickResult::Ignored
        }
    }
}

fn create_request(grid: &Grid, row: usize, col: usize) -> Option<CreateRequest> {
    let time_label = match grid.get(row, 0)? {
        GridCell::TimeLabel { label } => label.clone(),
        _ => return None,
    };
    let day = grid.day_axis().label_at(col.checked_sub(1)?).ok()?;

    Some(CreateRequest {
        day: day.to_string(),
        time_label,
    })
}
