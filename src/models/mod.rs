// Module exports for models

pub mod axis;
pub mod grid;
pub mod schedule_entry;
pub mod settings;
pub mod ui;
