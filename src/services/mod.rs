// Service module exports

pub mod feed;
pub mod grid;
pub mod settings;
