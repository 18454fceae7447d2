//! Timetable grid engine.
//!
//! Builds a renderable day or week grid from schedule entries:
//! `builder` lays out the skeleton and places entries, `merge` collapses
//! repeated slots for the roster views, `router` maps clicks back to entries,
//! and `engine` ties the steps together behind one call.

pub mod builder;
pub mod diagnostics;
pub mod engine;
pub mod merge;
pub mod router;
pub mod worker;

pub use builder::{build_skeleton, place, Placement};
pub use diagnostics::{PlacementDiagnostic, SkipReason};
pub use engine::{BuildOutcome, TimetableEngine};
pub use merge::{compute_merge_runs, find_merge_runs, MergeRun};
pub use router::{resolve_click, ClickResult, CreateRequest, EditRequest};
pub use worker::GridBuildWorker;
