//! Background grid builds for UI callers.
//!
//! The UI thread hands over an immutable entry list, keeps drawing the last
//! published grid, and polls for the next one. A newer request supersedes an
//! older one: results of abandoned builds are dropped with their channel.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::engine::{BuildOutcome, TimetableEngine};
use crate::models::schedule_entry::ScheduleEntry;

pub struct GridBuildWorker {
    engine: TimetableEngine,
    pending: Option<Receiver<BuildOutcome>>,
}

impl GridBuildWorker {
    pub fn new(engine: TimetableEngine) -> Self {
        Self {
            engine,
            pending: None,
        }
    }

    pub fn engine(&self) -> &TimetableEngine {
        &self.engine
    }

    pub fn is_building(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a build on a worker thread, abandoning any build in flight.
    pub fn request(&mut self, entries: Arc<[ScheduleEntry]>, merge: bool) {
        let engine = self.engine.clone();
        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);

        thread::spawn(move || {
            let outcome = engine.build(&entries, merge);
            // The receiver is gone if a newer request replaced this one.
            let _ = tx.send(outcome);
        });
    }

    /// Non-blocking check for the requested grid.
    pub fn poll(&mut self) -> Option<BuildOutcome> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("Timetable build worker exited without a result");
                self.pending = None;
                None
            }
        }
    }

    /// Block until the requested grid is ready.
    pub fn wait(&mut self) -> Option<BuildOutcome> {
        let rx = self.pending.take()?;
        match rx.recv() {
            Ok(outcome) => Some(outcome),
            Err(_) => {
                log::error!("Timetable build worker exited without a result");
                None
            }
        }
    }
}
