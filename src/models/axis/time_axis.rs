use std::collections::HashMap;

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use super::{AxisError, ConfigError};
use crate::utils::date::{format_time_label, parse_time_label};

/// Ordered slot labels defining the grid rows, e.g. "7:00 AM" .. "7:00 PM".
#[derive(Debug, Clone, Serialize)]
pub struct TimeAxis {
    labels: Vec<String>,
    #[serde(skip)]
    by_label: HashMap<String, usize>,
    #[serde(skip)]
    by_time: HashMap<NaiveTime, usize>,
}

impl PartialEq for TimeAxis {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for TimeAxis {}

impl TimeAxis {
    /// Build an axis from caller-supplied labels.
    ///
    /// Labels must parse as times of day and be strictly increasing.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ConfigError::EmptyTimeAxis);
        }

        let mut times: Vec<NaiveTime> = Vec::with_capacity(labels.len());
        let mut by_label = HashMap::with_capacity(labels.len());
        let mut by_time = HashMap::with_capacity(labels.len());

        for (index, label) in labels.iter().enumerate() {
            let time = parse_time_label(label)
                .ok_or_else(|| ConfigError::InvalidTimeLabel(label.clone()))?;

            if by_label.insert(label.clone(), index).is_some() {
                return Err(ConfigError::DuplicateLabel(label.clone()));
            }
            if let Some(previous) = times.last() {
                if time <= *previous {
                    return Err(ConfigError::NotIncreasing {
                        previous: labels[index - 1].clone(),
                        label: label.clone(),
                    });
                }
            }
            by_time.insert(time, index);
            times.push(time);
        }

        Ok(Self {
            labels,
            by_label,
            by_time,
        })
    }

    /// Generate labels every `slot_minutes` from `start` to `end` inclusive.
    pub fn from_window(
        start: NaiveTime,
        end: NaiveTime,
        slot_minutes: u32,
    ) -> Result<Self, ConfigError> {
        if slot_minutes == 0 {
            return Err(ConfigError::ZeroSlotLength);
        }
        if end < start {
            return Err(ConfigError::InvertedWindow {
                start: format_time_label(start),
                end: format_time_label(end),
            });
        }

        let step = Duration::minutes(i64::from(slot_minutes));
        let mut labels = Vec::new();
        let mut current = start;
        loop {
            labels.push(format_time_label(current));
            let (next, wrapped) = current.overflowing_add_signed(step);
            if wrapped != 0 || next > end || next <= current {
                break;
            }
            current = next;
        }

        Self::new(labels)
    }

    /// The standard teaching day: every 30 minutes, 7:00 AM to 7:00 PM.
    pub fn school_day() -> Self {
        let start = NaiveTime::from_hms_opt(7, 0, 0).expect("valid start time");
        let end = NaiveTime::from_hms_opt(19, 0, 0).expect("valid end time");
        Self::from_window(start, end, 30).expect("school day window is valid")
    }

    /// Row index of a label.
    ///
    /// Exact matches hit the precomputed map; otherwise the label is parsed
    /// so that "07:00 AM" and "7:00 AM" resolve to the same slot.
    pub fn index_of(&self, label: &str) -> Result<usize, AxisError> {
        if let Some(index) = self.by_label.get(label) {
            return Ok(*index);
        }
        parse_time_label(label)
            .and_then(|time| self.by_time.get(&time).copied())
            .ok_or_else(|| AxisError::NotFound(label.to_string()))
    }

    pub fn label_at(&self, index: usize) -> Result<&str, AxisError> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(AxisError::OutOfRange {
                index,
                len: self.labels.len(),
            })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
