use serde::Serialize;

use super::{AxisError, ConfigError};
use crate::utils::date::{abbreviate_day, canonical_day_name, WEEK_DAYS};

/// Ordered day columns: either one selected day or a run of week days.
///
/// Days are stored by their canonical English name, so lookups are
/// case-insensitive ("monday" finds "Monday").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAxis {
    days: Vec<&'static str>,
}

impl DayAxis {
    pub fn new<I, S>(days: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolved: Vec<&'static str> = Vec::new();
        for day in days {
            let name = day.as_ref();
            let canonical =
                canonical_day_name(name).ok_or_else(|| ConfigError::UnknownDay(name.to_string()))?;
            if resolved.contains(&canonical) {
                return Err(ConfigError::DuplicateLabel(canonical.to_string()));
            }
            resolved.push(canonical);
        }

        if resolved.is_empty() {
            return Err(ConfigError::EmptyDayAxis);
        }

        Ok(Self { days: resolved })
    }

    /// Monday through Sunday.
    pub fn week() -> Self {
        Self {
            days: WEEK_DAYS.to_vec(),
        }
    }

    /// A single-day axis. Entries for any other day fall off the grid.
    pub fn single(day: &str) -> Result<Self, ConfigError> {
        Self::new([day])
    }

    pub fn is_single_day(&self) -> bool {
        self.days.len() == 1
    }

    pub fn index_of(&self, day: &str) -> Result<usize, AxisError> {
        canonical_day_name(day)
            .and_then(|canonical| self.days.iter().position(|d| *d == canonical))
            .ok_or_else(|| AxisError::NotFound(day.to_string()))
    }

    pub fn label_at(&self, index: usize) -> Result<&str, AxisError> {
        self.days.get(index).copied().ok_or(AxisError::OutOfRange {
            index,
            len: self.days.len(),
        })
    }

    /// Column header text: "MON" style in multi-day views, the full
    /// uppercase name when only one day is shown.
    pub fn header_at(&self, index: usize) -> Result<String, AxisError> {
        let day = self.label_at(index)?;
        Ok(if self.is_single_day() {
            day.to_uppercase()
        } else {
            abbreviate_day(day)
        })
    }

    pub fn days(&self) -> &[&'static str] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
