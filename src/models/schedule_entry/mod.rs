// Schedule entry module
// Read-only class booking records handed to the grid engine

use serde::{Deserialize, Deserializer, Serialize};

/// Status assumed when the upstream record omits `schedule_status` or sends null.
pub const DEFAULT_STATUS: &str = "Pending";

/// Text shown in a free placeholder slot.
pub const FREE_TEXT: &str = "Free";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn status_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let status = Option::<String>::deserialize(deserializer)?;
    Ok(status.unwrap_or_else(default_status))
}

/// A single booked class: one subject/section/teacher on one day between two
/// slot labels.
///
/// Field names follow Rust conventions, but the upstream feed spelling
/// (`schedule_ID`, `day_name`, `time_start`, ...) is accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(alias = "schedule_ID", alias = "schedule_id")]
    pub id: i64,
    #[serde(alias = "day_name")]
    pub day: String,
    #[serde(alias = "time_start")]
    pub start_label: String,
    #[serde(alias = "time_end")]
    pub end_label: String,
    #[serde(alias = "subject_name")]
    pub subject: String,
    #[serde(alias = "section_name")]
    pub section: String,
    #[serde(alias = "teacher_name")]
    pub teacher: String,
    #[serde(
        alias = "schedule_status",
        default = "default_status",
        deserialize_with = "status_or_default"
    )]
    pub status: String,
}

/// The displayable part of an entry, copied into every cell it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryContent {
    pub subject: String,
    pub section: String,
    pub teacher: String,
    pub status: String,
}

impl EntryContent {
    /// True for placeholder content that marks a slot as explicitly free.
    pub fn is_free(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("free")
            || (self.subject.trim().is_empty()
                && self.section.trim().is_empty()
                && self.teacher.trim().is_empty())
    }

    /// Merge key of (subject, section, teacher); status is excluded.
    pub fn fingerprint(&self) -> Option<(&str, &str, &str)> {
        if self.is_free() {
            return None;
        }
        Some((
            self.subject.as_str(),
            self.section.as_str(),
            self.teacher.as_str(),
        ))
    }

    /// Multi-line text shown inside a class block, or "Free" for placeholders.
    pub fn display_text(&self) -> String {
        if self.is_free() {
            return FREE_TEXT.to_string();
        }
        [&self.subject, &self.section, &self.teacher]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ScheduleEntry {
    /// Create a builder for constructing entries field by field
    pub fn builder() -> ScheduleEntryBuilder {
        ScheduleEntryBuilder::new()
    }

    /// Content carried into each occupied cell.
    pub fn content(&self) -> EntryContent {
        EntryContent {
            subject: self.subject.clone(),
            section: self.section.clone(),
            teacher: self.teacher.clone(),
            status: self.status.clone(),
        }
    }
}

/// Builder for schedule entries, mostly used by tests and demo data.
#[derive(Default)]
pub struct ScheduleEntryBuilder {
    id: Option<i64>,
    day: Option<String>,
    start_label: Option<String>,
    end_label: Option<String>,
    subject: String,
    section: String,
    teacher: String,
    status: Option<String>,
}

impl ScheduleEntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    /// Set the start and end slot labels together
    pub fn slots(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_label = Some(start.into());
        self.end_label = Some(end.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = teacher.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Build the entry. Slot labels are not checked here; the grid builder
    /// decides whether they fit the configured axis.
    pub fn build(self) -> Result<ScheduleEntry, String> {
        let id = self.id.ok_or("Schedule entry id is required")?;
        let day = self.day.ok_or("Schedule entry day is required")?;
        let start_label = self.start_label.ok_or("Start slot label is required")?;
        let end_label = self.end_label.ok_or("End slot label is required")?;

        Ok(ScheduleEntry {
            id,
            day,
            start_label,
            end_label,
            subject: self.subject,
            section: self.section,
            teacher: self.teacher,
            status: self.status.unwrap_or_else(default_status),
        })
    }
}
