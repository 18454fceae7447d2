// Schedule feed decoding
// Turns the schedule endpoint's JSON payload into entries for the grid engine

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::models::schedule_entry::ScheduleEntry;

/// `{ "success": true, "schedules": [...] }` as returned by the schedule store.
#[derive(Debug, Deserialize)]
struct FeedEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    schedules: Vec<ScheduleEntry>,
}

/// Decode a schedule feed.
///
/// The payload is either the envelope or, from cached exports, a bare array.
/// An envelope with `success: false` is an error carrying the server message.
pub fn parse_schedule_feed(json: &str) -> Result<Vec<ScheduleEntry>> {
    let value: Value = serde_json::from_str(json).context("Schedule feed is not valid JSON")?;

    if value.is_array() {
        return serde_json::from_value(value).context("Failed to decode schedule list");
    }

    let envelope: FeedEnvelope =
        serde_json::from_value(value).context("Failed to decode schedule feed")?;
    if envelope.success {
        Ok(envelope.schedules)
    } else {
        Err(anyhow!(
            "Schedule feed reported failure: {}",
            envelope
                .message
                .unwrap_or_else(|| "no schedules found".to_string())
        ))
    }
}

pub fn load_schedule_feed(path: &Path) -> Result<Vec<ScheduleEntry>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule feed from {}", path.display()))?;
    let entries = parse_schedule_feed(&data)
        .with_context(|| format!("invalid schedule feed in {}", path.display()))?;
    log::info!("Loaded {} schedule entries from {}", entries.len(), path.display());
    Ok(entries)
}
