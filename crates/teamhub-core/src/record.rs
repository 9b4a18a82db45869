use crate::answers::{AnswerSet, FieldKey, FieldValue};
use crate::error::{Result, TeamHubError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TeamRecord
// ---------------------------------------------------------------------------

/// A finalized team profile. `id` and `created_at` never change once set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub answers: AnswerSet,
    pub created_at: DateTime<Utc>,
}

impl TeamRecord {
    /// Build a record from one clock sample: `created_at` is `now`, the id is
    /// a fresh UUID.
    pub fn new(name: impl Into<String>, answers: AnswerSet, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            answers,
            created_at: now,
        }
    }

    pub fn get(&self, key: FieldKey) -> FieldValue {
        self.answers.get(key)
    }

    pub fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<()> {
        self.answers.set(key, value)
    }

    /// One-line card summary, e.g. `4–7 people | Remote`.
    pub fn summary(&self) -> String {
        format!(
            "{} people | {}",
            self.answers.team_size, self.answers.work_location
        )
    }
}

// ---------------------------------------------------------------------------
// Collection operations (operate on a Vec<TeamRecord>)
// ---------------------------------------------------------------------------

pub fn find<'a>(records: &'a [TeamRecord], id: &str) -> Result<&'a TeamRecord> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| TeamHubError::RecordNotFound(id.to_string()))
}

/// Replace the record whose id matches `record.id`, keeping its position.
pub fn replace(records: &mut [TeamRecord], record: TeamRecord) -> Result<()> {
    let slot = records
        .iter_mut()
        .find(|r| r.id == record.id)
        .ok_or_else(|| TeamHubError::RecordNotFound(record.id.clone()))?;
    *slot = record;
    Ok(())
}

/// Remove exactly one record by id; the rest keep their order.
pub fn remove(records: &mut Vec<TeamRecord>, id: &str) -> Result<TeamRecord> {
    let pos = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| TeamHubError::RecordNotFound(id.to_string()))?;
    Ok(records.remove(pos))
}

/// Listing order: newest `created_at` first. Ties keep insertion order.
pub fn newest_first(records: &[TeamRecord]) -> Vec<&TeamRecord> {
    let mut sorted: Vec<&TeamRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
