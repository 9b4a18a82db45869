//! View/edit/delete state machine over one stored [`TeamRecord`].
//!
//! `Viewing --edit--> Editing` stages a working copy. Field changes only touch
//! that copy; `cancel` drops it and `save` writes it back over the stored
//! record with the same id. Deletion is independent of the edit mode and needs
//! an explicit confirmation step.

use crate::answers::{FieldKey, FieldValue};
use crate::catalog;
use crate::error::{Result, TeamHubError};
use crate::nav::NavRequest;
use crate::outcome::{Effect, Outcome, Refusal};
use crate::record::TeamRecord;
use crate::store::RecordStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    Viewing,
    Editing,
}

/// One labelled field of the sectioned detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub key: FieldKey,
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: &'static str,
    pub fields: Vec<DetailField>,
}

#[derive(Debug, Clone)]
pub struct RecordEditor {
    original: TeamRecord,
    working: Option<TeamRecord>,
    delete_pending: bool,
}

impl RecordEditor {
    /// Open the record with `id`. Fails with `RecordNotFound` when it is gone.
    pub fn open<S: RecordStore + ?Sized>(store: &S, id: &str) -> Result<Self> {
        Ok(Self::from_record(store.get(id)?))
    }

    pub fn from_record(record: TeamRecord) -> Self {
        Self {
            original: record,
            working: None,
            delete_pending: false,
        }
    }

    pub fn mode(&self) -> EditorMode {
        if self.working.is_some() {
            EditorMode::Editing
        } else {
            EditorMode::Viewing
        }
    }

    /// The record as last loaded or saved.
    pub fn original(&self) -> &TeamRecord {
        &self.original
    }

    /// What the view shows: the working copy while editing.
    pub fn current(&self) -> &TeamRecord {
        self.working.as_ref().unwrap_or(&self.original)
    }

    pub fn is_delete_pending(&self) -> bool {
        self.delete_pending
    }

    pub fn sections(&self) -> Vec<DetailSection> {
        let record = self.current();
        catalog::groups()
            .into_iter()
            .map(|(title, keys)| DetailSection {
                title,
                fields: keys
                    .into_iter()
                    .map(|key| DetailField {
                        key,
                        label: catalog::label(key),
                        value: record.get(key),
                    })
                    .collect(),
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Edit mode
    // -----------------------------------------------------------------------

    pub fn edit(&mut self) -> Outcome {
        if self.working.is_some() {
            return Outcome::Refused(Refusal::NotOffered);
        }
        self.working = Some(self.original.clone());
        Outcome::done()
    }

    /// Replace one field of the working copy. A value of the wrong shape for
    /// `key` is a caller bug and comes back as `FieldShapeMismatch`; a value
    /// outside a select question's options is `UnknownOption`.
    pub fn field_change(&mut self, key: FieldKey, value: FieldValue) -> Result<Outcome> {
        let Some(working) = self.working.as_mut() else {
            return Ok(Outcome::Refused(Refusal::NotOffered));
        };
        match &value {
            FieldValue::Text(v) => check_option(key, v)?,
            FieldValue::Many(vs) => vs.iter().try_for_each(|v| check_option(key, v))?,
        }
        working.set(key, value)?;
        Ok(Outcome::done())
    }

    /// Check or uncheck one value of a multi-valued field in the working copy.
    pub fn toggle(&mut self, key: FieldKey, value: &str, checked: bool) -> Result<Outcome> {
        let Some(working) = self.working.as_mut() else {
            return Ok(Outcome::Refused(Refusal::NotOffered));
        };
        if checked {
            check_option(key, value)?;
        }
        working.answers.toggle(key, value, checked)?;
        Ok(Outcome::done())
    }

    pub fn cancel(&mut self) -> Outcome {
        if self.working.take().is_none() {
            return Outcome::Refused(Refusal::NotOffered);
        }
        Outcome::done()
    }

    /// Write the working copy over the stored record and leave edit mode.
    /// On a failed write the editor stays in edit mode with the copy intact.
    pub fn save<S: RecordStore + ?Sized>(&mut self, store: &mut S) -> Result<Outcome> {
        let Some(working) = self.working.as_ref() else {
            return Ok(Outcome::Refused(Refusal::NotOffered));
        };
        store.update(working.clone())?;
        tracing::info!(id = %working.id, "team saved");

        if let Some(working) = self.working.take() {
            self.original = working;
        }
        Ok(Outcome::Applied(vec![Effect::RecordSaved {
            id: self.original.id.clone(),
        }]))
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    pub fn request_delete(&mut self) -> Outcome {
        self.delete_pending = true;
        Outcome::done()
    }

    pub fn dismiss_delete(&mut self) -> Outcome {
        if !self.delete_pending {
            return Outcome::Refused(Refusal::NotOffered);
        }
        self.delete_pending = false;
        Outcome::done()
    }

    /// Remove the record from `store`. Only offered after `request_delete`.
    pub fn confirm_delete<S: RecordStore + ?Sized>(&mut self, store: &mut S) -> Result<Outcome> {
        if !self.delete_pending {
            return Ok(Outcome::Refused(Refusal::NotOffered));
        }
        let id = self.original.id.clone();
        store.delete(&id)?;
        tracing::info!(%id, "team deleted");

        self.delete_pending = false;
        self.working = None;
        Ok(Outcome::Applied(vec![
            Effect::RecordDeleted { id },
            Effect::Navigate(NavRequest::Listing),
        ]))
    }
}

/// Blank clears a field and is always allowed. Free-text questions take
/// anything.
fn check_option(key: FieldKey, value: &str) -> Result<()> {
    let Some(q) = catalog::lookup(key) else {
        return Ok(());
    };
    if value.is_empty() || q.options.is_empty() || q.option(value).is_some() {
        return Ok(());
    }
    Err(TeamHubError::UnknownOption {
        key: key.to_string(),
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
