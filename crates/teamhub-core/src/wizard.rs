//! Step-by-step questionnaire that turns an [`AnswerSet`] into a persisted
//! [`TeamRecord`].
//!
//! The wizard walks `Intro -> Step(1..=N) -> FinalNaming -> Committed`, where
//! `N` is the catalog length. Forward moves are guarded: a step can only be
//! left with `next` once its field is answered, and the final commit needs a
//! non-blank name. `skip` always advances but wipes the step's answer first.
//!
//! Refused transitions do not raise errors. They return
//! [`Outcome::Refused`] and leave the wizard untouched so the caller can
//! render a disabled action instead.

use crate::answers::{AnswerSet, FieldValue};
use crate::catalog::{self, GroupProgress, Question, QuestionKind};
use crate::error::Result;
use crate::nav::NavRequest;
use crate::outcome::{Effect, Outcome, Refusal};
use crate::record::TeamRecord;
use crate::store::RecordStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// States and events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "step", rename_all = "snake_case")]
pub enum WizardState {
    Intro,
    /// 1-based catalog position.
    Step(usize),
    FinalNaming,
    Committed,
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardState::Intro => f.write_str("intro"),
            WizardState::Step(i) => write!(f, "step {i}"),
            WizardState::FinalNaming => f.write_str("final naming"),
            WizardState::Committed => f.write_str("committed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Start,
    Next,
    Skip,
    Back,
    /// Replace the answer of a free-text step.
    Text(String),
    /// Pick one option of a single-select step.
    Select(String),
    /// Check or uncheck one option of a multi-select step.
    Toggle { value: String, checked: bool },
    Name(String),
    Commit,
}

/// Overall position for the progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub label: String,
    pub percent: u32,
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    answers: AnswerSet,
    name: String,
    explanation: Option<&'static str>,
}

impl Wizard {
    /// Fresh wizard. `skip_intro` starts directly at the first question.
    pub fn new(skip_intro: bool) -> Self {
        Self {
            state: if skip_intro {
                WizardState::Step(1)
            } else {
                WizardState::Intro
            },
            answers: AnswerSet::new(),
            name: String::new(),
            explanation: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explanation of the most recently chosen option on this step.
    pub fn explanation(&self) -> Option<&'static str> {
        self.explanation
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            WizardState::Step(i) => catalog::step(i),
            _ => None,
        }
    }

    pub fn group_progress(&self) -> Option<GroupProgress> {
        match self.state {
            WizardState::Step(i) => catalog::group_progress(i),
            _ => None,
        }
    }

    pub fn progress(&self) -> Progress {
        let total = catalog::len();
        match self.state {
            WizardState::Intro => Progress {
                label: String::new(),
                percent: 0,
            },
            WizardState::Step(i) => Progress {
                label: format!("Step {i} of {total}"),
                percent: ((i - 1) * 100 / total) as u32,
            },
            WizardState::FinalNaming | WizardState::Committed => Progress {
                label: "Final Step".to_string(),
                percent: 100,
            },
        }
    }

    /// Whether `next` would currently be accepted.
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .map(|q| self.answers.is_answered(q.key))
            .unwrap_or(false)
    }

    /// Whether `commit` would currently be accepted.
    pub fn can_commit(&self) -> bool {
        self.state == WizardState::FinalNaming && !self.name.trim().is_empty()
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    pub fn start(&mut self) -> Outcome {
        if self.state != WizardState::Intro {
            return Outcome::Refused(Refusal::NotOffered);
        }
        self.move_to(WizardState::Step(1))
    }

    pub fn next(&mut self) -> Outcome {
        let WizardState::Step(i) = self.state else {
            return Outcome::Refused(Refusal::NotOffered);
        };
        if !self.can_advance() {
            return Outcome::Refused(Refusal::Unanswered);
        }
        self.move_to(Self::after(i))
    }

    pub fn skip(&mut self) -> Outcome {
        let (WizardState::Step(i), Some(q)) = (self.state, self.current_question()) else {
            return Outcome::Refused(Refusal::NotOffered);
        };
        self.answers.clear(q.key);
        self.move_to(Self::after(i))
    }

    pub fn back(&mut self) -> Outcome {
        match self.state {
            WizardState::Step(i) if i > 1 => self.move_to(WizardState::Step(i - 1)),
            WizardState::FinalNaming => self.move_to(WizardState::Step(catalog::len())),
            _ => Outcome::Refused(Refusal::NotOffered),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Outcome {
        let Some(q) = self.current_question() else {
            return Outcome::Refused(Refusal::NotOffered);
        };
        if q.kind != QuestionKind::Text {
            return Outcome::Refused(Refusal::WrongKind(q.kind));
        }
        self.write(q, FieldValue::Text(text.into()))
    }

    pub fn select(&mut self, value: &str) -> Outcome {
        let Some(q) = self.current_question() else {
            return Outcome::Refused(Refusal::NotOffered);
        };
        if q.kind != QuestionKind::SingleSelect {
            return Outcome::Refused(Refusal::WrongKind(q.kind));
        }
        let Some(option) = q.option(value) else {
            return Outcome::Refused(Refusal::UnknownOption(value.to_string()));
        };
        let outcome = self.write(q, FieldValue::Text(option.value.to_string()));
        self.explanation = Some(option.explanation);
        outcome
    }

    pub fn toggle(&mut self, value: &str, checked: bool) -> Outcome {
        let Some(q) = self.current_question() else {
            return Outcome::Refused(Refusal::NotOffered);
        };
        if q.kind != QuestionKind::MultiSelect {
            return Outcome::Refused(Refusal::WrongKind(q.kind));
        }
        let Some(option) = q.option(value) else {
            return Outcome::Refused(Refusal::UnknownOption(value.to_string()));
        };
        if self.answers.toggle(q.key, option.value, checked).is_err() {
            return Outcome::Refused(Refusal::WrongKind(q.kind));
        }
        self.explanation = checked.then_some(option.explanation);
        Outcome::done()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Outcome {
        if self.state != WizardState::FinalNaming {
            return Outcome::Refused(Refusal::NotOffered);
        }
        self.name = name.into();
        Outcome::done()
    }

    /// Commit using the current instant.
    pub fn commit<S: RecordStore + ?Sized>(&mut self, store: &mut S) -> Result<Outcome> {
        self.commit_at(store, Utc::now())
    }

    /// Append the finished record to `store`. `now` is the single clock
    /// sample used for the record's creation time.
    ///
    /// A failed write leaves the wizard in `FinalNaming` so the commit can be
    /// retried.
    pub fn commit_at<S: RecordStore + ?Sized>(
        &mut self,
        store: &mut S,
        now: DateTime<Utc>,
    ) -> Result<Outcome> {
        if self.state != WizardState::FinalNaming {
            return Ok(Outcome::Refused(Refusal::NotOffered));
        }
        if !self.can_commit() {
            return Ok(Outcome::Refused(Refusal::BlankName));
        }

        let record = TeamRecord::new(self.name.trim(), self.answers.clone(), now);
        let id = record.id.clone();
        store.add(record)?;
        tracing::info!(%id, name = self.name.trim(), "team created");

        self.state = WizardState::Committed;
        self.explanation = None;
        Ok(Outcome::Applied(vec![
            Effect::RecordAdded { id },
            Effect::Navigate(NavRequest::Listing),
        ]))
    }

    /// Dispatch one event.
    pub fn handle<S: RecordStore + ?Sized>(
        &mut self,
        event: WizardEvent,
        store: &mut S,
    ) -> Result<Outcome> {
        let outcome = match event {
            WizardEvent::Start => self.start(),
            WizardEvent::Next => self.next(),
            WizardEvent::Skip => self.skip(),
            WizardEvent::Back => self.back(),
            WizardEvent::Text(text) => self.set_text(text),
            WizardEvent::Select(value) => self.select(&value),
            WizardEvent::Toggle { value, checked } => self.toggle(&value, checked),
            WizardEvent::Name(name) => self.set_name(name),
            WizardEvent::Commit => return self.commit(store),
        };
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn after(step: usize) -> WizardState {
        if step < catalog::len() {
            WizardState::Step(step + 1)
        } else {
            WizardState::FinalNaming
        }
    }

    fn move_to(&mut self, state: WizardState) -> Outcome {
        self.state = state;
        self.explanation = None;
        Outcome::done()
    }

    fn write(&mut self, q: &Question, value: FieldValue) -> Outcome {
        match self.answers.set(q.key, value) {
            Ok(()) => Outcome::done(),
            Err(_) => Outcome::Refused(Refusal::WrongKind(q.kind)),
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(false)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
