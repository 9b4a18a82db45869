use crate::catalog::QuestionKind;
use crate::nav::NavRequest;
use std::fmt;

/// Why a transition was not taken. Refusals are the "disabled button" of the
/// view layer, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// The event has no transition from the current state.
    NotOffered,
    /// The current step's field is still empty.
    Unanswered,
    /// The team name is blank after trimming.
    BlankName,
    /// The value is not in the question's option set.
    UnknownOption(String),
    /// The event does not fit the question kind.
    WrongKind(QuestionKind),
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Refusal::NotOffered => f.write_str("not available here"),
            Refusal::Unanswered => f.write_str("answer the question or skip it"),
            Refusal::BlankName => f.write_str("the team needs a name"),
            Refusal::UnknownOption(v) => write!(f, "'{v}' is not one of the options"),
            Refusal::WrongKind(kind) => write!(f, "this is a {kind} question"),
        }
    }
}

/// Side effects a caller must act on after an applied transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RecordAdded { id: String },
    RecordSaved { id: String },
    RecordDeleted { id: String },
    Navigate(NavRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Vec<Effect>),
    Refused(Refusal),
}

impl Outcome {
    pub fn done() -> Self {
        Outcome::Applied(Vec::new())
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn effects(&self) -> &[Effect] {
        match self {
            Outcome::Applied(effects) => effects,
            Outcome::Refused(_) => &[],
        }
    }

    /// The navigation request among the effects, if any.
    pub fn navigation(&self) -> Option<&NavRequest> {
        self.effects().iter().find_map(|e| match e {
            Effect::Navigate(nav) => Some(nav),
            _ => None,
        })
    }
}
