use serde::{Deserialize, Serialize};
use std::fmt;

/// Navigation intent handed to the view shell. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum NavRequest {
    Listing,
    About,
    CreateWizard { skip_intro: bool },
    RecordDetail { id: String },
}

impl NavRequest {
    /// Where the listing really lands: an empty store goes straight to the
    /// first wizard question.
    pub fn landing(record_count: usize, skip_intro_when_empty: bool) -> Self {
        if record_count == 0 {
            NavRequest::CreateWizard {
                skip_intro: skip_intro_when_empty,
            }
        } else {
            NavRequest::Listing
        }
    }
}

impl fmt::Display for NavRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavRequest::Listing => f.write_str("listing"),
            NavRequest::About => f.write_str("about"),
            NavRequest::CreateWizard { skip_intro } => {
                write!(f, "create wizard (skip intro: {skip_intro})")
            }
            NavRequest::RecordDetail { id } => write!(f, "team {id}"),
        }
    }
}
