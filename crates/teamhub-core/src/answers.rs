use crate::error::{Result, TeamHubError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FieldKey
// ---------------------------------------------------------------------------

/// Identifier of one questionnaire answer. The team name is collected
/// separately and is not a `FieldKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Industry,
    CompanySize,
    MainGoal,
    BiggestChallenge,
    TeamSize,
    RoleTypes,
    DecisionMaking,
    TeamIndependence,
    WorkLocation,
    WorkPace,
    TaskAssignment,
    SlowsDown,
    MotivatesMost,
    DemotivatesFastest,
    FeedbackFrequency,
    OpenSpeaking,
    LeadershipStyle,
    ControlPreference,
    DecisionSpeed,
}

impl FieldKey {
    pub fn all() -> &'static [FieldKey] {
        &[
            FieldKey::Industry,
            FieldKey::CompanySize,
            FieldKey::MainGoal,
            FieldKey::BiggestChallenge,
            FieldKey::TeamSize,
            FieldKey::RoleTypes,
            FieldKey::DecisionMaking,
            FieldKey::TeamIndependence,
            FieldKey::WorkLocation,
            FieldKey::WorkPace,
            FieldKey::TaskAssignment,
            FieldKey::SlowsDown,
            FieldKey::MotivatesMost,
            FieldKey::DemotivatesFastest,
            FieldKey::FeedbackFrequency,
            FieldKey::OpenSpeaking,
            FieldKey::LeadershipStyle,
            FieldKey::ControlPreference,
            FieldKey::DecisionSpeed,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Industry => "industry",
            FieldKey::CompanySize => "companySize",
            FieldKey::MainGoal => "mainGoal",
            FieldKey::BiggestChallenge => "biggestChallenge",
            FieldKey::TeamSize => "teamSize",
            FieldKey::RoleTypes => "roleTypes",
            FieldKey::DecisionMaking => "decisionMaking",
            FieldKey::TeamIndependence => "teamIndependence",
            FieldKey::WorkLocation => "workLocation",
            FieldKey::WorkPace => "workPace",
            FieldKey::TaskAssignment => "taskAssignment",
            FieldKey::SlowsDown => "slowsDown",
            FieldKey::MotivatesMost => "motivatesMost",
            FieldKey::DemotivatesFastest => "demotivatesFastest",
            FieldKey::FeedbackFrequency => "feedbackFrequency",
            FieldKey::OpenSpeaking => "openSpeaking",
            FieldKey::LeadershipStyle => "leadershipStyle",
            FieldKey::ControlPreference => "controlPreference",
            FieldKey::DecisionSpeed => "decisionSpeed",
        }
    }

    /// True for keys whose answer is a sequence of values.
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            FieldKey::SlowsDown | FieldKey::MotivatesMost | FieldKey::DemotivatesFastest
        )
    }

    pub fn empty_value(self) -> FieldValue {
        if self.is_multi() {
            FieldValue::Many(Vec::new())
        } else {
            FieldValue::Text(String::new())
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldKey {
    type Err = TeamHubError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FieldKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| TeamHubError::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Unanswered means an empty string or an empty sequence.
    pub fn is_answered(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Many(v) => !v.is_empty(),
        }
    }

    /// Display form: sequences joined with ", ", blanks rendered as `N/A`.
    pub fn display(&self) -> String {
        let s = match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Many(v) => v.join(", "),
        };
        if s.is_empty() {
            "N/A".to_string()
        } else {
            s
        }
    }
}

// ---------------------------------------------------------------------------
// AnswerSet
// ---------------------------------------------------------------------------

/// Every questionnaire answer for one team. All keys are always present;
/// unknown or missing keys in stored JSON fall back to the unanswered default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    pub industry: String,
    pub company_size: String,
    pub main_goal: String,
    pub biggest_challenge: String,
    pub team_size: String,
    pub role_types: String,
    pub decision_making: String,
    pub team_independence: String,
    pub work_location: String,
    pub work_pace: String,
    pub task_assignment: String,
    pub slows_down: Vec<String>,
    pub motivates_most: Vec<String>,
    pub demotivates_fastest: Vec<String>,
    pub feedback_frequency: String,
    pub open_speaking: String,
    pub leadership_style: String,
    pub control_preference: String,
    pub decision_speed: String,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> FieldValue {
        match self.text_ref(key) {
            Some(s) => FieldValue::Text(s.clone()),
            None => FieldValue::Many(self.many_ref(key).cloned().unwrap_or_default()),
        }
    }

    pub fn is_answered(&self, key: FieldKey) -> bool {
        self.get(key).is_answered()
    }

    /// Replace one field. The value shape must match the key's kind.
    pub fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::Text(s) => {
                let slot = self.text_mut(key).ok_or(TeamHubError::FieldShapeMismatch {
                    key: key.to_string(),
                    expected: "a list of values",
                })?;
                *slot = s;
            }
            FieldValue::Many(v) => {
                let slot = self.many_mut(key).ok_or(TeamHubError::FieldShapeMismatch {
                    key: key.to_string(),
                    expected: "a single value",
                })?;
                *slot = v;
            }
        }
        Ok(())
    }

    /// Reset one field to its unanswered default.
    pub fn clear(&mut self, key: FieldKey) {
        if let Some(s) = self.text_mut(key) {
            s.clear();
        } else if let Some(v) = self.many_mut(key) {
            v.clear();
        }
    }

    /// Add or remove `value` from a multi-valued field. Checking appends at
    /// the end and never duplicates.
    pub fn toggle(&mut self, key: FieldKey, value: &str, checked: bool) -> Result<()> {
        let list = self.many_mut(key).ok_or(TeamHubError::FieldShapeMismatch {
            key: key.to_string(),
            expected: "a single value",
        })?;
        if checked {
            if !list.iter().any(|v| v == value) {
                list.push(value.to_string());
            }
        } else {
            list.retain(|v| v != value);
        }
        Ok(())
    }

    fn text_ref(&self, key: FieldKey) -> Option<&String> {
        let s = match key {
            FieldKey::Industry => &self.industry,
            FieldKey::CompanySize => &self.company_size,
            FieldKey::MainGoal => &self.main_goal,
            FieldKey::BiggestChallenge => &self.biggest_challenge,
            FieldKey::TeamSize => &self.team_size,
            FieldKey::RoleTypes => &self.role_types,
            FieldKey::DecisionMaking => &self.decision_making,
            FieldKey::TeamIndependence => &self.team_independence,
            FieldKey::WorkLocation => &self.work_location,
            FieldKey::WorkPace => &self.work_pace,
            FieldKey::TaskAssignment => &self.task_assignment,
            FieldKey::FeedbackFrequency => &self.feedback_frequency,
            FieldKey::OpenSpeaking => &self.open_speaking,
            FieldKey::LeadershipStyle => &self.leadership_style,
            FieldKey::ControlPreference => &self.control_preference,
            FieldKey::DecisionSpeed => &self.decision_speed,
            FieldKey::SlowsDown | FieldKey::MotivatesMost | FieldKey::DemotivatesFastest => {
                return None
            }
        };
        Some(s)
    }

    fn text_mut(&mut self, key: FieldKey) -> Option<&mut String> {
        let s = match key {
            FieldKey::Industry => &mut self.industry,
            FieldKey::CompanySize => &mut self.company_size,
            FieldKey::MainGoal => &mut self.main_goal,
            FieldKey::BiggestChallenge => &mut self.biggest_challenge,
            FieldKey::TeamSize => &mut self.team_size,
            FieldKey::RoleTypes => &mut self.role_types,
            FieldKey::DecisionMaking => &mut self.decision_making,
            FieldKey::TeamIndependence => &mut self.team_independence,
            FieldKey::WorkLocation => &mut self.work_location,
            FieldKey::WorkPace => &mut self.work_pace,
            FieldKey::TaskAssignment => &mut self.task_assignment,
            FieldKey::FeedbackFrequency => &mut self.feedback_frequency,
            FieldKey::OpenSpeaking => &mut self.open_speaking,
            FieldKey::LeadershipStyle => &mut self.leadership_style,
            FieldKey::ControlPreference => &mut self.control_preference,
            FieldKey::DecisionSpeed => &mut self.decision_speed,
            FieldKey::SlowsDown | FieldKey::MotivatesMost | FieldKey::DemotivatesFastest => {
                return None
            }
        };
        Some(s)
    }

    fn many_ref(&self, key: FieldKey) -> Option<&Vec<String>> {
        match key {
            FieldKey::SlowsDown => Some(&self.slows_down),
            FieldKey::MotivatesMost => Some(&self.motivates_most),
            FieldKey::DemotivatesFastest => Some(&self.demotivates_fastest),
            _ => None,
        }
    }

    fn many_mut(&mut self, key: FieldKey) -> Option<&mut Vec<String>> {
        match key {
            FieldKey::SlowsDown => Some(&mut self.slows_down),
            FieldKey::MotivatesMost => Some(&mut self.motivates_most),
            FieldKey::DemotivatesFastest => Some(&mut self.demotivates_fastest),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
