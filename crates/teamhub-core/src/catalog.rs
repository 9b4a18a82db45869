use crate::answers::FieldKey;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Question definitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Text,
    SingleSelect,
    MultiSelect,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionKind::Text => "text",
            QuestionKind::SingleSelect => "single_select",
            QuestionKind::MultiSelect => "multi_select",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub group: &'static str,
    pub prompt: &'static str,
    pub key: FieldKey,
    pub kind: QuestionKind,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Position of a question inside its group, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupProgress {
    pub group: &'static str,
    pub rank: usize,
    pub total: usize,
}

impl fmt::Display for GroupProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.group, self.rank, self.total)
    }
}

pub const NAME_LABEL: &str = "Team Name";

// ---------------------------------------------------------------------------
// Catalog content
// ---------------------------------------------------------------------------

macro_rules! opt {
    ($value:expr, $explanation:expr $(,)?) => {
        QuestionOption {
            value: $value,
            explanation: $explanation,
        }
    };
}

const fn text(group: &'static str, prompt: &'static str, key: FieldKey) -> Question {
    Question {
        group,
        prompt,
        key,
        kind: QuestionKind::Text,
        options: &[],
    }
}

const fn single(
    group: &'static str,
    prompt: &'static str,
    key: FieldKey,
    options: &'static [QuestionOption],
) -> Question {
    Question {
        group,
        prompt,
        key,
        kind: QuestionKind::SingleSelect,
        options,
    }
}

const fn multi(
    group: &'static str,
    prompt: &'static str,
    key: FieldKey,
    options: &'static [QuestionOption],
) -> Question {
    Question {
        group,
        prompt,
        key,
        kind: QuestionKind::MultiSelect,
        options,
    }
}

const COMPANY: &str = "Company Context";
const TEAM: &str = "Team Setup";
const WORK: &str = "Work Style";
const MOTIVATION: &str = "Motivation & Feedback";
const MANAGER: &str = "Manager Profile";

static QUESTIONS: [Question; 19] = [
    text(COMPANY, "What industry is your company in?", FieldKey::Industry),
    single(
        COMPANY,
        "How big is your company?",
        FieldKey::CompanySize,
        &[
            opt!("1–10", "A small, agile team where direct communication is key."),
            opt!("11–50", "A growing company where processes are starting to formalize."),
            opt!("51–200", "A mid-sized business with multiple departments and layers."),
            opt!("200+", "A large organization where scalability and alignment are critical."),
        ],
    ),
    text(
        COMPANY,
        "What is your main goal for the next 6–12 months?",
        FieldKey::MainGoal,
    ),
    text(
        COMPANY,
        "What is your biggest current challenge?",
        FieldKey::BiggestChallenge,
    ),
    single(
        TEAM,
        "How many people are in your team?",
        FieldKey::TeamSize,
        &[
            opt!("1–3", "A small, focused unit. Roles may be fluid."),
            opt!("4–7", "A standard-sized team, ideal for collaboration without too much overhead."),
            opt!("8–15", "A larger team that may need sub-groups or clear role definitions."),
            opt!("16+", "A very large team or department, requiring strong structure."),
        ],
    ),
    single(
        TEAM,
        "What type of roles do they have?",
        FieldKey::RoleTypes,
        &[
            opt!("Creative", "Roles focused on design, content, and ideation."),
            opt!("Technical", "Roles focused on engineering, data, and development."),
            opt!("Mixed", "A cross-functional team with a blend of skills."),
        ],
    ),
    single(
        TEAM,
        "Is decision-making mostly:",
        FieldKey::DecisionMaking,
        &[
            opt!("Manager-led", "Decisions are made top-down for speed and clarity."),
            opt!("Shared", "The team decides together, fostering ownership and buy-in."),
        ],
    ),
    single(
        TEAM,
        "How independent is your team?",
        FieldKey::TeamIndependence,
        &[
            opt!("Low", "The team requires frequent guidance and supervision."),
            opt!("Medium", "The team handles defined tasks but needs direction on goals."),
            opt!("High", "The team is self-sufficient and drives its own projects."),
        ],
    ),
    single(
        WORK,
        "Is the team working:",
        FieldKey::WorkLocation,
        &[
            opt!("Onsite", "Collaboration happens in-person in a shared office."),
            opt!("Hybrid", "A mix of in-office and remote work offers flexibility."),
            opt!("Remote", "The team is fully distributed and works from anywhere."),
        ],
    ),
    single(
        WORK,
        "Is work mostly:",
        FieldKey::WorkPace,
        &[
            opt!(
                "Project-based",
                "Work is organized around distinct projects with clear start and end dates.",
            ),
            opt!("Task-based", "Work consists of ongoing, individual tasks."),
        ],
    ),
    single(
        WORK,
        "How are tasks usually assigned?",
        FieldKey::TaskAssignment,
        &[
            opt!("Manager assigns", "A top-down approach ensuring alignment with priorities."),
            opt!("Self-selects", "Team members choose their own tasks, promoting autonomy."),
            opt!("Mixed", "A combination of assigned tasks and self-selection."),
        ],
    ),
    multi(
        WORK,
        "What slows your team down the most?",
        FieldKey::SlowsDown,
        &[
            opt!("Too many approvals", "Bureaucracy and red tape can stifle momentum."),
            opt!("Poor communication", "Misunderstandings and information silos create friction."),
            opt!("Low motivation", "A lack of engagement can impact productivity."),
            opt!("Unclear priorities", "When everything is a priority, nothing is."),
            opt!("Burnout", "Overworked teams eventually become less effective."),
        ],
    ),
    multi(
        MOTIVATION,
        "What motivates your team most?",
        FieldKey::MotivatesMost,
        &[
            opt!("Money", "Competitive compensation is a primary driver."),
            opt!("Growth", "Opportunities for learning and career advancement."),
            opt!("Meaning", "A connection to the company's mission and impact."),
            opt!("Flexibility", "Autonomy over when and where work is done."),
        ],
    ),
    multi(
        MOTIVATION,
        "What demotivates them fastest?",
        FieldKey::DemotivatesFastest,
        &[
            opt!("Toxic feedback", "Negative or poorly delivered feedback can destroy morale."),
            opt!("Pressure", "Unrealistic deadlines and constant pressure lead to burnout."),
            opt!("No results", "Working hard without seeing impact is demoralizing."),
            opt!("Low pay", "Feeling undervalued financially is a powerful demotivator."),
            opt!("No recognition", "A lack of appreciation for hard work can kill motivation."),
        ],
    ),
    single(
        MOTIVATION,
        "How often do you give feedback?",
        FieldKey::FeedbackFrequency,
        &[
            opt!("Daily", "Constant, informal feedback keeps everyone aligned."),
            opt!("Weekly", "Regular check-ins provide consistent guidance."),
            opt!("Monthly", "Structured feedback sessions on a monthly basis."),
            opt!("Rarely", "Feedback is infrequent, reserved for major events or reviews."),
        ],
    ),
    single(
        MOTIVATION,
        "Do team members feel safe to speak openly?",
        FieldKey::OpenSpeaking,
        &[
            opt!("Yes", "High psychological safety allows for honest and open discussion."),
            opt!("Sometimes", "Safety depends on the topic or people involved."),
            opt!("No", "Team members are hesitant to share their true thoughts."),
        ],
    ),
    single(
        MANAGER,
        "What is your leadership style?",
        FieldKey::LeadershipStyle,
        &[
            opt!("Directive", "Providing clear instructions and closely monitoring tasks."),
            opt!("Supportive", "Focusing on relationships and team well-being."),
            opt!("Coaching", "Developing team members' skills and empowering them."),
        ],
    ),
    single(
        MANAGER,
        "How much control do you prefer?",
        FieldKey::ControlPreference,
        &[
            opt!("Low", "Prefer to give the team full autonomy and trust."),
            opt!("Medium", "Set the direction but let the team figure out the \"how\"."),
            opt!("High", "Closely involved in the details of the work."),
        ],
    ),
    single(
        MANAGER,
        "How fast do you usually make decisions?",
        FieldKey::DecisionSpeed,
        &[
            opt!("Fast", "Prioritize speed and action, willing to adjust course later."),
            opt!("Balanced", "Take time to gather data but avoid analysis paralysis."),
            opt!("Slow", "Prefer to be thorough and deliberate, ensuring the right choice."),
        ],
    ),
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

static INDEX: OnceLock<HashMap<FieldKey, usize>> = OnceLock::new();

fn index() -> &'static HashMap<FieldKey, usize> {
    INDEX.get_or_init(|| QUESTIONS.iter().enumerate().map(|(i, q)| (q.key, i)).collect())
}

/// All questions in wizard order.
pub fn all_questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn len() -> usize {
    QUESTIONS.len()
}

pub fn lookup(key: FieldKey) -> Option<&'static Question> {
    index().get(&key).map(|&i| &QUESTIONS[i])
}

/// Question for a 1-based wizard step.
pub fn step(step: usize) -> Option<&'static Question> {
    step.checked_sub(1).and_then(|i| QUESTIONS.get(i))
}

/// Label shown next to a field: its prompt.
pub fn label(key: FieldKey) -> &'static str {
    lookup(key).map(|q| q.prompt).unwrap_or(key.as_str())
}

/// Rank and size of the contiguous group the 1-based `step` belongs to.
pub fn group_progress(step: usize) -> Option<GroupProgress> {
    let i = step.checked_sub(1)?;
    let group = QUESTIONS.get(i)?.group;
    let start = QUESTIONS[..i]
        .iter()
        .rposition(|q| q.group != group)
        .map(|p| p + 1)
        .unwrap_or(0);
    let end = QUESTIONS[i..]
        .iter()
        .position(|q| q.group != group)
        .map(|p| p + i)
        .unwrap_or(QUESTIONS.len());
    Some(GroupProgress {
        group,
        rank: i - start + 1,
        total: end - start,
    })
}

/// Ordered groups with their keys, for sectioned views.
pub fn groups() -> Vec<(&'static str, Vec<FieldKey>)> {
    let mut out: Vec<(&'static str, Vec<FieldKey>)> = Vec::new();
    for q in QUESTIONS.iter() {
        match out.last_mut() {
            Some((g, keys)) if *g == q.group => keys.push(q.key),
            _ => out.push((q.group, vec![q.key])),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
