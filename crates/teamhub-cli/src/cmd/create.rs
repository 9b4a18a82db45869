use super::read_line;
use crate::output::print_json;
use anyhow::{bail, Context};
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::Path;
use teamhub_core::{
    answers::{AnswerSet, FieldValue},
    catalog::{Question, QuestionKind},
    config::Config,
    outcome::{Effect, Outcome},
    store::RecordStore,
    wizard::{Wizard, WizardState},
};

pub fn run(
    root: &Path,
    from: Option<&Path>,
    name: Option<String>,
    skip_intro: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let mut store = config.store(root)?;
    let skip_intro =
        skip_intro || (config.wizard.skip_intro_when_empty && store.load().is_empty());
    let mut wizard = Wizard::new(skip_intro);

    let id = match from {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file: AnswersFile = serde_yaml::from_str(&data)
                .with_context(|| format!("invalid answers file {}", path.display()))?;
            let name = name.or(file.name).unwrap_or_default();
            replay(&mut wizard, &mut store, &file.answers, &name)?
        }
        None => {
            let mut input = std::io::stdin().lock();
            // With --json, stdout carries only the created team.
            let id = if json {
                drive(&mut wizard, &mut store, &mut input, &mut std::io::stderr().lock())?
            } else {
                drive(&mut wizard, &mut store, &mut input, &mut std::io::stdout().lock())?
            };
            match id {
                Some(id) => id,
                None => bail!("team creation cancelled"),
            }
        }
    };

    let team = store.get(&id).context("created team is missing from the store")?;
    if json {
        print_json(&team)?;
    } else {
        println!("Created team: {} ({})", team.name, team.id);
        println!("Next: teamhub show {}", team.id);
    }
    Ok(())
}

/// Answers file for non-interactive creation: the team name plus any subset
/// of answer keys.
#[derive(Deserialize)]
struct AnswersFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(flatten)]
    answers: AnswerSet,
}

fn added_id(outcome: &Outcome) -> Option<String> {
    outcome.effects().iter().find_map(|e| match e {
        Effect::RecordAdded { id } => Some(id.clone()),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Replay from a file
// ---------------------------------------------------------------------------

/// Walk every step: answered fields are entered and confirmed, the rest are
/// skipped. Returns the new record id.
fn replay<S: RecordStore>(
    wizard: &mut Wizard,
    store: &mut S,
    answers: &AnswerSet,
    name: &str,
) -> anyhow::Result<String> {
    if wizard.state() == WizardState::Intro {
        wizard.start();
    }
    while let Some(q) = wizard.current_question() {
        let value = answers.get(q.key);
        if !value.is_answered() {
            wizard.skip();
            continue;
        }
        let outcomes = match (q.kind, value) {
            (QuestionKind::Text, FieldValue::Text(s)) => vec![wizard.set_text(s)],
            (QuestionKind::SingleSelect, FieldValue::Text(s)) => vec![wizard.select(&s)],
            (QuestionKind::MultiSelect, FieldValue::Many(values)) => values
                .iter()
                .map(|v| wizard.toggle(v, true))
                .collect(),
            _ => bail!("answer for '{}' has the wrong shape", q.key),
        };
        for outcome in outcomes {
            if let Outcome::Refused(reason) = outcome {
                bail!("{}: {reason}", q.key);
            }
        }
        if let Outcome::Refused(reason) = wizard.next() {
            bail!("{}: {reason}", q.key);
        }
    }

    wizard.set_name(name);
    let outcome = wizard.commit(store).context("failed to save team")?;
    match outcome {
        Outcome::Refused(reason) => bail!("{reason}"),
        applied => added_id(&applied).context("commit did not add a team"),
    }
}

// ---------------------------------------------------------------------------
// Interactive prompt
// ---------------------------------------------------------------------------

const HELP: &str = "(enter = next, :skip, :back, :quit)";

/// Run the wizard against line-based input. Returns the new record id, or
/// `None` when the user quits or input ends.
pub fn drive<S, R, W>(
    wizard: &mut Wizard,
    store: &mut S,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<String>>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    loop {
        match wizard.state() {
            WizardState::Intro => {
                writeln!(out, "Create Your Team Profile")?;
                writeln!(
                    out,
                    "Answering these questions describes your company and team context."
                )?;
                writeln!(out, "Press enter to start, :quit to leave.")?;
                match read_line(input)?.as_deref() {
                    None | Some(":quit") | Some(":q") => return Ok(None),
                    Some(_) => {
                        wizard.start();
                    }
                }
            }
            WizardState::Step(_) => {
                let Some(q) = wizard.current_question() else {
                    bail!("wizard step has no question");
                };
                render_step(wizard, q, out)?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                let outcome = match line.as_str() {
                    ":quit" | ":q" => return Ok(None),
                    ":back" | ":b" => wizard.back(),
                    ":skip" | ":s" => wizard.skip(),
                    "" => wizard.next(),
                    _ => answer(wizard, q, &line, out)?,
                };
                if let Outcome::Refused(reason) = outcome {
                    writeln!(out, "! {reason}")?;
                }
            }
            WizardState::FinalNaming => {
                writeln!(out, "\nFinal Step")?;
                writeln!(out, "Almost there! Finally, give your team a name.")?;
                writeln!(out, "(:back to revisit the last question)")?;
                write!(out, "Team Name> ")?;
                out.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                match line.as_str() {
                    ":quit" | ":q" => return Ok(None),
                    ":back" | ":b" => {
                        wizard.back();
                    }
                    _ => {
                        wizard.set_name(line.as_str());
                        // A failed write keeps the answers; the user can retry or quit.
                        match wizard.commit(store) {
                            Ok(Outcome::Refused(reason)) => writeln!(out, "! {reason}")?,
                            Ok(applied) => return Ok(added_id(&applied)),
                            Err(e) => writeln!(out, "! failed to save team: {e}")?,
                        }
                    }
                }
            }
            WizardState::Committed => return Ok(None),
        }
    }
}

fn render_step<W: Write>(wizard: &Wizard, q: &Question, out: &mut W) -> anyhow::Result<()> {
    let progress = wizard.progress();
    writeln!(out, "\n{} [{}%]", progress.label, progress.percent)?;
    if let Some(group) = wizard.group_progress() {
        writeln!(out, "{group}")?;
    }
    writeln!(out, "{}", q.prompt)?;

    let current = wizard.answers().get(q.key);
    match q.kind {
        QuestionKind::Text => {
            if current.is_answered() {
                writeln!(out, "  current: {}", current.display())?;
            }
        }
        QuestionKind::SingleSelect | QuestionKind::MultiSelect => {
            for (i, opt) in q.options.iter().enumerate() {
                let chosen = match &current {
                    FieldValue::Text(s) => s == opt.value,
                    FieldValue::Many(v) => v.iter().any(|x| x == opt.value),
                };
                let mark = if chosen { "x" } else { " " };
                writeln!(out, "  [{mark}] {}) {}", i + 1, opt.value)?;
            }
        }
    }
    if let Some(explanation) = wizard.explanation() {
        writeln!(out, "  > {explanation}")?;
    }
    if q.kind == QuestionKind::MultiSelect {
        writeln!(out, "numbers toggle options {HELP}")?;
    } else {
        writeln!(out, "{HELP}")?;
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Apply a typed answer. Text and single choices confirm immediately;
/// multi-choice toggles stay on the step until an empty line.
fn answer<W: Write>(
    wizard: &mut Wizard,
    q: &Question,
    line: &str,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let outcome = match q.kind {
        QuestionKind::Text => wizard.set_text(line),
        QuestionKind::SingleSelect => {
            let value = option_value(q, line).unwrap_or(line);
            wizard.select(value)
        }
        QuestionKind::MultiSelect => {
            let mut last = Outcome::done();
            for token in toggle_tokens(line) {
                let value = option_value(q, token).unwrap_or(token);
                let checked = match wizard.answers().get(q.key) {
                    FieldValue::Many(v) => !v.iter().any(|x| x == value),
                    FieldValue::Text(_) => true,
                };
                last = wizard.toggle(value, checked);
                if !last.is_applied() {
                    break;
                }
            }
            return Ok(last);
        }
    };
    if !outcome.is_applied() {
        return Ok(outcome);
    }
    if let Some(explanation) = wizard.explanation() {
        writeln!(out, "  > {explanation}")?;
    }
    Ok(wizard.next())
}

/// Split multi-choice input on commas. A piece made only of numbers may
/// also be space separated (`1 3`); anything else is one option value.
fn toggle_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for piece in line.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let words: Vec<&str> = piece.split_whitespace().collect();
        if words.iter().all(|w| w.parse::<usize>().is_ok()) {
            tokens.extend(words);
        } else {
            tokens.push(piece);
        }
    }
    tokens
}

/// Map a 1-based option number to its value.
fn option_value(q: &Question, token: &str) -> Option<&'static str> {
    let n: usize = token.parse().ok()?;
    q.options.get(n.checked_sub(1)?).map(|o| o.value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use teamhub_core::catalog;
    use teamhub_core::store::MemoryStore;

    fn run_script(skip_intro: bool, script: &str) -> (Option<String>, MemoryStore, String) {
        let mut store = MemoryStore::new();
        let mut wizard = Wizard::new(skip_intro);
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let id = drive(&mut wizard, &mut store, &mut input, &mut out).unwrap();
        (id, store, String::from_utf8(out).unwrap())
    }

    fn skips(n: usize) -> String {
        ":skip\n".repeat(n)
    }

    #[test]
    fn failed_save_keeps_answers_for_retry() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);
        let mut wizard = Wizard::new(true);
        let script = format!("Fintech\n{}Ops\n:quit\n", skips(catalog::len() - 1));
        let mut input = script.as_bytes();
        let mut out = Vec::new();

        let id = drive(&mut wizard, &mut store, &mut input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(id.is_none());
        assert!(out.contains("! failed to save team: persistence unavailable"));
        assert_eq!(out.matches("Team Name> ").count(), 2);
        assert_eq!(wizard.state(), WizardState::FinalNaming);
        assert_eq!(wizard.answers().industry, "Fintech");

        store.fail_writes(false);
        let outcome = wizard.commit(&mut store).unwrap();
        assert!(added_id(&outcome).is_some());
        assert_eq!(store.load()[0].answers.industry, "Fintech");
    }

    #[test]
    fn full_run_creates_team() {
        let script = format!(
            "\nFintech\n2\n{}1 5\n\n{}Ops\n",
            skips(9),
            skips(catalog::len() - 12)
        );
        let (id, store, out) = run_script(false, &script);
        let id = id.unwrap();
        let team = store.get(&id).unwrap();
        assert_eq!(team.name, "Ops");
        assert_eq!(team.answers.industry, "Fintech");
        assert_eq!(team.answers.company_size, "11–50");
        assert_eq!(team.answers.slows_down, vec!["Too many approvals", "Burnout"]);
        assert!(out.contains("A growing company where processes are starting to formalize."));
        assert!(out.contains("Company Context (2/4)"));
    }

    #[test]
    fn empty_line_on_unanswered_step_is_refused() {
        let script = format!("\n{}Ops\n", skips(catalog::len()));
        let (id, store, out) = run_script(true, &script);
        assert!(id.is_some());
        assert!(out.contains("Step 1 of 19"));
        assert!(out.contains("! answer the question or skip it"));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn blank_name_is_refused_then_accepted() {
        let script = format!("{}   \nOps\n", skips(catalog::len()));
        let (id, store, out) = run_script(true, &script);
        assert!(out.contains("! the team needs a name"));
        assert_eq!(store.get(&id.unwrap()).unwrap().name, "Ops");
    }

    #[test]
    fn quit_creates_nothing() {
        let (id, store, _) = run_script(true, "Fintech\n:quit\n");
        assert!(id.is_none());
        assert!(store.load().is_empty());
    }

    #[test]
    fn end_of_input_creates_nothing() {
        let (id, store, _) = run_script(false, "");
        assert!(id.is_none());
        assert!(store.load().is_empty());
    }

    #[test]
    fn unknown_option_number_is_refused() {
        let script = format!(":skip\n9\n{}Ops\n", skips(catalog::len() - 1));
        let (id, store, out) = run_script(true, &script);
        assert!(out.contains("! '9' is not one of the options"));
        let team = store.get(&id.unwrap()).unwrap();
        assert!(team.answers.company_size.is_empty());
    }

    #[test]
    fn toggle_tokens_keep_multi_word_values() {
        assert_eq!(toggle_tokens("1 5"), vec!["1", "5"]);
        assert_eq!(toggle_tokens("2, 4"), vec!["2", "4"]);
        assert_eq!(
            toggle_tokens("Too many approvals, Burnout"),
            vec!["Too many approvals", "Burnout"]
        );
    }

    #[test]
    fn replay_skips_missing_answers() {
        let mut store = MemoryStore::new();
        let mut wizard = Wizard::new(false);
        let file: AnswersFile = serde_yaml::from_str(
            "industry: Media\nteamSize: \"4–7\"\nmotivatesMost: [Growth, Meaning]\n",
        )
        .unwrap();
        let id = replay(&mut wizard, &mut store, &file.answers, "Studio").unwrap();
        let team = store.get(&id).unwrap();
        assert_eq!(team.name, "Studio");
        assert_eq!(team.answers.team_size, "4–7");
        assert_eq!(team.answers.motivates_most, vec!["Growth", "Meaning"]);
        assert!(team.answers.company_size.is_empty());
    }

    #[test]
    fn replay_rejects_unknown_option() {
        let mut store = MemoryStore::new();
        let mut wizard = Wizard::new(true);
        let file: AnswersFile = serde_yaml::from_str("companySize: huge\n").unwrap();
        let err = replay(&mut wizard, &mut store, &file.answers, "X").unwrap_err();
        assert!(err.to_string().contains("companySize"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn replay_needs_a_name() {
        let mut store = MemoryStore::new();
        let mut wizard = Wizard::new(true);
        let err = replay(&mut wizard, &mut store, &AnswerSet::new(), " ").unwrap_err();
        assert!(err.to_string().contains("name"));
    }
}
