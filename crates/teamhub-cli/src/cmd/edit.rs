use crate::output::print_json;
use anyhow::{bail, Context};
use std::path::Path;
use std::str::FromStr;
use teamhub_core::{
    answers::{FieldKey, FieldValue},
    config::Config,
    editor::RecordEditor,
    outcome::Outcome,
};

pub fn run(
    root: &Path,
    id: &str,
    set: &[String],
    add: &[String],
    remove: &[String],
    json: bool,
) -> anyhow::Result<()> {
    if set.is_empty() && add.is_empty() && remove.is_empty() {
        bail!("nothing to change: pass --set, --add or --remove");
    }

    let config = Config::load(root).context("failed to load config")?;
    let mut store = config.store(root)?;
    let mut editor = RecordEditor::open(&store, id)?;
    editor.edit();

    for arg in set {
        let (key, raw) = parse_assignment(arg)?;
        let value = if key.is_multi() {
            FieldValue::Many(
                raw.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            FieldValue::Text(raw.trim().to_string())
        };
        let outcome = editor
            .field_change(key, value)
            .with_context(|| format!("cannot set '{arg}'"))?;
        refused(outcome, arg)?;
    }
    for (args, checked) in [(add, true), (remove, false)] {
        for arg in args {
            let (key, raw) = parse_assignment(arg)?;
            let outcome = editor
                .toggle(key, raw.trim(), checked)
                .with_context(|| format!("cannot change '{arg}'"))?;
            refused(outcome, arg)?;
        }
    }

    let outcome = editor.save(&mut store).context("failed to save team")?;
    refused(outcome, id)?;

    let team = editor.current();
    if json {
        print_json(team)?;
    } else {
        println!("Saved team: {} ({})", team.name, team.id);
    }
    Ok(())
}

fn refused(outcome: Outcome, what: &str) -> anyhow::Result<()> {
    match outcome {
        Outcome::Refused(reason) => bail!("{what}: {reason}"),
        Outcome::Applied(_) => Ok(()),
    }
}

fn parse_assignment(arg: &str) -> anyhow::Result<(FieldKey, &str)> {
    let Some((key, value)) = arg.split_once('=') else {
        bail!("expected KEY=VALUE, got '{arg}'");
    };
    let key = FieldKey::from_str(key.trim())?;
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignments() {
        let (key, value) = parse_assignment("workLocation=Remote").unwrap();
        assert_eq!(key, FieldKey::WorkLocation);
        assert_eq!(value, "Remote");

        let (key, value) = parse_assignment("mainGoal=grow = fast").unwrap();
        assert_eq!(key, FieldKey::MainGoal);
        assert_eq!(value, "grow = fast");
    }

    #[test]
    fn rejects_bad_assignments() {
        assert!(parse_assignment("workLocation").is_err());
        assert!(parse_assignment("name=Ops").is_err());
    }
}
