use super::read_line;
use crate::output::print_json;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use teamhub_core::{config::Config, editor::RecordEditor};

pub fn run(root: &Path, id: &str, yes: bool, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let mut store = config.store(root)?;
    let mut editor = RecordEditor::open(&store, id)?;
    let name = editor.original().name.clone();

    editor.request_delete();
    if !yes {
        let prompt = format!("Delete team \"{name}\"? This action cannot be undone. [y/N] ");
        // With --json, stdout carries only the result document.
        if json {
            eprint!("{prompt}");
            std::io::stderr().flush()?;
        } else {
            print!("{prompt}");
            std::io::stdout().flush()?;
        }
        let answer = read_line(&mut std::io::stdin().lock())?.unwrap_or_default();
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            editor.dismiss_delete();
            if json {
                print_json(&serde_json::json!({ "id": id, "deleted": false }))?;
            } else {
                println!("Cancelled.");
            }
            return Ok(());
        }
    }

    editor
        .confirm_delete(&mut store)
        .context("failed to delete team")?;

    if json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("Deleted team: {name}");
    }
    Ok(())
}
