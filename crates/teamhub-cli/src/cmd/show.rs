use crate::output::print_json;
use anyhow::Context;
use teamhub_core::{config::Config, editor::RecordEditor};
use std::path::Path;

pub fn run(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let store = config.store(root)?;
    let editor = RecordEditor::open(&store, id)?;
    let team = editor.current();

    if json {
        return print_json(&serde_json::json!({
            "team": team,
            "sections": editor.sections(),
        }));
    }

    println!("{}", team.name);
    println!("Id:      {}", team.id);
    println!("Created: {}", team.created_at.format("%Y-%m-%d %H:%M"));
    for section in editor.sections() {
        println!("\n{}", section.title);
        for field in section.fields {
            println!("  {}", field.label);
            println!("    {}", field.value.display());
        }
    }
    Ok(())
}
