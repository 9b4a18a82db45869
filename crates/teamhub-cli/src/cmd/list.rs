use crate::output::{print_json, print_table};
use anyhow::Context;
use teamhub_core::{config::Config, nav::NavRequest, record, store::RecordStore};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let records = config.store(root)?.load();

    let ordered: Vec<_> = if config.listing.newest_first {
        record::newest_first(&records)
    } else {
        records.iter().collect()
    };

    if json {
        let summaries: Vec<_> = ordered
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "name": r.name,
                    "industry": r.answers.industry,
                    "summary": r.summary(),
                    "createdAt": r.created_at,
                })
            })
            .collect();
        return print_json(&summaries);
    }

    if let NavRequest::CreateWizard { .. } =
        NavRequest::landing(records.len(), config.wizard.skip_intro_when_empty)
    {
        println!("No teams yet.");
        println!("Next: teamhub create");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ordered
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.name.clone(),
                r.answers.industry.clone(),
                r.summary(),
                r.created_at.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "INDUSTRY", "TEAM", "CREATED"], &rows);
    Ok(())
}
