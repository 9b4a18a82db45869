use anyhow::Context;
use teamhub_core::{config::Config, io, paths, store::RecordStore};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let data_dir = paths::data_dir(root);
    io::ensure_dir(&data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    let config_path = paths::config_path(root);
    let config_created = !config_path.exists();
    if config_created {
        Config::default()
            .save(root)
            .context("failed to write config.yaml")?;
    }
    let config = Config::load(root).context("failed to load config")?;

    let mut store = config.store(root)?;
    let store_created = !store.path().exists();
    if store_created {
        store
            .replace_all(&[])
            .context("failed to create team store")?;
    }

    if json {
        return crate::output::print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "config_created": config_created,
            "store_created": store_created,
            "store": store.path().display().to_string(),
        }));
    }

    println!("Initializing Team Hub in: {}", root.display());
    let status = |created: bool| if created { "created:" } else { "exists: " };
    println!("  {} {}", status(config_created), paths::CONFIG_FILE);
    println!(
        "  {} {}/{}",
        status(store_created),
        paths::DATA_DIR,
        config.store.file
    );
    Ok(())
}
