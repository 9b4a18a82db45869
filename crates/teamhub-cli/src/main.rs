mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "teamhub",
    about = "Team profiles built from a guided questionnaire",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data root holding .teamhub/ (default: home directory)
    #[arg(long, global = true, env = "TEAMHUB_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the .teamhub directory, config, and an empty team store
    Init,

    /// List teams (newest first)
    List,

    /// Show one team, grouped by questionnaire section
    Show { id: String },

    /// Build a new team profile with the questionnaire
    Create {
        /// Read answers from a YAML file instead of prompting
        #[arg(long)]
        from: Option<PathBuf>,

        /// Team name (overrides `name` in the answers file)
        #[arg(long)]
        name: Option<String>,

        /// Go straight to the first question
        #[arg(long)]
        skip_intro: bool,
    },

    /// Edit fields of an existing team
    Edit {
        id: String,

        /// Replace a field: key=value (lists: comma separated)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Add one value to a multi-choice field: key=value
        #[arg(long = "add", value_name = "KEY=VALUE")]
        add: Vec<String>,

        /// Remove one value from a multi-choice field: key=value
        #[arg(long = "remove", value_name = "KEY=VALUE")]
        remove: Vec<String>,
    },

    /// Delete a team (asks for confirmation)
    Delete {
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the questionnaire
    Questions,

    /// About Team Hub
    About,

    /// Show or validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = teamhub_core::paths::resolve_root(cli.root.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|root| match cli.command {
            Commands::Init => cmd::init::run(&root, cli.json),
            Commands::List => cmd::list::run(&root, cli.json),
            Commands::Show { id } => cmd::show::run(&root, &id, cli.json),
            Commands::Create {
                from,
                name,
                skip_intro,
            } => cmd::create::run(&root, from.as_deref(), name, skip_intro, cli.json),
            Commands::Edit {
                id,
                set,
                add,
                remove,
            } => cmd::edit::run(&root, &id, &set, &add, &remove, cli.json),
            Commands::Delete { id, yes } => cmd::delete::run(&root, &id, yes, cli.json),
            Commands::Questions => cmd::questions::run(cli.json),
            Commands::About => cmd::about::run(cli.json),
            Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
