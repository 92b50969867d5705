use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skillport_core::config::{self, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod skills;

#[derive(Parser)]
#[command(name = "skillport")]
#[command(about = "skillport - Convert agent definitions into skills", long_about = None)]
struct Cli {
    /// Project root that relative directories resolve against (default: current directory)
    #[arg(long, global = true, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Config file (default: <root>/skillport.toml)
    #[arg(long, short, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding <name>.md agent files
    #[arg(long, global = true, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Directory receiving <name>/<output_file> skill files
    #[arg(long, global = true, value_name = "DIR")]
    dest: Option<PathBuf>,

    /// Log conversion details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Convert agents into skills (default)
    Convert {
        /// Only convert these names instead of the whole catalog
        #[arg(long, value_name = "NAME", num_args = 1..)]
        only: Vec<String>,
    },
    /// Show the built-in skill catalog
    List,
    /// Read back converted skills and check their frontmatter
    Verify {
        #[arg(long, value_name = "NAME", num_args = 1..)]
        only: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::load_or_default(&config::config_path(&root))?,
    };
    if let Some(source) = &cli.source {
        config.source_dir = source.clone();
    }
    if let Some(dest) = &cli.dest {
        config.dest_dir = dest.clone();
    }

    let config = config.resolve(&root);
    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::Convert { only: Vec::new() });

    match command {
        Commands::List => skills::list_catalog(),
        Commands::Convert { only } => {
            let config = load_config(&cli)?;
            skills::convert(&config, only)
        }
        Commands::Verify { only } => {
            let config = load_config(&cli)?;
            skills::verify(&config, only)
        }
    }
}
