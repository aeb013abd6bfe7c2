use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tally::cli::{handle_ledger_command, run_shell, LedgerCommand, Session};
use tally::config::{paths::CONFIG_DIR_ENV, Settings, TallyPaths};
use tally::logging::init_tracing;
use tally::Ledger;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal finance ledger",
    long_about = "Tally records income and expense transactions, filters them \
                  and keeps a running balance. The ledger lives in memory for \
                  the length of a session; use 'export' to save it."
)]
struct Cli {
    /// Start from the two demo transactions
    #[arg(long, global = true, conflicts_with = "seed")]
    sample: bool,

    /// Start from a JSON export
    #[arg(long, global = true, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, env = CONFIG_DIR_ENV, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,

    #[command(flatten)]
    Ledger(LedgerCommand),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => TallyPaths::with_base_dir(dir),
        None => TallyPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!();
            println!("Settings:");
            println!("  Categories:        {}", settings.registry().joined());
            println!("  Strict categories: {}", settings.strict_categories);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Default type:      {}", settings.default_type);
            println!("  Default category:  {}", settings.entry_category());
            return Ok(());
        }
        _ => {}
    }

    let mut session = match &cli.seed {
        Some(path) => Session::from_export_file(path, settings)
            .with_context(|| format!("Could not seed ledger from {}", path.display()))?,
        None if cli.sample => Session::new(Ledger::sample(), settings),
        None => Session::new(Ledger::new(), settings),
    };

    match cli.command {
        Some(Commands::Ledger(cmd)) => handle_ledger_command(&mut session, cmd)?,
        _ => run_shell(&mut session)?,
    }

    Ok(())
}
