//! Gym Manager CLI
//!
//! Interactive menu over the gym store, plus a one-shot listing command

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gym_core::logging_facility::{init, Profile};
use std::io;
use std::path::PathBuf;

mod commands;
mod console;

#[derive(Debug, Parser)]
#[command(name = "gym")]
#[command(about = "Gym Manager - members, trainers, workouts and schedules", long_about = None)]
struct Cli {
    /// SQLite database file, created on first use
    #[arg(long, default_value = "gym_manager.db", global = true)]
    db: PathBuf,

    /// Emit operation logs to stderr (RUST_LOG overrides the filter)
    #[arg(long, value_enum, global = true)]
    log_profile: Option<LogProfile>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Print every row of one entity
    List(commands::list::ListArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        init(match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        });
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(parent) = cli.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut conn = gym_store::db::open_store(&cli.db)
        .with_context(|| format!("opening {}", cli.db.display()))?;
    tracing::info!(db = %cli.db.display(), "store ready");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut console = console::Console::new(stdin.lock(), stdout.lock());
            commands::menu::run(&mut console, &mut conn)?;
        }
        Commands::List(args) => {
            commands::list::execute(args, &conn, &mut io::stdout().lock())?;
        }
    }
    Ok(())
}
