//! statlog library root.
//! Exposes the CLI parser, the high-level run() function and the core modules
//! (event logs, check-in lock, active pointer, index, comments, lifecycle).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::New { .. } | Commands::Open { .. } | Commands::Close => {
            cli::commands::project::handle(&cli.command, cfg)
        }
        Commands::In { .. }
        | Commands::Out { .. }
        | Commands::Finish { .. }
        | Commands::Cancel { .. } => cli::commands::action::handle(&cli.command, cfg),
        Commands::Comment { .. } | Commands::Comments { .. } | Commands::Uncomment { .. } => {
            cli::commands::comment::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Archive { .. } | Commands::Delete { .. } => {
            cli::commands::remove::handle(&cli.command, cfg)
        }
        Commands::Status => cli::commands::status::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (test mode never touches the user's file)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // 3️⃣ command-line base directory wins over the config file
    if let Some(base) = &cli.base {
        cfg.base_dir = base.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
