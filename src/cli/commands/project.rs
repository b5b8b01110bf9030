use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::LifecycleLogic;
use crate::errors::AppResult;
use crate::models::project::{ProjectId, ProjectView};
use crate::ui::messages::{info, success};
use crate::utils::colors::paint_status;
use crate::utils::formatting::bold;
use crate::utils::mins2readable;

use super::open_store;

/// `new`, `open` and `close`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    match cmd {
        Commands::New { id } => {
            let id = LifecycleLogic::create(&store, id)?;
            success(format!("Project '{}' created and opened.", id));
        }
        Commands::Open { id } => {
            let id = ProjectId::parse(id)?;
            let view = LifecycleLogic::open(&store, &id)?;
            print_view(&view);
        }
        Commands::Close => {
            LifecycleLogic::close(&store)?;
            info("No project open.");
        }
        _ => {}
    }

    Ok(())
}

/// Data view of one project.
pub fn print_view(view: &ProjectView) {
    println!("Currently viewing: 🟢 {}", bold(view.id.as_str()));
    println!();
    println!(
        "🕒 Total time: {}",
        mins2readable(view.total_minutes, false, false)
    );
    println!("📍 Current state: {}", paint_status(view.status));
    println!();

    match view.current_comment() {
        Some(c) => {
            let pos = view.cursor.map_or(0, |i| i + 1);
            println!("• {}", c.payload);
            println!("• {}/{}  at {}", pos, view.comments.len(), c.stamp);
        }
        None => println!("• No comments yet"),
    }
}
