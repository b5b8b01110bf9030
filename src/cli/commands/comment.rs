use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::comments::CommentLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success};

use super::{ask_confirmation, open_store, resolve_project};

const WRAP_WIDTH: usize = 72;

/// `comment`, `comments` and `uncomment`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    match cmd {
        Commands::Comment { text, project } => {
            let id = resolve_project(&store, project)?;
            match CommentLogic::add(&store, &id, &text.join(" "))? {
                Some(_) => success(format!("Comment added to '{}'.", id)),
                None => info("Empty comment, nothing added."),
            }
        }

        Commands::Comments { id } => {
            let id = resolve_project(&store, id)?;
            let comments = CommentLogic::list(&store, &id)?;

            header(format!("All Comments for {}", id));
            if comments.is_empty() {
                println!("• No comments yet");
            }
            for (i, c) in comments.iter().enumerate() {
                let lead = format!("[{}] {}  ", i + 1, c.stamp);
                let indent = " ".repeat(lead.len());
                let opts = textwrap::Options::new(WRAP_WIDTH)
                    .initial_indent(&lead)
                    .subsequent_indent(&indent);
                println!("{}", textwrap::fill(&c.payload, opts));
            }
        }

        Commands::Uncomment {
            number,
            project,
            yes,
        } => {
            let id = resolve_project(&store, project)?;
            if !store.lock.is_held_by(&id) {
                return Err(AppError::NotCheckedIn(id.to_string()));
            }
            let comments = CommentLogic::list(&store, &id)?;

            let chosen = number
                .checked_sub(1)
                .and_then(|i| comments.get(i))
                .ok_or(AppError::InvalidCommentIndex(*number))?;

            let question = format!("Delete comment #{}: \"{}\"?", number, chosen.payload);
            if !*yes && cfg.confirm_destructive && !ask_confirmation(&question) {
                info("Operation cancelled.");
                return Ok(());
            }

            if CommentLogic::delete(&store, &id, chosen)? {
                success(format!("Comment #{} deleted.", number));
            } else {
                info("Comment not found, nothing deleted.");
            }
        }

        _ => {}
    }

    Ok(())
}
