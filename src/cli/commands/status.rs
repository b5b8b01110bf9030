use crate::config::Config;
use crate::errors::AppResult;

use super::open_store;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let status = store.status()?;

    match &status.checked_in {
        Some(holder) => println!("Checked-in to      🟢 {}", holder),
        None => println!("No project currently checked-in"),
    }
    match &status.active {
        Some(id) => println!("Open project       📂 {}", id),
        None => println!("No open project"),
    }

    Ok(())
}
