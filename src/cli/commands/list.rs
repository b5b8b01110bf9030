use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::index::{IndexLogic, ProjectIndex};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::describe_status;
use crate::utils::formatting::truncate_to_width;
use crate::utils::table::{Column, Table};

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, json } = cmd {
        let store = open_store(cfg)?;
        let index = IndexLogic::build(&store, *filter)?;

        if *json {
            let out = serde_json::to_string_pretty(&index.filtered)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print_index(&index, cfg.preview_width);
        }
    }
    Ok(())
}

fn print_index(index: &ProjectIndex, preview_width: usize) {
    println!(
        "Filter: {}   ({} shown)\n",
        index.filter.label(),
        index.filtered.len()
    );

    if index.filtered.is_empty() {
        println!("(no projects match this filter)");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("", 2),
        Column::new("PROJECT", 12),
        Column::new("STATE", 8),
        Column::new("LAST CHANGE", 20),
        Column::new("LAST COMMENT", 0),
    ]);

    for p in &index.filtered {
        let (symbol, _) = describe_status(p.status);
        table.add_row(vec![
            symbol.to_string(),
            p.id.to_string(),
            p.status.to_log_str().to_string(),
            p.last_timestamp.clone(),
            truncate_to_width(&p.last_comment, preview_width),
        ]);
    }
    table.fit();

    print!("{}", table.render());
}
