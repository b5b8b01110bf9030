use crate::errors::AppResult;
use crate::store::Store;
use crate::store::journal::JournalEntry;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const TARGET_WIDTH: usize = 40;

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create" => Colour::Cyan,
        "checkin" => Colour::Purple,
        "checkout" => Colour::Yellow,
        "finish" => Colour::Green,
        "cancel" | "delete" => Colour::Red,
        "comment" | "uncomment" => Colour::Blue,
        "archive" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let entries = store.journal.entries()?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for (i, entry) in entries.iter().enumerate() {
            println!("{}", Self::render(i + 1, entry, entries.len()));
        }

        Ok(())
    }

    fn render(n: usize, entry: &JournalEntry, count: usize) -> String {
        let id_w = count.to_string().len();
        let color = color_for_operation(&entry.operation);

        let op_target = if entry.target.is_empty() {
            entry.operation.clone()
        } else {
            format!("{} ({})", entry.operation, entry.target)
        };

        // width is measured without ANSI codes
        let visible = if op_target.width() > TARGET_WIDTH {
            let mut s: String = op_target.chars().take(TARGET_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            op_target
        };
        let padding = " ".repeat(TARGET_WIDTH.saturating_sub(visible.width()));

        let colored = match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible.as_str()).to_string(),
        };

        format!(
            "{:>id_w$}: {} | {}{} => {}",
            n,
            entry.date,
            colored,
            padding,
            entry.message,
            id_w = id_w
        )
    }
}
