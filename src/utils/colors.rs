//! Status symbols and colours for terminal output.

use crate::models::event_kind::EventKind;
use ansi_term::Colour;

/// Symbol and colour of a derived project status.
pub fn describe_status(status: EventKind) -> (&'static str, Colour) {
    match status {
        EventKind::CheckIn => ("🟢", Colour::Purple),
        EventKind::CheckOut => ("🔴", Colour::Yellow),
        EventKind::Created => ("🟡", Colour::Cyan),
        EventKind::Cancel => ("✘", Colour::Red),
        EventKind::Finish => ("✔", Colour::Green),
        EventKind::Comment => ("🗂", Colour::White),
    }
}

/// Status word painted in its colour.
pub fn paint_status(status: EventKind) -> String {
    let (_, colour) = describe_status(status);
    colour.paint(status.to_log_str()).to_string()
}
