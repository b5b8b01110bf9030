//! Path utilities: expand `~` and `$HOME` in user-supplied paths.

use std::path::PathBuf;

pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" || path == "$HOME" {
        Some("")
    } else {
        path.strip_prefix("~/")
            .or_else(|| path.strip_prefix("$HOME/"))
    };

    if let Some(rest) = rest
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
