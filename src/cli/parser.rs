use crate::models::project::StatusFilter;
use clap::{Parser, Subcommand};

/// Command-line interface definition for statlog
/// CLI application to time projects with append-only event logs
#[derive(Parser)]
#[command(
    name = "statlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple project time-logger: one log per project, one project checked-in at a time",
    long_about = None
)]
pub struct Cli {
    /// Override the base directory (holds data/, archived/ and state/)
    #[arg(global = true, long = "base", value_name = "DIR")]
    pub base: Option<String>,

    /// Run in test mode (no config file read or update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the base directory and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Print the internal operation journal
    Log {
        #[arg(long = "print", help = "Print the internal journal")]
        print: bool,
    },

    /// Create a new project and open it
    New {
        /// Project id (any valid file name without '/')
        id: String,
    },

    /// Open a project: show total time, state and latest comment
    Open { id: String },

    /// Close the open project (back to the list)
    Close,

    /// Check in to a project (defaults to the open project)
    In { id: Option<String> },

    /// Check out of a project
    Out { id: Option<String> },

    /// Check out and mark a project as finished
    Finish { id: Option<String> },

    /// Check out and mark a project as canceled
    Cancel { id: Option<String> },

    /// Add a comment to the checked-in project
    Comment {
        /// Comment text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(long, short, help = "Project id (defaults to the open project)")]
        project: Option<String>,
    },

    /// List all comments of a project, oldest first
    Comments { id: Option<String> },

    /// Delete a comment by its number in `comments`
    Uncomment {
        /// 1-based comment number as shown by `comments`
        number: usize,

        #[arg(long, short, help = "Project id (defaults to the open project)")]
        project: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List projects, most recently changed first
    List {
        #[arg(long, short, value_enum, default_value = "all")]
        filter: StatusFilter,

        #[arg(long, help = "Print the list as JSON")]
        json: bool,
    },

    /// Move a project's log to the archive
    Archive {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete a project's log forever
    Delete {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the checked-in project and the open one
    Status,
}
