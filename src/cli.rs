//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `todoist`.
#[derive(Debug, Parser)]
#[command(name = "todoist", version, about = "Manage Todoist tasks from the command line")]
pub struct Cli {
    /// Emit machine-readable JSON envelopes instead of human output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Trace API requests to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Authenticate with a Todoist API token.
    ///
    /// Get your token from the Todoist developer settings. Pass it as an
    /// argument, paste it at the interactive prompt, or set
    /// TODOIST_API_TOKEN.
    #[command(args_conflicts_with_subcommands = true)]
    Auth {
        /// API token; prompts interactively when omitted.
        token: Option<String>,
        /// Credential management subcommands.
        #[command(subcommand)]
        action: Option<AuthAction>,
    },

    /// List tasks.
    #[command(visible_aliases = ["list", "ls"])]
    Tasks(TasksArgs),

    /// Create a new task.
    Add(AddArgs),

    /// Update a task.
    #[command(visible_aliases = ["edit", "modify"])]
    Update(UpdateArgs),

    /// Mark a task as complete.
    #[command(visible_alias = "done")]
    Complete {
        /// Task ID.
        task_id: String,
    },

    /// Reopen a completed task.
    Reopen {
        /// Task ID.
        task_id: String,
    },

    /// Delete a task permanently.
    ///
    /// This cannot be undone. Use 'todoist complete' to mark as done
    /// instead.
    #[command(visible_aliases = ["rm", "remove"])]
    Delete {
        /// Task ID.
        task_id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },

    /// View a single task in detail.
    #[command(visible_aliases = ["show", "get"])]
    View {
        /// Task ID.
        task_id: String,
    },

    /// Search tasks by content.
    Search {
        /// Case-insensitive query matched against content and notes.
        query: String,
    },

    /// Move a task to a different section or project.
    #[command(name = "move")]
    MoveTask(MoveArgs),

    /// List projects.
    #[command(visible_aliases = ["project", "proj"])]
    Projects {
        /// Project subcommands.
        #[command(subcommand)]
        action: Option<ProjectsAction>,
    },

    /// List sections, optionally filtered by project.
    #[command(visible_alias = "section")]
    Sections {
        /// Filter by project name.
        #[arg(short, long)]
        project: Option<String>,
        /// Section subcommands.
        #[command(subcommand)]
        action: Option<SectionsAction>,
    },

    /// List labels.
    #[command(visible_aliases = ["label", "tags"])]
    Labels {
        /// Label subcommands.
        #[command(subcommand)]
        action: Option<LabelsAction>,
    },

    /// Add or view comments on a task.
    #[command(visible_alias = "note")]
    Comment {
        /// Task ID.
        task_id: String,
        /// Comment text; view existing comments when omitted.
        message: Vec<String>,
    },

    /// Show completed tasks.
    #[command(visible_alias = "history")]
    Completed(CompletedArgs),
}

/// Credential management subcommands under `auth`.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Remove stored credentials.
    Logout,
    /// Check authentication status.
    Status,
}

/// Project subcommands.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// Create a new project.
    Add {
        /// Project name.
        name: String,
        /// Project color.
        #[arg(long)]
        color: Option<String>,
        /// Mark as favorite.
        #[arg(long)]
        favorite: bool,
    },
}

/// Section subcommands.
#[derive(Debug, Subcommand)]
pub enum SectionsAction {
    /// Create a new section in a project.
    Add {
        /// Section name.
        name: String,
        /// Project name (required).
        #[arg(short, long)]
        project: String,
    },
}

/// Label subcommands.
#[derive(Debug, Subcommand)]
pub enum LabelsAction {
    /// Create a new label.
    Add {
        /// Label name.
        name: String,
        /// Label color.
        #[arg(long)]
        color: Option<String>,
    },
}

/// Arguments for `todoist tasks`.
#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Todoist filter string.
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Filter by project name.
    #[arg(short, long)]
    pub project: Option<String>,

    /// Show only overdue tasks.
    #[arg(long)]
    pub overdue: bool,

    /// Show all active tasks instead of today's.
    #[arg(short, long)]
    pub all: bool,

    /// Show task descriptions and comments.
    #[arg(long)]
    pub details: bool,

    /// Sort tasks client-side.
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,
}

/// Client-side sort orders for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Highest priority first.
    Priority,
    /// Earliest due date first; undated tasks last.
    Due,
    /// Alphabetical by content.
    Name,
    /// Oldest first.
    Created,
}

/// Arguments for `todoist add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task content (words are joined with spaces).
    #[arg(required = true)]
    pub content: Vec<String>,

    /// Task description/notes.
    #[arg(long)]
    pub description: Option<String>,

    /// Due date (e.g. "tomorrow", "next monday 3pm").
    #[arg(short, long)]
    pub due: Option<String>,

    /// Priority 1-4 (1 = highest).
    #[arg(short = 'P', long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub priority: Option<u8>,

    /// Project name.
    #[arg(short, long)]
    pub project: Option<String>,

    /// Section name (requires a project).
    #[arg(short, long, requires = "project")]
    pub section: Option<String>,

    /// Attach a label (repeatable).
    #[arg(short, long = "label")]
    pub labels: Vec<String>,
}

/// Arguments for `todoist update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Task ID.
    pub task_id: String,

    /// New task content.
    #[arg(long)]
    pub content: Option<String>,

    /// New description.
    #[arg(long)]
    pub description: Option<String>,

    /// New due date.
    #[arg(short, long)]
    pub due: Option<String>,

    /// New priority 1-4 (1 = highest).
    #[arg(short = 'P', long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub priority: Option<u8>,

    /// Replace labels (comma-separated).
    #[arg(short, long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}

/// Arguments for `todoist move`.
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Task ID.
    pub task_id: String,

    /// Target section name, resolved within the task's project.
    #[arg(short, long)]
    pub section: Option<String>,

    /// Target project name.
    #[arg(short, long)]
    pub project: Option<String>,
}

/// Arguments for `todoist completed`.
#[derive(Debug, Args)]
pub struct CompletedArgs {
    /// Filter by project name.
    #[arg(short, long)]
    pub project: Option<String>,

    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,

    /// End date (YYYY-MM-DD).
    #[arg(long)]
    pub until: Option<String>,

    /// Max results.
    #[arg(short = 'n', long, default_value_t = 30)]
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_tasks_with_filter_and_sort() {
        let cli = Cli::parse_from(["todoist", "tasks", "--filter", "p1", "--sort", "priority"]);
        match cli.command {
            Command::Tasks(args) => {
                assert_eq!(args.filter.as_deref(), Some("p1"));
                assert_eq!(args.sort, Some(SortKey::Priority));
            }
            other => panic!("expected tasks, got {other:?}"),
        }
    }

    #[test]
    fn tasks_aliases_parse() {
        for alias in ["list", "ls"] {
            let cli = Cli::parse_from(["todoist", alias]);
            assert!(matches!(cli.command, Command::Tasks(_)));
        }
    }

    #[test]
    fn add_collects_content_words_and_repeated_labels() {
        let cli = Cli::parse_from(["todoist", "add", "Buy", "milk", "-l", "errands", "-l", "home"]);
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.content, vec!["Buy", "milk"]);
                assert_eq!(args.labels, vec!["errands", "home"]);
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn add_rejects_out_of_range_priority() {
        let result = Cli::try_parse_from(["todoist", "add", "x", "-P", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn add_section_requires_project() {
        let result = Cli::try_parse_from(["todoist", "add", "x", "-s", "Doing"]);
        assert!(result.is_err());
    }

    #[test]
    fn update_splits_comma_separated_labels() {
        let cli = Cli::parse_from(["todoist", "update", "123", "-l", "work,important"]);
        match cli.command {
            Command::Update(args) => {
                assert_eq!(args.labels, Some(vec!["work".into(), "important".into()]));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn auth_token_and_auth_subcommands_coexist() {
        let cli = Cli::parse_from(["todoist", "auth", "tok123"]);
        assert!(matches!(
            cli.command,
            Command::Auth { token: Some(ref t), action: None } if t == "tok123"
        ));

        let cli = Cli::parse_from(["todoist", "auth", "status"]);
        assert!(matches!(
            cli.command,
            Command::Auth { token: None, action: Some(AuthAction::Status) }
        ));
    }

    #[test]
    fn global_json_flag_applies_after_the_subcommand() {
        let cli = Cli::parse_from(["todoist", "projects", "--json"]);
        assert!(cli.json);
    }

    #[test]
    fn completed_defaults_the_limit() {
        let cli = Cli::parse_from(["todoist", "completed"]);
        match cli.command {
            Command::Completed(args) => assert_eq!(args.limit, 30),
            other => panic!("expected completed, got {other:?}"),
        }
    }

    #[test]
    fn move_parses_section_target() {
        let cli = Cli::parse_from(["todoist", "move", "123", "--section", "In Progress"]);
        match cli.command {
            Command::MoveTask(args) => {
                assert_eq!(args.task_id, "123");
                assert_eq!(args.section.as_deref(), Some("In Progress"));
            }
            other => panic!("expected move, got {other:?}"),
        }
    }
}
