use clap::{CommandFactory, Parser, Subcommand};
use quizbank::model::QuestionType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quizbank",
    bin_name = "quizbank",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Project-aware question bank for authoring quizzes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global question bank
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Question,
    Bank,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Question => "Per-Question Commands:",
            CommandGroup::Bank => "Bank Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "create" | "list" | "view" => Some(CommandGroup::Core),
            "rename" | "publish" | "duplicate" | "retype" | "option" | "set" | "merge"
            | "delete" | "check" => Some(CommandGroup::Question),
            "stats" | "csv" | "answers" | "export" | "import" => Some(CommandGroup::Bank),
            "config" | "init" | "widget" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Question,
            CommandGroup::Bank,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("quizbank {version}\n"));
    output.push_str("Project-aware question bank for authoring quizzes\n");
    output.push('\n');
    output.push_str("Usage: quizbank [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -g, --global     Operate on the global question bank\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints clap's own help for the subcommand that was given alongside `--help`.
pub fn print_subcommand_help(command: &Option<Commands>) {
    let subcommand_name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::Create { .. } => "create",
            CoreCommands::List { .. } => "list",
            CoreCommands::View { .. } => "view",
        },
        Some(Commands::Question(c)) => match c {
            QuestionCommands::Rename { .. } => "rename",
            QuestionCommands::Publish { .. } => "publish",
            QuestionCommands::Duplicate { .. } => "duplicate",
            QuestionCommands::Retype { .. } => "retype",
            QuestionCommands::EditOption { .. } => "option",
            QuestionCommands::Set { .. } => "set",
            QuestionCommands::Merge { .. } => "merge",
            QuestionCommands::Delete { .. } => "delete",
            QuestionCommands::Check { .. } => "check",
        },
        Some(Commands::Bank(c)) => match c {
            BankCommands::Stats => "stats",
            BankCommands::Csv => "csv",
            BankCommands::Answers { .. } => "answers",
            BankCommands::Export { .. } => "export",
            BankCommands::Import { .. } => "import",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Init => "init",
            MiscCommands::Widget { .. } => "widget",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(subcommand_name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Question(QuestionCommands),

    #[command(flatten)]
    Bank(BankCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Create a blank question
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Question type (short-answer or multiple-choice); defaults to config
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        question_type: Option<QuestionType>,

        /// Explicit id (defaults to one past the highest id)
        #[arg(long)]
        id: Option<i64>,

        /// Name words (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// List questions
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only published questions
        #[arg(long)]
        published: bool,

        /// Only questions with a body, an expected answer or options
        #[arg(long)]
        non_empty: bool,

        /// Print names only
        #[arg(long)]
        names: bool,
    },

    /// View one or more questions as markdown
    #[command(alias = "v", display_order = 3)]
    View {
        /// Question ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuestionCommands {
    /// Rename a question
    #[command(display_order = 10)]
    Rename {
        id: i64,

        /// New name words (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Toggle a question's published flag, or publish every question
    #[command(alias = "p", display_order = 11)]
    Publish {
        #[arg(required_unless_present = "all")]
        id: Option<i64>,

        /// Publish every question in the bank
        #[arg(long, conflicts_with = "id")]
        all: bool,
    },

    /// Duplicate a question (the copy is unpublished)
    #[command(alias = "dup", display_order = 12)]
    Duplicate {
        target: i64,

        /// Id for the copy
        #[arg(long = "id")]
        new_id: Option<i64>,
    },

    /// Change a question's type (switching to short answer clears options)
    #[command(display_order = 13)]
    Retype {
        id: i64,

        #[arg(value_name = "TYPE")]
        question_type: QuestionType,
    },

    /// Append or replace an option of a question
    #[command(name = "option", display_order = 14)]
    EditOption {
        id: i64,

        text: String,

        /// Option position to replace (-1 or absent appends)
        #[arg(long, allow_hyphen_values = true)]
        index: Option<isize>,
    },

    /// Set body, expected answer or points
    #[command(display_order = 15)]
    Set {
        id: i64,

        #[arg(long)]
        body: Option<String>,

        #[arg(long)]
        expected: Option<String>,

        #[arg(long)]
        points: Option<u32>,
    },

    /// Build a new question from the content of another
    #[command(display_order = 16)]
    Merge {
        source: i64,

        /// Name words for the new question
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,

        /// Points (defaults to the source question's points)
        #[arg(long)]
        points: Option<u32>,

        /// Id for the new question
        #[arg(long = "id")]
        new_id: Option<i64>,
    },

    /// Delete one or more questions
    #[command(alias = "rm", display_order = 17)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Check an answer against a question
    #[command(display_order = 18)]
    Check {
        id: i64,

        /// Answer words (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        answer: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BankCommands {
    /// Show point and type totals
    #[command(display_order = 20)]
    Stats,

    /// Print the bank as CSV
    #[command(display_order = 21)]
    Csv,

    /// Print a blank answer sheet as JSON
    #[command(display_order = 22)]
    Answers {
        /// Only published questions
        #[arg(long)]
        published: bool,
    },

    /// Export the bank to a tar.gz archive
    #[command(display_order = 23)]
    Export {
        /// Directory to write the archive to (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Import markdown files as questions
    #[command(display_order = 24)]
    Import {
        /// Paths to files or directories to import
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (default-type, import-extensions)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store
    #[command(display_order = 31)]
    Init,

    /// Render a practice widget after replaying actions on it
    #[command(display_order = 32)]
    Widget {
        /// counter, reveal, change-type, attempt, dice or holiday (omit for all)
        kind: Option<String>,

        /// Actions to apply in order (e.g. add, toggle, start, roll)
        #[arg(num_args = 0..)]
        actions: Vec<String>,
    },

    /// Print help for quizbank or a subcommand
    #[command(display_order = 33)]
    Help {
        command: Option<String>,
    },
}
