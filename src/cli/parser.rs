use crate::core::filter::ViewMode;
use crate::export::ExportFormat;
use crate::ui::theme::Theme;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI client to log hourly tasks and manage daily timesheet approvals
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A timesheet CLI: log your 8 daily hours on project tasks, send them for approval, review your team",
    long_about = None
)]
pub struct Cli {
    /// Override local storage database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the API base URL from the configuration file
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the local storage
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print or filter the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "operation", help = "Only rows of this operation (login, send, ...)")]
        operation: Option<String>,
    },

    /// Log in and store the session locally
    Login {
        /// User name
        username: String,

        /// Password (else RTIMESHEET_PASSWORD, else an echoed prompt)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Forget the stored session and preferences
    Logout,

    /// Show the logged-in user and their landing view
    Profile,

    /// Show or change the color theme
    Theme {
        /// Theme to set; toggles the current one when omitted
        #[arg(value_enum)]
        mode: Option<Theme>,

        /// Only print the current theme
        #[arg(long, conflicts_with = "mode")]
        show: bool,
    },

    /// List the available projects
    Projects,

    /// List the tasks of a project
    Tasks {
        /// Project id
        project: i64,
    },

    /// Fill the 8 hours of a day and save them
    ///
    /// Existing entries of the day are loaded first. Bulk options assign
    /// one project/task to every hour; `--hour` then overrides single rows.
    ///
    /// Examples:
    ///   rtimesheet fill 2026-10-16 --project 3 --task 12 --details "Sprint work"
    ///   rtimesheet fill 2026-10-16 --hour 1:3:12:standup --hour 2:3:14
    Fill {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,

        /// Bulk project id for all 8 hours
        #[arg(long, requires = "task")]
        project: Option<i64>,

        /// Bulk task id for all 8 hours
        #[arg(long, requires = "project")]
        task: Option<i64>,

        /// Bulk details for all 8 hours
        #[arg(long, requires = "project")]
        details: Option<String>,

        /// Single hour as HOUR:PROJECT:TASK[:DETAILS] (repeatable)
        #[arg(long = "hour", value_name = "SPEC")]
        hours: Vec<String>,

        /// Show the form without saving
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Show your timesheet summary grouped by status
    #[command(alias = "list")]
    Sheet {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Show the hourly entries of each day
        #[arg(long)]
        details: bool,
    },

    /// Send days to your manager
    Send {
        /// Days to send (YYYY-MM-DD)
        dates: Vec<String>,

        /// Send every day not sent yet or rejected in the period
        #[arg(long, conflicts_with = "dates")]
        all: bool,

        #[arg(long, short)]
        period: Option<String>,
    },

    /// Delete every entry of a day
    #[command(alias = "del")]
    Delete {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List your employees (managers only)
    Employees,

    /// Review an employee's days (managers only)
    Review {
        /// Employee id
        employee: i64,

        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, short, value_enum, default_value = "pending")]
        mode: ViewMode,

        /// Show the hourly entries of each day
        #[arg(long)]
        details: bool,
    },

    /// Accept an employee's days (managers only)
    Accept {
        /// Employee id
        employee: i64,

        /// Days to accept (YYYY-MM-DD)
        dates: Vec<String>,

        /// Select every day shown in the chosen mode
        #[arg(long, conflicts_with = "dates")]
        all: bool,

        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, short, value_enum, default_value = "pending")]
        mode: ViewMode,
    },

    /// Reject an employee's days (managers only)
    Reject {
        /// Employee id
        employee: i64,

        /// Days to reject (YYYY-MM-DD)
        dates: Vec<String>,

        /// Select every day shown in the chosen mode
        #[arg(long, conflicts_with = "dates")]
        all: bool,

        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, short, value_enum, default_value = "pending")]
        mode: ViewMode,
    },

    /// Export timesheet days
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Export a subordinate's days instead of your own (managers only)
        #[arg(long, short = 'e')]
        employee: Option<i64>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
