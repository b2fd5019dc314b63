use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkHours
/// CLI application to calculate working hours between two timestamps
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Working hours calculator: hours inside a daily window between two timestamps, with lunch deduction and holidays",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the calculation service base URL (e.g. http://localhost:8080)
    #[arg(global = true, long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Enable debug logging for rworkhours (RUST_LOG takes precedence)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Calculate working hours between two date/times
    Calc {
        /// Start date (YYYY-MM-DD), default today
        #[arg(long = "start-date", value_name = "DATE")]
        start_date: Option<String>,

        /// Start time (HH:MM), default 09:00
        #[arg(long = "start-time", value_name = "HH:MM")]
        start_time: Option<String>,

        /// End date (YYYY-MM-DD), default tomorrow
        #[arg(long = "end-date", value_name = "DATE")]
        end_date: Option<String>,

        /// End time (HH:MM), default 17:00
        #[arg(long = "end-time", value_name = "HH:MM")]
        end_time: Option<String>,

        /// Quick range: today 09:00 to today + N days 17:00
        #[arg(
            long = "quick",
            value_name = "DAYS",
            allow_negative_numbers = true,
            conflicts_with_all = ["start_date", "start_time", "end_date", "end_time"]
        )]
        quick: Option<i64>,

        #[arg(long = "work-start", value_name = "HOUR", help = "Working day start hour (0-23)")]
        work_start: Option<u32>,

        #[arg(long = "work-end", value_name = "HOUR", help = "Working day end hour (0-23)")]
        work_end: Option<u32>,

        #[arg(long = "lunch-start", value_name = "HOUR", help = "Lunch start hour (0-23)")]
        lunch_start: Option<u32>,

        #[arg(long = "lunch-end", value_name = "HOUR", help = "Lunch end hour (0-23)")]
        lunch_end: Option<u32>,

        #[arg(long = "deduct-lunch", help = "Subtract the lunch interval from working hours")]
        deduct_lunch: bool,

        #[arg(
            long = "defaults",
            help = "Ignore configured hours and use 9-17, lunch 12-13, no deduction"
        )]
        defaults: bool,

        /// Holiday date (YYYY-MM-DD), repeatable; added to configured holidays
        #[arg(long = "holiday", value_name = "DATE")]
        holidays: Vec<String>,

        #[arg(long = "offline", help = "Calculate locally instead of calling the service")]
        offline: bool,

        #[arg(long = "json", help = "Print the raw JSON response")]
        json: bool,

        #[arg(long = "advanced", help = "Also show the working window used")]
        advanced: bool,
    },
}
