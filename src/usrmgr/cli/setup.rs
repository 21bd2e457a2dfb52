use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use usrmgr::filter::CreatedAtRange;
use usrmgr::model::Sex;
use usrmgr::sort::SortColumn;

#[derive(Parser, Debug)]
#[command(name = "usrmgr")]
#[command(version, about = "Searchable, sortable user table with a create/edit/view dialog")]
#[command(
    long_about = "Starts an interactive session over the seed user table. \
                  Commands are read line by line from stdin; type `help` for the list."
)]
pub struct Cli {
    /// Debug logging on stderr (USRMGR_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Delete without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(name = "usrmgr", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show the search panel and the table
    #[command(alias = "ls")]
    List,

    /// Update search fields, then filter the table
    #[command(alias = "s")]
    Search {
        /// Name contains (case-sensitive); "" clears
        #[arg(long)]
        name: Option<String>,

        /// male, female or none
        #[arg(long, value_parser = parse_sex_setting)]
        sex: Option<Setting<Sex>>,

        /// Exact age, or none (expanded panel only)
        #[arg(long, value_parser = parse_age_setting)]
        age: Option<Setting<i64>>,

        /// START..END, both exclusive, or none (expanded panel only)
        #[arg(long, value_parser = parse_range_setting)]
        created: Option<Setting<CreatedAtRange>>,
    },

    /// Clear the search fields and restore the seed users
    Reset,

    /// Expand or collapse the extra search fields
    Toggle,

    /// Cycle the sort of a column
    Sort {
        #[arg(value_enum)]
        column: ColumnArg,
    },

    /// Open the dialog to add a user
    #[command(alias = "new")]
    Create,

    /// Open a row read-only
    #[command(alias = "v")]
    View { row: usize },

    /// Open a row for editing
    #[command(alias = "e")]
    Edit { row: usize },

    /// Delete a row (asks first)
    #[command(alias = "rm")]
    Delete { row: usize },

    /// Set a field in the open dialog
    Set {
        #[command(subcommand)]
        field: FieldArg,
    },

    /// Validate and save the open dialog
    Submit,

    /// Close the create/edit dialog without saving
    Cancel,

    /// Close the view dialog
    Dismiss,

    /// Show the active settings
    Config,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum FieldArg {
    /// Name (words are joined with spaces)
    Name {
        #[arg(num_args = 0.., trailing_var_arg = true)]
        words: Vec<String>,
    },
    /// male, female or none
    Sex {
        #[arg(value_parser = parse_sex_setting)]
        value: Setting<Sex>,
    },
    /// A whole number, or none
    Age {
        #[arg(value_parser = parse_age_setting, allow_negative_numbers = true)]
        value: Setting<i64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    Age,
    Created,
}

impl From<ColumnArg> for SortColumn {
    fn from(column: ColumnArg) -> Self {
        match column {
            ColumnArg::Age => SortColumn::Age,
            ColumnArg::Created => SortColumn::CreatedAt,
        }
    }
}

/// A value typed into a field, or `none` to empty it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Setting<T> {
    Set(T),
    Clear,
}

impl<T> Setting<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Setting::Set(v) => Some(v),
            Setting::Clear => None,
        }
    }
}

fn parse_setting<T>(
    s: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<Setting<T>, String> {
    if s.eq_ignore_ascii_case("none") {
        return Ok(Setting::Clear);
    }
    parse(s).map(Setting::Set)
}

fn parse_sex_setting(s: &str) -> Result<Setting<Sex>, String> {
    parse_setting(s, |v| v.parse())
}

fn parse_age_setting(s: &str) -> Result<Setting<i64>, String> {
    parse_setting(s, |v| {
        v.parse::<i64>()
            .map_err(|_| format!("'{}' is not a whole number", v))
    })
}

fn parse_range_setting(s: &str) -> Result<Setting<CreatedAtRange>, String> {
    parse_setting(s, |v| {
        let (start, end) = v
            .split_once("..")
            .ok_or_else(|| format!("expected START..END, got '{}'", v))?;
        Ok(CreatedAtRange::new(parse_time(start)?, parse_time(end)?))
    })
}

/// `2024-03-14T12:44:09`, `2024-03-14T12:44` or `2024-03-14` (midnight).
pub fn parse_time(s: &str) -> Result<NaiveDateTime, String> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(t);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("'{}' is not a date like 2024-03-14 or 2024-03-14T12:44:09", s))
}

/// Where config.json is looked up: `$USRMGR_HOME`, else the platform config dir.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("USRMGR_HOME") {
        return Some(PathBuf::from(home));
    }
    directories::ProjectDirs::from("com", "usrmgr", "usrmgr").map(|d| d.config_dir().to_path_buf())
}

/// Logs go to stderr so the table on stdout stays clean.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "usrmgr=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("USRMGR_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
