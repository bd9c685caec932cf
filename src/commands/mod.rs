use crate::components::events::{RepeatInfo, RepeatType};
use crate::error::AppResult;
use crate::utils::time::parse_date;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// Export submodules
pub mod edit;
pub mod list;

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "iljeong", version, about = "Manage calendar events on an events backend")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List events, marking those with a due reminder
    List {
        /// Evaluate reminders at this local time ("YYYY-MM-DD HH:MM")
        #[arg(long)]
        at: Option<String>,
    },
    /// Add an event, or a whole series when --repeat is given
    Add(AddArgs),
    /// Change fields of an existing event
    Edit {
        id: String,
        #[command(flatten)]
        fields: FieldOverrides,
    },
    /// Turn an existing event into a repeating series
    Repeat {
        id: String,
        #[command(flatten)]
        rule: RepeatArgs,
    },
    /// Delete an event
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, value_parser = date_arg)]
    pub date: NaiveDate,
    /// Start time, HH:MM
    #[arg(long)]
    pub start: String,
    /// End time, HH:MM
    #[arg(long)]
    pub end: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "기타")]
    pub category: String,
    /// Reminder lead time in minutes
    #[arg(long, default_value_t = 10)]
    pub notify: u32,
    #[command(flatten)]
    pub rule: RepeatArgs,
}

#[derive(Debug, Args)]
pub struct FieldOverrides {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, value_parser = date_arg)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub notify: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub struct RepeatArgs {
    /// none, daily, weekly, monthly or yearly
    #[arg(long = "repeat", default_value = "none")]
    pub kind: RepeatType,
    #[arg(long, default_value_t = 1)]
    pub interval: u32,
    /// Last possible date of the series
    #[arg(long, value_parser = date_arg)]
    pub until: Option<NaiveDate>,
}

impl RepeatArgs {
    pub fn to_repeat_info(&self) -> RepeatInfo {
        RepeatInfo {
            kind: self.kind,
            interval: self.interval.max(1),
            end_date: self.until,
        }
    }
}

/// Type alias for command result
pub type CommandResult = AppResult<()>;

fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("expected YYYY-MM-DD, got {}", value))
}
