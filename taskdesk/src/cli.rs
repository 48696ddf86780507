use crate::models::{Priority, Status};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(about = "Personal task tracker")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Optional description
        #[arg(long)]
        desc: Option<String>,
        /// Task priority
        #[arg(long, value_enum, ignore_case = true, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// List tasks, newest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a task's status
    Status {
        /// Task ID
        id: i64,
        /// New status
        #[arg(value_enum)]
        status: Status,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },

    /// Show task counts by status
    Stats,

    /// List task categories
    Categories,
}
