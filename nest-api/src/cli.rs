use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nest_calendar::GridLayout;

#[derive(Debug, Parser)]
#[command(name = "nest")]
#[command(about = "Calendar tools for the Nest planner")]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the six-week grid for a month
    Grid {
        /// Zero-based month (0 = January)
        month: u8,
        year: i32,
        /// Override the configured grid layout
        #[arg(long)]
        layout: Option<GridLayout>,
    },
    /// Print the day of the week for a date
    Weekday {
        day: u8,
        /// One-based month (1 = January)
        month: u8,
        year: i32,
    },
    /// Print the task identity for a moment
    Identity {
        day: u8,
        /// Zero-based month (0 = January)
        month: u8,
        year: i32,
        /// Time of day as HH:MM or HH:MM:SS
        time: String,
    },
    /// Parse a weekday/day/month/year date string
    ParseDate { value: String },
    /// Normalize a task date (RFC 3339 or date string) to a timestamp
    Normalize { value: String },
    /// Load tasks from a JSON file and print a month agenda
    Agenda {
        /// JSON array of task payloads
        #[arg(long)]
        tasks: PathBuf,
        /// Zero-based month (0 = January)
        month: u8,
        year: i32,
    },
}
