//! Command-line interface definitions and parsing
//!
//! The binary is a scripted driver for the picker state machine: it loads a
//! location store, prints pages, replays picker commands and emits delivery
//! requests. It never reads interactive input.
//!
//! # Commands
//!
//! - **groups**: list the groups in the location store
//! - **show**: print one page of a group as a grid
//! - **replay**: feed a command script to a picker and print each outcome
//! - **deliver**: select a table (and optionally a return base) and print the
//!   resulting delivery request as JSON

use crate::picker::PickerCommand;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "gridpick")]
#[command(about = "Paginated grid picker for a delivery kiosk", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Location store file (overrides config)
    #[arg(short = 's', long = "store", value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the groups in the location store
    #[command(visible_alias = "g")]
    Groups,

    /// Print one page of a group as a grid
    Show {
        /// Group to display
        #[arg(value_name = "GROUP", default_value = crate::catalog::DELIVERY_LOCATIONS)]
        group: String,

        /// One-based page number
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },

    /// Replay picker commands against a group
    ///
    /// Commands: next, prev, select:<name>, cell:<row>,<col>, confirm, cancel
    #[command(visible_alias = "r")]
    Replay {
        /// Group the picker draws from
        #[arg(value_name = "GROUP")]
        group: String,

        /// Commands to apply, in order
        #[arg(value_name = "COMMAND", required = true)]
        commands: Vec<PickerCommand>,

        /// Print every render instruction as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Start a delivery to a table and print the request
    #[command(visible_alias = "d")]
    Deliver {
        /// Destination table name
        #[arg(value_name = "TABLE")]
        table: String,

        /// Base to return to (defaults to the store's default base)
        #[arg(short = 'r', long = "return-to", value_name = "BASE")]
        return_to: Option<String>,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level filter implied by `-v` flags
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
