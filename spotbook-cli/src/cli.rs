//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{BookCommand, CancelCommand, CheckCommand, ListCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing campsite spot bookings.
#[derive(Parser)]
#[command(name = "spotbook")]
#[command(version, about = "Manage campsite spot bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SPOTBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "SPOTBOOK_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "SPOTBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a spot for a date
    Book(BookCommand),

    /// Validate a booking without storing it
    Check(CheckCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List stored reservations
    List(ListCommand),
}
