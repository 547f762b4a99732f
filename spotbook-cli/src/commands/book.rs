//! Book command implementation.
//!
//! This module implements the `book` command, which validates a candidate
//! reservation against the booking rules and stores it on success.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, parse_spot, parse_user, GlobalOptions};
use clap::Args;
use spotbook::{book, BookOptions, SystemClock};

/// Book a spot for a date.
#[derive(Args)]
pub struct BookCommand {
    /// Booking date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Spot number
    #[arg(long, value_name = "SPOT")]
    pub spot: u32,

    /// User making the booking
    #[arg(long, value_name = "USER", env = "SPOTBOOK_USER")]
    pub user: String,

    /// Validate and report, but do not store the booking
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse and validate arguments
        let date = parse_date(&self.date)?;
        let spot = parse_spot(self.spot)?;
        let user = parse_user(&self.user)?;

        // 2. Load configuration and open the database
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // 3. Validate and store
        let options = BookOptions::new(date, spot, user).with_dry_run(self.dry_run);
        let outcome = book(&mut db, &SystemClock, &options)?;

        // 4. Report
        if outcome.dry_run {
            println!("Would book {}", outcome.reservation);
        } else {
            println!("Booked {}", outcome.reservation);
        }

        Ok(())
    }
}
