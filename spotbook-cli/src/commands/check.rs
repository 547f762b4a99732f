//! Check command implementation.
//!
//! This module implements the `check` command, which runs the booking
//! rules against a candidate reservation without storing anything. A
//! rejected candidate exits with code 1.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, parse_spot, parse_user, GlobalOptions};
use clap::Args;
use spotbook::{Reservation, ReservationValidator, SystemClock};

/// Validate a booking without storing it.
#[derive(Args)]
pub struct CheckCommand {
    /// Booking date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Spot number
    #[arg(long, value_name = "SPOT")]
    pub spot: u32,

    /// User making the booking
    #[arg(long, value_name = "USER", env = "SPOTBOOK_USER")]
    pub user: String,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse and validate arguments
        let date = parse_date(&self.date)?;
        let spot = parse_spot(self.spot)?;
        let user = parse_user(&self.user)?;

        // 2. Load configuration and open the database
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        // 3. Run all three checks; the first violation is surfaced
        let candidate = Reservation::new(date, spot, user);
        let clock = SystemClock;
        ReservationValidator::new(&db, &clock).validate(&candidate)?;

        println!("OK: {candidate} can be booked");
        Ok(())
    }
}
