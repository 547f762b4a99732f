//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which removes a stored
//! reservation identified by its date and spot.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_date, parse_spot, GlobalOptions};
use clap::Args;
use spotbook::cancel;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Booking date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Spot number
    #[arg(long, value_name = "SPOT")]
    pub spot: u32,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse and validate arguments
        let date = parse_date(&self.date)?;
        let spot = parse_spot(self.spot)?;

        // 2. Load configuration and open the database
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // 3. Remove the reservation
        cancel(&mut db, date, spot)?;

        println!("Cancelled reservation for spot {spot} on {date}");
        Ok(())
    }
}
