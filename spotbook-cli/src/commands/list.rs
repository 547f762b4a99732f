//! List command implementation.
//!
//! This module implements the `list` command, which displays stored
//! reservations as a table or as JSON.

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_database, parse_date, parse_user, GlobalOptions,
};
use clap::{Args, ValueEnum};
use std::io::Write;
use spotbook::Reservation;

/// Column headers for table output.
const COLUMN_HEADERS: [&str; 4] = ["date", "spot", "user", "created_at"];

/// List stored reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "SPOTBOOK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Filter by booking date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub filter_date: Option<String>,

    /// Filter by user
    #[arg(long, value_name = "USER")]
    pub filter_user: Option<String>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open database
        let db = open_database(global, &config)?;

        // 3. Query reservations
        let mut reservations = db.list_all_reservations().map_err(CliError::from)?;

        // 4. Apply filters
        if let Some(ref raw) = self.filter_date {
            let date = parse_date(raw)?;
            reservations.retain(|r| r.booked_at() == date);
        }

        if let Some(ref raw) = self.filter_user {
            let user = parse_user(raw)?;
            reservations.retain(|r| r.user() == &user);
        }

        // 5. Format and output to stdout
        match self.format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => format_as_json(&reservations)?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for reservation in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            reservation.booked_at(),
            reservation.spot(),
            reservation.user(),
            format_timestamp(reservation.created_at()),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json = serde_json::to_string_pretty(reservations)
        .map_err(|e| CliError::Config(format!("Failed to serialize reservations: {e}")))?;
    writeln!(handle, "{json}")?;

    Ok(())
}
