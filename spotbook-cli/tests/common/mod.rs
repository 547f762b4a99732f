//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Date helpers anchored to the real calendar (the CLI reads the
//!   system clock, so bookable dates must lie in the future)

use assert_cmd::Command;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the spotbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created yet - spotbook will create it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("spotbook-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when you need to override the data directory or test
    /// global flag behavior.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("spotbook").expect("Failed to find spotbook binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Book a spot, asserting success.
    ///
    /// # Panics
    /// Panics if the book command fails.
    pub fn book_ok(&self, date: NaiveDate, spot: u32, user: &str) {
        let output = self
            .command()
            .arg("book")
            .arg("--date")
            .arg(date.to_string())
            .arg("--spot")
            .arg(spot.to_string())
            .arg("--user")
            .arg(user)
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Build a book command without running it.
    pub fn book_cmd(&self, date: NaiveDate, spot: u32, user: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("book")
            .arg("--date")
            .arg(date.to_string())
            .arg("--spot")
            .arg(spot.to_string())
            .arg("--user")
            .arg(user);
        cmd
    }

    /// List all reservations and return stdout.
    pub fn list(&self) -> String {
        let output = self
            .command()
            .arg("list")
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// The next date with the given weekday that is still bookable
/// (at least one day ahead of today).
#[allow(dead_code)]
pub fn next_bookable(weekday: Weekday) -> NaiveDate {
    let mut date = Local::now().date_naive() + Days::new(1);
    while date.weekday() != weekday {
        date = date + Days::new(1);
    }
    date
}

/// A bookable date `days` ahead of the earliest bookable date.
#[allow(dead_code)]
pub fn days_ahead(days: u64) -> NaiveDate {
    Local::now().date_naive() + Days::new(1 + days)
}
