//! Common test utilities for library integration tests.

use chrono::NaiveDate;
use spotbook::database::{Database, DatabaseConfig};
use spotbook::{Reservation, SpotId, UserId};
use tempfile::TempDir;

/// A temporary database kept alive for the duration of a test.
pub struct TestDb {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// The open database.
    pub db: Database,
}

#[allow(dead_code)]
impl TestDb {
    /// Creates a fresh database in a temporary directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("spotbook.db");
        let db = Database::open(DatabaseConfig::new(path)).expect("Failed to open database");
        Self { temp_dir, db }
    }

    /// Inserts a reservation directly, bypassing validation.
    pub fn seed(&mut self, booked_at: NaiveDate, spot: u32, user: &str) {
        let reservation = reservation(booked_at, spot, user);
        self.db
            .create_reservation(&reservation)
            .expect("Failed to seed reservation");
    }
}

/// Builds a reservation from plain values.
#[allow(dead_code)]
pub fn reservation(booked_at: NaiveDate, spot: u32, user: &str) -> Reservation {
    Reservation::new(
        booked_at,
        SpotId::try_from(spot).expect("invalid test spot"),
        UserId::new(user).expect("invalid test user"),
    )
}

/// Shorthand for building a date in tests.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
