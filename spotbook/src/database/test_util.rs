//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::{Reservation, SpotId, UserId};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test reservation for the given date, spot, and user.
///
/// # Panics
///
/// Panics if the spot or user identifier is invalid.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_reservation(booked_at: NaiveDate, spot: u32, user: &str) -> Reservation {
    Reservation::new(
        booked_at,
        SpotId::try_from(spot).unwrap(),
        UserId::new(user).unwrap(),
    )
}
