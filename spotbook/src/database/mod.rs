//! Database layer for persistent storage of spot reservations.
//!
//! This module provides a SQLite-based storage layer for managing spot
//! reservations, including connection management, schema versioning, and
//! CRUD operations. [`Database`] implements
//! [`ReservationStore`](crate::ReservationStore), so it plugs directly
//! into the validator.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use spotbook::database::{Database, DatabaseConfig};
//! use spotbook::{Reservation, SpotId, UserId};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/spotbook.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Create a reservation
//! let reservation = Reservation::new(
//!     NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
//!     SpotId::try_from(12).unwrap(),
//!     UserId::new("alice").unwrap(),
//! );
//! db.create_reservation(&reservation).unwrap();
//!
//! // List all reservations
//! let all = db.list_all_reservations().unwrap();
//! for reservation in all {
//!     println!("{reservation}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
