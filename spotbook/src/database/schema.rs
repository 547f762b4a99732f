//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the spotbook reservation store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// The primary key is the combination of (booked_at, spot): at most one
/// accepted reservation may hold a given spot on a given date, and the
/// constraint closes the check-then-act window between validation and a
/// concurrent writer's insert.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        booked_at TEXT NOT NULL,
        spot INTEGER NOT NULL,
        user TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        PRIMARY KEY (booked_at, spot)
    )";

/// SQL statement to create an index on the user column.
///
/// This index speeds up the per-user weekly restriction query.
pub const CREATE_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
///
/// A plain INSERT: a primary-key conflict must surface as an error rather
/// than silently replacing the competing reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (booked_at, spot, user, created_at)
    VALUES (?, ?, ?, ?)
";

/// SQL statement to delete a reservation by date and spot.
pub const DELETE_RESERVATION: &str = r"
    DELETE FROM reservations
    WHERE booked_at = ? AND spot = ?
";
