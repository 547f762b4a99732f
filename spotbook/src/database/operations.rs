//! Database CRUD operations for reservations.
//!
//! This module implements the write operations (create, delete) and the
//! read queries for spot reservations, including the three queries that
//! make the database usable as a [`ReservationStore`].

use std::time::{Duration, SystemTime};

use chrono::NaiveDate;
use rusqlite::{params, TransactionBehavior};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, SpotId, UserId};
use crate::store::ReservationStore;

use super::connection::Database;
use super::schema::{DELETE_RESERVATION, INSERT_RESERVATION};

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}

/// Formats a calendar date for database storage (ISO-8601).
fn date_to_sql(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: `booked_at`, spot, user, `created_at`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let booked_at: String = row.get(0)?;
    let spot_value: u32 = row.get(1)?;
    let user: String = row.get(2)?;
    let created_secs: i64 = row.get(3)?;

    let booked_at = NaiveDate::parse_from_str(&booked_at, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    let spot = SpotId::try_from(spot_value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    let user =
        UserId::new(user).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Reservation::new(booked_at, spot, user)
        .with_created_at(unix_secs_to_systemtime(created_secs)))
}

// SQL statements for read operations
const SELECT_BY_DATE_AND_SPOT: &str = r"
    SELECT booked_at, spot, user, created_at
    FROM reservations
    WHERE booked_at = ? AND spot = ?
";

const SELECT_BY_DATE: &str = r"
    SELECT booked_at, spot, user, created_at
    FROM reservations
    WHERE booked_at = ?
    ORDER BY spot
";

const SELECT_BY_USER: &str = r"
    SELECT booked_at, spot, user, created_at
    FROM reservations
    WHERE user = ?
    ORDER BY booked_at, spot
";

const LIST_RESERVATIONS: &str = r"
    SELECT booked_at, spot, user, created_at
    FROM reservations
    ORDER BY booked_at, spot
";

impl Database {
    /// Creates a reservation in the database.
    ///
    /// This operation uses a transaction with IMMEDIATE mode to ensure
    /// atomicity. The `(booked_at, spot)` primary key enforces spot
    /// uniqueness at write time, so a conflicting insert from a concurrent
    /// writer fails here even if it slipped past validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SpotAlreadyBooked`] if the date and spot are
    /// already taken, or a database error if the transaction fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use spotbook::database::{Database, DatabaseConfig};
    /// use spotbook::{Reservation, SpotId, UserId};
    ///
    /// let config = DatabaseConfig::new("/tmp/spotbook.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let reservation = Reservation::new(
    ///     NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
    ///     SpotId::try_from(12).unwrap(),
    ///     UserId::new("alice").unwrap(),
    /// );
    /// db.create_reservation(&reservation).unwrap();
    /// ```
    pub fn create_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        let created_secs = systemtime_to_unix_secs(reservation.created_at())?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let inserted = tx.execute(
            INSERT_RESERVATION,
            params![
                date_to_sql(reservation.booked_at()),
                reservation.spot().value(),
                reservation.user().as_str(),
                created_secs,
            ],
        );

        match inserted {
            Ok(_) => {
                tx.commit()?;
                log::debug!("stored reservation: {reservation}");
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(Error::SpotAlreadyBooked {
                    spot: reservation.spot(),
                    date: reservation.booked_at(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the reservation for the given date and spot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation exists for the pair,
    /// or a database error if the delete fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use spotbook::database::{Database, DatabaseConfig};
    /// use spotbook::SpotId;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/spotbook.db")).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
    /// db.delete_reservation(date, SpotId::try_from(12).unwrap()).unwrap();
    /// ```
    pub fn delete_reservation(&mut self, date: NaiveDate, spot: SpotId) -> Result<()> {
        let deleted = self.conn.execute(
            DELETE_RESERVATION,
            params![date_to_sql(date), spot.value()],
        )?;

        if deleted == 0 {
            return Err(Error::NotFound {
                resource: format!("reservation for spot {spot} on {date}"),
            });
        }

        log::debug!("deleted reservation for spot {spot} on {date}");
        Ok(())
    }

    /// Lists all reservations, ordered by date and spot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_reservations(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(LIST_RESERVATIONS)?;
        let rows = stmt.query_map([], row_to_reservation)?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(row?);
        }
        Ok(reservations)
    }
}

impl ReservationStore for Database {
    fn find_by_date_and_spot(&self, date: NaiveDate, spot: SpotId) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(SELECT_BY_DATE_AND_SPOT)?;
        let rows = stmt.query_map(
            params![date_to_sql(date), spot.value()],
            row_to_reservation,
        )?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(row?);
        }
        Ok(reservations)
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(SELECT_BY_DATE)?;
        let rows = stmt.query_map(params![date_to_sql(date)], row_to_reservation)?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(row?);
        }
        Ok(reservations)
    }

    fn find_by_user(&self, user: &UserId) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(SELECT_BY_USER)?;
        let rows = stmt.query_map(params![user.as_str()], row_to_reservation)?;

        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(row?);
        }
        Ok(reservations)
    }
}

#[cfg(test)]
mod tests {
    use crate::database::test_util::{create_test_database, create_test_reservation};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_and_list() {
        let mut db = create_test_database();
        let reservation = create_test_reservation(date(2026, 8, 10), 12, "alice");

        db.create_reservation(&reservation).unwrap();

        let all = db.list_all_reservations().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].booked_at(), date(2026, 8, 10));
        assert_eq!(all[0].spot().value(), 12);
        assert_eq!(all[0].user().as_str(), "alice");
    }

    #[test]
    fn test_create_conflict_maps_to_spot_already_booked() {
        let mut db = create_test_database();
        let first = create_test_reservation(date(2026, 8, 10), 12, "alice");
        let second = create_test_reservation(date(2026, 8, 10), 12, "bob");

        db.create_reservation(&first).unwrap();
        let err = db.create_reservation(&second).unwrap_err();

        assert!(matches!(err, Error::SpotAlreadyBooked { .. }));
        assert_eq!(db.list_all_reservations().unwrap().len(), 1);
    }

    #[test]
    fn test_same_spot_different_date_allowed() {
        let mut db = create_test_database();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 12, "alice"))
            .unwrap();
        db.create_reservation(&create_test_reservation(date(2026, 8, 11), 12, "alice"))
            .unwrap();

        assert_eq!(db.list_all_reservations().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_reservation() {
        let mut db = create_test_database();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 12, "alice"))
            .unwrap();

        db.delete_reservation(date(2026, 8, 10), SpotId::try_from(12).unwrap())
            .unwrap();
        assert!(db.list_all_reservations().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_reservation_not_found() {
        let mut db = create_test_database();
        let err = db
            .delete_reservation(date(2026, 8, 10), SpotId::try_from(12).unwrap())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_by_date_and_spot() {
        let mut db = create_test_database();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 12, "alice"))
            .unwrap();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 13, "bob"))
            .unwrap();

        let found = db
            .find_by_date_and_spot(date(2026, 8, 10), SpotId::try_from(12).unwrap())
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user().as_str(), "alice");

        let none = db
            .find_by_date_and_spot(date(2026, 8, 11), SpotId::try_from(12).unwrap())
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_find_by_date() {
        let mut db = create_test_database();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 12, "alice"))
            .unwrap();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 13, "bob"))
            .unwrap();
        db.create_reservation(&create_test_reservation(date(2026, 8, 11), 12, "carol"))
            .unwrap();

        let found = db.find_by_date(date(2026, 8, 10)).unwrap();
        assert_eq!(found.len(), 2);
        // Ordered by spot
        assert_eq!(found[0].spot().value(), 12);
        assert_eq!(found[1].spot().value(), 13);
    }

    #[test]
    fn test_find_by_user() {
        let mut db = create_test_database();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 12, "alice"))
            .unwrap();
        db.create_reservation(&create_test_reservation(date(2026, 8, 20), 3, "alice"))
            .unwrap();
        db.create_reservation(&create_test_reservation(date(2026, 8, 10), 13, "bob"))
            .unwrap();

        let found = db.find_by_user(&UserId::new("alice").unwrap()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.user().as_str() == "alice"));
    }

    #[test]
    fn test_created_at_round_trips() {
        let mut db = create_test_database();
        let ts = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let reservation = create_test_reservation(date(2026, 8, 10), 12, "alice").with_created_at(ts);

        db.create_reservation(&reservation).unwrap();

        let all = db.list_all_reservations().unwrap();
        assert_eq!(all[0].created_at(), ts);
    }

    #[test]
    fn test_timestamp_conversion_round_trip() {
        let ts = SystemTime::UNIX_EPOCH + Duration::from_secs(1_234_567);
        let secs = systemtime_to_unix_secs(ts).unwrap();
        assert_eq!(secs, 1_234_567);
        assert_eq!(unix_secs_to_systemtime(secs), ts);
    }
}
