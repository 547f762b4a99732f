//! Cancellation operation: remove a stored reservation.

use chrono::NaiveDate;

use crate::database::Database;
use crate::error::Result;
use crate::reservation::SpotId;

/// Removes the reservation for the given date and spot.
///
/// Cancellation is keyed the same way the uniqueness rule is: one
/// reservation per `(date, spot)` pair.
///
/// # Errors
///
/// Returns [`Error::NotFound`](crate::Error::NotFound) if no reservation
/// exists for the pair, or a database error if the delete fails.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use spotbook::database::{Database, DatabaseConfig};
/// use spotbook::operations::cancel;
/// use spotbook::SpotId;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/spotbook.db")).unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
/// cancel(&mut db, date, SpotId::try_from(12).unwrap()).unwrap();
/// ```
pub fn cancel(db: &mut Database, date: NaiveDate, spot: SpotId) -> Result<()> {
    db.delete_reservation(date, spot)?;
    log::debug!("cancelled reservation for spot {spot} on {date}");
    Ok(())
}
