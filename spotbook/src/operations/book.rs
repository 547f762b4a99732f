//! Booking operation: validate a candidate reservation and persist it.

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::database::Database;
use crate::error::Result;
use crate::reservation::{Reservation, SpotId, UserId};
use crate::validate::ReservationValidator;

/// Options for a booking operation.
#[derive(Debug, Clone)]
pub struct BookOptions {
    /// The date to reserve.
    pub date: NaiveDate,

    /// The spot to reserve.
    pub spot: SpotId,

    /// The user making the reservation.
    pub user: UserId,

    /// Validate only; do not write the reservation.
    pub dry_run: bool,
}

impl BookOptions {
    /// Creates booking options for the given date, spot, and user.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use spotbook::operations::BookOptions;
    /// use spotbook::{SpotId, UserId};
    ///
    /// let options = BookOptions::new(
    ///     NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
    ///     SpotId::try_from(12).unwrap(),
    ///     UserId::new("alice").unwrap(),
    /// );
    /// assert!(!options.dry_run);
    /// ```
    #[must_use]
    pub const fn new(date: NaiveDate, spot: SpotId, user: UserId) -> Self {
        Self {
            date,
            spot,
            user,
            dry_run: false,
        }
    }

    /// Sets the dry-run flag.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of a booking operation.
#[derive(Debug, Clone)]
pub struct BookOutcome {
    /// The reservation that was created (or would be, in dry-run mode).
    pub reservation: Reservation,

    /// Whether this was a dry run (no write performed).
    pub dry_run: bool,
}

/// Validates a candidate reservation and stores it.
///
/// All three booking rules are checked in order (spot availability, daily
/// limits, weekly per-user restriction); the first violation aborts the
/// booking. In dry-run mode the validation still runs in full but nothing
/// is written.
///
/// # Errors
///
/// Returns a rule violation if the candidate is rejected, or a database
/// error if a query or the insert fails.
pub fn book(db: &mut Database, clock: &dyn Clock, options: &BookOptions) -> Result<BookOutcome> {
    let candidate = Reservation::new(options.date, options.spot, options.user.clone());

    ReservationValidator::new(&*db, clock).validate(&candidate)?;

    if options.dry_run {
        log::debug!("dry run, not storing: {candidate}");
        return Ok(BookOutcome {
            reservation: candidate,
            dry_run: true,
        });
    }

    db.create_reservation(&candidate)?;
    Ok(BookOutcome {
        reservation: candidate,
        dry_run: false,
    })
}
