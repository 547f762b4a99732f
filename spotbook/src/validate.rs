//! Booking-rule validation.
//!
//! This module implements the rule set that decides whether a candidate
//! reservation may be accepted: spot availability on the requested date,
//! the daily capacity limit (reduced on Fridays), the one-day minimum lead
//! time, and the one-reservation-per-user-per-ISO-week restriction.
//!
//! The validator is stateless and read-only: each check is a pure function
//! of the candidate and the store contents at call time, so repeated calls
//! with unchanged storage yield the same result.

use chrono::{Datelike, Weekday};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::store::ReservationStore;

/// Maximum number of accepted reservations per date.
pub const DAILY_CAPACITY: usize = 7;

/// Maximum number of accepted reservations on a Friday.
pub const FRIDAY_CAPACITY: usize = 6;

/// Validates candidate reservations against the booking rules.
///
/// The validator borrows a read-only [`ReservationStore`] and a [`Clock`];
/// it owns no state of its own and never writes, so it is freely reusable
/// across calls.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use spotbook::database::{Database, DatabaseConfig};
/// use spotbook::{Reservation, ReservationValidator, SpotId, SystemClock, UserId};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/spotbook.db")).unwrap();
/// let clock = SystemClock;
/// let validator = ReservationValidator::new(&db, &clock);
///
/// let candidate = Reservation::new(
///     NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
///     SpotId::try_from(12).unwrap(),
///     UserId::new("alice").unwrap(),
/// );
/// validator.validate(&candidate).unwrap();
/// ```
pub struct ReservationValidator<'a, S: ReservationStore + ?Sized> {
    store: &'a S,
    clock: &'a dyn Clock,
}

impl<'a, S: ReservationStore + ?Sized> ReservationValidator<'a, S> {
    /// Creates a validator over the given store and clock.
    #[must_use]
    pub fn new(store: &'a S, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Checks that the candidate's spot is free on the requested date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SpotAlreadyBooked`] if any accepted reservation
    /// already holds the same `(date, spot)` pair, or a storage error if
    /// the query fails.
    pub fn check_spot(&self, candidate: &Reservation) -> Result<()> {
        let conflicting = self
            .store
            .find_by_date_and_spot(candidate.booked_at(), candidate.spot())?;

        if !conflicting.is_empty() {
            return Err(Error::SpotAlreadyBooked {
                spot: candidate.spot(),
                date: candidate.booked_at(),
            });
        }

        log::debug!(
            "spot {} free on {}",
            candidate.spot(),
            candidate.booked_at()
        );
        Ok(())
    }

    /// Checks the daily capacity limit and the minimum lead time.
    ///
    /// The two predicates are independent; capacity is evaluated first.
    /// The capacity count covers stored reservations only: the candidate
    /// itself is not yet persisted and never counts toward its own limit.
    /// The boundary is inclusive: a date holding exactly the limit already
    /// rejects the next candidate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DailyCapacityExceeded`] if the date already holds
    /// 7 reservations (6 if the date is a Friday), or
    /// [`Error::LeadTimeViolation`] if the date is earlier than tomorrow,
    /// or a storage error if the query fails.
    pub fn check_by_day(&self, candidate: &Reservation) -> Result<()> {
        let existing = self.store.find_by_date(candidate.booked_at())?;

        let limit = if candidate.booked_at().weekday() == Weekday::Fri {
            FRIDAY_CAPACITY
        } else {
            DAILY_CAPACITY
        };

        if existing.len() >= limit {
            return Err(Error::DailyCapacityExceeded {
                date: candidate.booked_at(),
                limit,
            });
        }

        // "Earlier than tomorrow" at date granularity
        let today = self.clock.today();
        if candidate.booked_at() <= today {
            return Err(Error::LeadTimeViolation {
                date: candidate.booked_at(),
                earliest: today.succ_opt().unwrap_or(today),
            });
        }

        log::debug!(
            "{} holds {} of {} reservations",
            candidate.booked_at(),
            existing.len(),
            limit
        );
        Ok(())
    }

    /// Checks that the user has no other reservation in the same ISO week.
    ///
    /// Both the candidate's date and each stored date are reduced to their
    /// ISO `(week, year)` pair, so late-December and early-January dates
    /// falling into an adjacent year's week compare correctly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateWeeklyReservation`] if the user already
    /// holds a reservation in the candidate's ISO week, or a storage error
    /// if the query fails.
    pub fn check_by_user_and_by_week(&self, candidate: &Reservation) -> Result<()> {
        let requested_week = candidate.booked_at().iso_week();

        for reservation in self.store.find_by_user(candidate.user())? {
            if reservation.booked_at().iso_week() == requested_week {
                return Err(Error::DuplicateWeeklyReservation {
                    user: candidate.user().clone(),
                    week: requested_week.week(),
                    year: requested_week.year(),
                });
            }
        }

        log::debug!(
            "user {} has no reservation in week {} of {}",
            candidate.user(),
            requested_week.week(),
            requested_week.year()
        );
        Ok(())
    }

    /// Runs all three checks in order, stopping at the first failure.
    ///
    /// The order is spot availability, then daily limits, then the weekly
    /// per-user restriction; the first failing check is the one surfaced.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation encountered, or a storage error if
    /// any query fails.
    pub fn validate(&self, candidate: &Reservation) -> Result<()> {
        self.check_spot(candidate)?;
        self.check_by_day(candidate)?;
        self.check_by_user_and_by_week(candidate)?;
        Ok(())
    }
}
