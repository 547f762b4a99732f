//! Storage collaborator contract for the validator.
//!
//! The validator reads existing reservations through this narrow query
//! interface and never writes. Any persistence technology satisfying the
//! three queries is interchangeable; the library ships a SQLite-backed
//! implementation in [`crate::database`].

// The generated mock is a test-only public item without documentation
#![cfg_attr(test, allow(missing_docs))]

use chrono::NaiveDate;

use crate::error::Result;
use crate::reservation::{Reservation, SpotId, UserId};

/// Read access to the set of accepted reservations.
///
/// Implementations must be safe for repeated reads: none of the queries
/// may mutate stored state.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Returns all reservations for the given date and spot.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn find_by_date_and_spot(&self, date: NaiveDate, spot: SpotId) -> Result<Vec<Reservation>>;

    /// Returns all reservations for the given date.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>>;

    /// Returns all reservations made by the given user, on any date.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage query fails.
    fn find_by_user(&self, user: &UserId) -> Result<Vec<Reservation>>;
}
