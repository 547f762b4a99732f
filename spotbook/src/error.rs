//! Error types for the spotbook library.
//!
//! This module provides the error hierarchy for all operations in the
//! spotbook library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::reservation::{SpotId, UserId};

/// Result type alias for operations that may fail with a spotbook error.
///
/// # Examples
///
/// ```
/// use spotbook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(12)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the spotbook library.
///
/// The first four variants are booking-rule violations: rejections of a
/// candidate reservation, carrying the data needed to explain the refusal
/// to an end user. The remaining variants cover storage, configuration,
/// and I/O failures.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested spot already has a reservation on the requested date.
    #[error("spot {spot} is already booked on {date}")]
    SpotAlreadyBooked {
        /// The spot that was requested.
        spot: SpotId,
        /// The date that was requested.
        date: NaiveDate,
    },

    /// The requested date has reached its maximum reservation count.
    #[error("reservation limit of {limit} reached for {date}")]
    DailyCapacityExceeded {
        /// The date that is fully booked.
        date: NaiveDate,
        /// The limit that applies on that date (6 on Fridays, 7 otherwise).
        limit: usize,
    },

    /// The requested date is earlier than the minimum allowed lead time.
    #[error("reservations open one day ahead: earliest bookable date is {earliest}")]
    LeadTimeViolation {
        /// The date that was requested.
        date: NaiveDate,
        /// The earliest date that can currently be booked.
        earliest: NaiveDate,
    },

    /// The user already holds a reservation in the same ISO week.
    #[error("user {user} already has a reservation in week {week} of {year}")]
    DuplicateWeeklyReservation {
        /// The user who requested the reservation.
        user: UserId,
        /// The ISO week number of the requested date.
        week: u32,
        /// The ISO week-numbering year of the requested date.
        year: i32,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A field-level validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::reservation::InvalidSpotError> for Error {
    fn from(err: crate::reservation::InvalidSpotError) -> Self {
        Self::Validation {
            field: "spot".into(),
            message: err.reason,
        }
    }
}

impl Error {
    /// Check if error is a booking-rule violation.
    ///
    /// Rule violations are rejections of a candidate reservation rather
    /// than operational failures; callers typically surface them to the
    /// end user instead of treating them as faults.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use spotbook::Error;
    ///
    /// let err = Error::DailyCapacityExceeded {
    ///     date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
    ///     limit: 7,
    /// };
    /// assert!(err.is_rule_violation());
    /// ```
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::SpotAlreadyBooked { .. }
                | Self::DailyCapacityExceeded { .. }
                | Self::LeadTimeViolation { .. }
                | Self::DuplicateWeeklyReservation { .. }
        )
    }

    /// Check if error indicates a resource that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use spotbook::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
