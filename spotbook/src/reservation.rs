//! Reservation types for tracking spot bookings.
//!
//! This module provides the domain types for spot reservations: the spot
//! and user identifiers with their construction-time validation, and the
//! `Reservation` record itself.

use std::fmt;
use std::time::SystemTime;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An identifier for a bookable physical spot.
///
/// Spots are numbered starting at 1; zero is not a valid spot number.
///
/// # Examples
///
/// ```
/// use spotbook::SpotId;
///
/// let spot = SpotId::try_from(12).unwrap();
/// assert_eq!(spot.value(), 12);
/// assert_eq!(format!("{spot}"), "12");
///
/// assert!(SpotId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(u32);

impl SpotId {
    /// Returns the numeric spot number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SpotId {
    type Error = InvalidSpotError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(InvalidSpotError {
                value,
                reason: "spot numbers start at 1".to_string(),
            });
        }
        Ok(Self(value))
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid spot numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSpotError {
    /// The invalid spot value.
    pub value: u32,
    /// The reason the value is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSpotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid spot {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSpotError {}

/// An identifier for a booking user.
///
/// User identifiers are trimmed of surrounding whitespace and must be
/// non-empty after trimming.
///
/// # Examples
///
/// ```
/// use spotbook::UserId;
///
/// let user = UserId::new("alice").unwrap();
/// assert_eq!(user.as_str(), "alice");
///
/// // Surrounding whitespace is trimmed
/// let user = UserId::new("  bob  ").unwrap();
/// assert_eq!(user.as_str(), "bob");
///
/// // Empty identifiers are rejected
/// assert!(UserId::new("").is_err());
/// assert!(UserId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new user identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming
    /// whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "user".into(),
                message: "user must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A spot reservation.
///
/// A reservation ties a spot to a user for a single calendar date. The
/// same type serves both candidates under validation and rows persisted
/// in the store; a candidate becomes persisted only after it passes
/// validation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use spotbook::{Reservation, SpotId, UserId};
///
/// let reservation = Reservation::new(
///     NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
///     SpotId::try_from(12).unwrap(),
///     UserId::new("alice").unwrap(),
/// );
/// assert_eq!(reservation.spot().value(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    booked_at: NaiveDate,
    spot: SpotId,
    user: UserId,
    created_at: SystemTime,
}

impl Reservation {
    /// Creates a new reservation for the given date, spot, and user.
    ///
    /// The creation timestamp is set to the current time; use
    /// [`with_created_at`](Self::with_created_at) to override it when
    /// rehydrating a stored row.
    #[must_use]
    pub fn new(booked_at: NaiveDate, spot: SpotId, user: UserId) -> Self {
        Self {
            booked_at,
            spot,
            user,
            created_at: SystemTime::now(),
        }
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns the reserved calendar date.
    #[must_use]
    pub const fn booked_at(&self) -> NaiveDate {
        self.booked_at
    }

    /// Returns the reserved spot.
    #[must_use]
    pub const fn spot(&self) -> SpotId {
        self.spot
    }

    /// Returns the booking user.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spot {} on {} for {}",
            self.spot, self.booked_at, self.user
        )
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
