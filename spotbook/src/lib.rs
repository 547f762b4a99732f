#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # spotbook
//!
//! A library for validating and managing campsite spot bookings.
//!
//! This library provides the booking rule set, the domain types, and a
//! SQLite-backed reservation store. A candidate reservation is accepted
//! when its spot is free on the requested date, the date is below its
//! daily reservation limit (7, or 6 on Fridays), the date is at least one
//! day ahead, and the user holds no other reservation in the same ISO
//! week.
//!
//! ## Core Types
//!
//! - [`Reservation`], [`SpotId`], and [`UserId`]: booking domain types
//! - [`ReservationValidator`] and [`ReservationStore`]: the rule set and
//!   the read contract it validates against
//! - [`Clock`], [`SystemClock`], and [`FixedClock`]: injected time source
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use spotbook::{SpotId, UserId};
//!
//! // Create a valid spot identifier
//! let spot = SpotId::try_from(12).unwrap();
//! assert_eq!(spot.value(), 12);
//!
//! // User identifiers are trimmed and must be non-empty
//! let user = UserId::new("alice").unwrap();
//! assert_eq!(user.as_str(), "alice");
//! ```

pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod store;
pub mod validate;

// Re-export key types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{book, cancel, BookOptions, BookOutcome};
pub use reservation::{Reservation, SpotId, UserId};
pub use store::ReservationStore;
pub use validate::{ReservationValidator, DAILY_CAPACITY, FRIDAY_CAPACITY};
