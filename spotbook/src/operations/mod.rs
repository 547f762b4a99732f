//! Booking operations over the reservation database.
//!
//! The library owns the validate-then-persist workflow so that callers
//! (such as the CLI) stay thin: [`book`] runs the full rule validation
//! against the database and inserts the reservation on success, and
//! [`cancel`] removes one. Booking supports dry-run mode, which validates
//! without writing.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use spotbook::database::{Database, DatabaseConfig};
//! use spotbook::operations::{book, BookOptions};
//! use spotbook::{SpotId, SystemClock, UserId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/spotbook.db")).unwrap();
//! let options = BookOptions::new(
//!     NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
//!     SpotId::try_from(12).unwrap(),
//!     UserId::new("alice").unwrap(),
//! );
//!
//! let outcome = book(&mut db, &SystemClock, &options).unwrap();
//! println!("booked {}", outcome.reservation);
//! ```

pub mod book;
pub mod cancel;

pub use book::{book, BookOptions, BookOutcome};
pub use cancel::cancel;
