//! Time source abstraction for validation.
//!
//! The booking rules compare the requested date against "today", so the
//! current-date read is injected through the [`Clock`] trait rather than
//! taken from ambient system time. Production code uses [`SystemClock`];
//! tests and dry runs can pin the date with [`FixedClock`].

use chrono::NaiveDate;

/// A source of the current calendar date.
pub trait Clock {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// A clock backed by the local system time.
///
/// # Examples
///
/// ```
/// use spotbook::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let today = clock.today();
/// assert!(today.and_hms_opt(0, 0, 0).is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use spotbook::{Clock, FixedClock};
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap());
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 8, 10).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock that always reports the given date.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
