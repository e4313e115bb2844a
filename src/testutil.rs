//! Shared unit-test fixtures.

use chrono::NaiveTime;

/// The 09:00 default start time used across test modules.
pub fn nine_am() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid constant time")
}
