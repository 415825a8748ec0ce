//! Date source for estimates.
//!
//! The estimate date is the only input not carried by `EstimateInput`, so
//! it is passed in as a capability. Production code uses [`SystemClock`];
//! tests pin the date with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Something that can tell today's date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Long-form date as shown on an estimate, e.g. "March 05, 2025"
pub fn format_estimate_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_format_estimate_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_estimate_date(date), "March 05, 2025");

        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_estimate_date(date), "October 16, 2026");
    }
}
