//! # Unit Types
//!
//! Type-safe wrappers for the quantities an estimate works with. These
//! stay lightweight (just f64 wrappers) and serialize as bare numbers.
//!
//! ## US Customary Units
//!
//! - Length: feet (ft)
//! - Area: square feet (sq ft)
//! - Volume of paint: gallons (gal)
//!
//! ## Example
//!
//! ```rust
//! use paint_core::units::{Feet, SquareFeet};
//!
//! let wall: SquareFeet = Feet(10.0) * Feet(8.0);
//! assert_eq!(wall, SquareFeet(80.0));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

// ============================================================================
// Length & Area
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFeet(pub f64);

impl Mul for Feet {
    type Output = SquareFeet;
    fn mul(self, rhs: Feet) -> SquareFeet {
        SquareFeet(self.0 * rhs.0)
    }
}

impl Add for SquareFeet {
    type Output = SquareFeet;
    fn add(self, rhs: SquareFeet) -> SquareFeet {
        SquareFeet(self.0 + rhs.0)
    }
}

impl Sub for SquareFeet {
    type Output = SquareFeet;
    fn sub(self, rhs: SquareFeet) -> SquareFeet {
        SquareFeet(self.0 - rhs.0)
    }
}

impl Mul<f64> for SquareFeet {
    type Output = SquareFeet;
    fn mul(self, rhs: f64) -> SquareFeet {
        SquareFeet(self.0 * rhs)
    }
}

impl SquareFeet {
    /// Area of `count` identical openings of `each` square feet
    pub fn times(each: SquareFeet, count: u32) -> SquareFeet {
        SquareFeet(each.0 * f64::from(count))
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to `places` decimal places.
///
/// Goes through the exact decimal expansion of `value`, so a value that
/// only looks like a tie (2.675 is stored as 2.67499...) rounds by its true
/// digits, and an exact tie (344.25) rounds to the even digit.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Round a dollar amount to cents
pub fn round_money(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round areas and hours to one decimal place
pub fn round_tenths(value: f64) -> f64 {
    round_to(value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_arithmetic() {
        let a = Feet(10.0) * Feet(8.0);
        let b = Feet(12.0) * Feet(8.0);
        assert_eq!(a + b, SquareFeet(176.0));
        assert_eq!(b - a, SquareFeet(16.0));
        assert_eq!(a * 2.0, SquareFeet(160.0));
    }

    #[test]
    fn test_openings_area() {
        assert_eq!(SquareFeet::times(SquareFeet(20.0), 3), SquareFeet(60.0));
        assert_eq!(SquareFeet::times(SquareFeet(12.0), 0), SquareFeet(0.0));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_tenths(2.208), 2.2);
        assert_eq!(round_money(187.880_000_000_000_02), 187.88);
        assert_eq!(round_money(-1.005_1), -1.01);
    }

    #[test]
    fn test_rounding_exact_ties_go_to_even() {
        assert_eq!(round_tenths(2.25), 2.2);
        assert_eq!(round_tenths(344.25), 344.2);
        assert_eq!(round_tenths(0.75), 0.8);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
    }

    #[test]
    fn test_rounding_uses_stored_digits() {
        // 2.675 is stored just below the tie, 1.005 likewise
        assert_eq!(round_money(2.675), 2.67);
        assert_eq!(round_money(1.005), 1.0);
        assert_eq!(round_tenths(-0.05), -0.1);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&SquareFeet(276.0)).unwrap();
        assert_eq!(json, "276.0");
    }
}
