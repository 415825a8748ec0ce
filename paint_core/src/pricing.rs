//! # Pricing Tables
//!
//! Rates and coefficients used by the estimator. Paint tier and surface
//! condition are closed enums; every variant maps exhaustively to its
//! coefficients, so an unknown tier can only be rejected at the parse
//! boundary and never reaches a calculation.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::pricing::{PaintQuality, SurfaceCondition, PRICING};
//!
//! let tier = PaintQuality::from_str_flexible("Premium").unwrap();
//! assert_eq!(PRICING.paint_price_per_gallon(tier), 55.0);
//! assert_eq!(PRICING.prep_multiplier(SurfaceCondition::Poor), 2.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateOutcome};
use crate::units::SquareFeet;

/// Paint tier, selecting both the price per gallon and the labor rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintQuality {
    /// Contractor-grade paint
    #[default]
    Basic,
    /// Mid-range paint
    Premium,
    /// Top-shelf paint
    Luxury,
}

impl PaintQuality {
    /// All tiers, cheapest first, for form rendering
    pub const ALL: [PaintQuality; 3] = [PaintQuality::Basic, PaintQuality::Premium, PaintQuality::Luxury];

    /// Form/wire code (e.g., "basic")
    pub fn code(&self) -> &'static str {
        match self {
            PaintQuality::Basic => "basic",
            PaintQuality::Premium => "premium",
            PaintQuality::Luxury => "luxury",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PaintQuality::Basic => "Basic",
            PaintQuality::Premium => "Premium",
            PaintQuality::Luxury => "Luxury",
        }
    }

    /// Parse from a form value, ignoring case and surrounding whitespace
    pub fn from_str_flexible(s: &str) -> EstimateOutcome<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|q| q.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let codes: Vec<&str> = Self::ALL.iter().map(|q| q.code()).collect();
                EstimateError::unknown_option("paint_quality", s, &codes)
            })
    }
}

impl std::fmt::Display for PaintQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Surface condition, driving how much prep work the walls need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceCondition {
    /// Clean, sound surface
    Excellent,
    /// Minor touch-ups
    #[default]
    Good,
    /// Patching and sanding
    Fair,
    /// Heavy repair before painting
    Poor,
}

impl SurfaceCondition {
    /// All conditions, best first, for form rendering
    pub const ALL: [SurfaceCondition; 4] = [
        SurfaceCondition::Excellent,
        SurfaceCondition::Good,
        SurfaceCondition::Fair,
        SurfaceCondition::Poor,
    ];

    /// Form/wire code (e.g., "good")
    pub fn code(&self) -> &'static str {
        match self {
            SurfaceCondition::Excellent => "excellent",
            SurfaceCondition::Good => "good",
            SurfaceCondition::Fair => "fair",
            SurfaceCondition::Poor => "poor",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SurfaceCondition::Excellent => "Excellent",
            SurfaceCondition::Good => "Good",
            SurfaceCondition::Fair => "Fair",
            SurfaceCondition::Poor => "Poor",
        }
    }

    /// Parse from a form value, ignoring case and surrounding whitespace
    pub fn from_str_flexible(s: &str) -> EstimateOutcome<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let codes: Vec<&str> = Self::ALL.iter().map(|c| c.code()).collect();
                EstimateError::unknown_option("condition", s, &codes)
            })
    }
}

impl std::fmt::Display for SurfaceCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-tier rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierRates {
    /// Paint price ($/gal)
    pub price_per_gallon: f64,
    /// Labor rate ($/sq ft) before prep adjustment
    pub labor_per_sqft: f64,
}

/// The complete, process-wide price sheet.
#[derive(Debug, Clone, Serialize)]
pub struct PricingTable {
    pub basic: TierRates,
    pub premium: TierRates,
    pub luxury: TierRates,

    /// Prep multipliers by surface condition
    pub prep_excellent: f64,
    pub prep_good: f64,
    pub prep_fair: f64,
    pub prep_poor: f64,

    /// Area deducted per door
    pub door_area: SquareFeet,
    /// Area deducted per window
    pub window_area: SquareFeet,
    /// Coverage of one gallon for one coat (sq ft)
    pub coverage_sqft_per_gallon: f64,
    /// Brushes, rollers, drop cloths, tape ($/sq ft)
    pub supplies_per_sqft: f64,
    /// Base painting productivity before prep (sq ft/hour)
    pub sqft_per_hour: f64,
    /// Margin added on top of the subtotal (fraction)
    pub markup_rate: f64,
}

impl PricingTable {
    /// Rates for a paint tier
    pub fn tier(&self, quality: PaintQuality) -> TierRates {
        match quality {
            PaintQuality::Basic => self.basic,
            PaintQuality::Premium => self.premium,
            PaintQuality::Luxury => self.luxury,
        }
    }

    /// Paint price per gallon for a tier
    pub fn paint_price_per_gallon(&self, quality: PaintQuality) -> f64 {
        self.tier(quality).price_per_gallon
    }

    /// Labor rate per square foot for a tier
    pub fn labor_rate_per_sqft(&self, quality: PaintQuality) -> f64 {
        self.tier(quality).labor_per_sqft
    }

    /// Prep multiplier for a surface condition
    pub fn prep_multiplier(&self, condition: SurfaceCondition) -> f64 {
        match condition {
            SurfaceCondition::Excellent => self.prep_excellent,
            SurfaceCondition::Good => self.prep_good,
            SurfaceCondition::Fair => self.prep_fair,
            SurfaceCondition::Poor => self.prep_poor,
        }
    }
}

/// Standard price sheet
pub static PRICING: Lazy<PricingTable> = Lazy::new(|| PricingTable {
    basic: TierRates {
        price_per_gallon: 35.0,
        labor_per_sqft: 2.5,
    },
    premium: TierRates {
        price_per_gallon: 55.0,
        labor_per_sqft: 3.5,
    },
    luxury: TierRates {
        price_per_gallon: 75.0,
        labor_per_sqft: 4.5,
    },
    prep_excellent: 1.0,
    prep_good: 1.2,
    prep_fair: 1.5,
    prep_poor: 2.0,
    door_area: SquareFeet(20.0),
    window_area: SquareFeet(12.0),
    coverage_sqft_per_gallon: 350.0,
    supplies_per_sqft: 0.15,
    sqft_per_hour: 150.0,
    markup_rate: 0.20,
});
