//! # Room Painting Estimate
//!
//! Prices a single rectangular room: four walls, minus door and window
//! openings, painted with a chosen number of coats.
//!
//! ## Assumptions
//!
//! - Walls only (ceiling and trim are not priced)
//! - Every door deducts 20 sq ft, every window 12 sq ft
//! - One gallon covers 350 sq ft per coat
//! - Labor and hours scale with the surface-condition prep multiplier
//! - A flat 20% markup is added to the subtotal
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use paint_core::clock::FixedClock;
//! use paint_core::estimate::{calculate, EstimateInput};
//! use paint_core::pricing::{PaintQuality, SurfaceCondition};
//!
//! let input = EstimateInput {
//!     length_ft: 10.0,
//!     width_ft: 10.0,
//!     height_ft: 8.0,
//!     doors: 1,
//!     windows: 2,
//!     condition: SurfaceCondition::Good,
//!     paint_quality: PaintQuality::Basic,
//!     coats: 2,
//! };
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
//! let result = calculate(&input, &clock).unwrap();
//!
//! assert_eq!(result.materials.gallons_needed, 2);
//! assert_eq!(result.totals.total, 1127.28);
//! ```

use serde::{Deserialize, Serialize};

use crate::clock::{format_estimate_date, Clock};
use crate::errors::{EstimateError, EstimateOutcome};
use crate::pricing::{PaintQuality, SurfaceCondition, PRICING};
use crate::units::{round_money, round_tenths, Feet, SquareFeet};

/// Default number of coats when the customer does not ask for one
pub const DEFAULT_COATS: u32 = 2;

/// Largest gallon count that still converts to and from f64 exactly (2^53)
pub const MAX_GALLONS: u64 = 1 << 53;

/// Input parameters for a room estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_ft": 10.0,
///   "width_ft": 10.0,
///   "height_ft": 8.0,
///   "doors": 1,
///   "windows": 2,
///   "condition": "good",
///   "paint_quality": "basic",
///   "coats": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Room length in feet
    pub length_ft: f64,

    /// Room width in feet
    pub width_ft: f64,

    /// Wall height in feet
    pub height_ft: f64,

    /// Number of doors
    pub doors: u32,

    /// Number of windows
    pub windows: u32,

    /// Surface condition (drives prep work)
    pub condition: SurfaceCondition,

    /// Paint tier (drives paint price and labor rate)
    pub paint_quality: PaintQuality,

    /// Number of coats
    pub coats: u32,
}

impl EstimateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateOutcome<()> {
        for (field, value) in [
            ("length", self.length_ft),
            ("width", self.width_ft),
            ("height", self.height_ft),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EstimateError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be a positive number of feet",
                ));
            }
        }
        if self.coats == 0 {
            return Err(EstimateError::invalid_input(
                "coats",
                "0",
                "At least one coat is required",
            ));
        }

        let rounded_gallons = (self.raw_gallons() + 0.5).round();
        if rounded_gallons.is_nan() || rounded_gallons > MAX_GALLONS as f64 {
            return Err(EstimateError::invalid_input(
                "length",
                self.length_ft.to_string(),
                "Room is too large to estimate",
            ));
        }

        let wall_area = self.wall_area();
        let opening_area = self.opening_area();
        if opening_area > wall_area {
            return Err(EstimateError::invalid_geometry(
                round_tenths(wall_area.0),
                round_tenths(opening_area.0),
            ));
        }
        Ok(())
    }

    /// Gross wall area: 2(L·H) + 2(W·H)
    pub fn wall_area(&self) -> SquareFeet {
        let height = Feet(self.height_ft);
        (Feet(self.length_ft) * height) * 2.0 + (Feet(self.width_ft) * height) * 2.0
    }

    /// Area taken up by doors and windows
    pub fn opening_area(&self) -> SquareFeet {
        SquareFeet::times(PRICING.door_area, self.doors) + SquareFeet::times(PRICING.window_area, self.windows)
    }

    /// Wall area left to paint
    pub fn paintable_area(&self) -> SquareFeet {
        self.wall_area() - self.opening_area()
    }

    /// Gallons of paint before rounding
    pub fn raw_gallons(&self) -> f64 {
        self.paintable_area().0 * f64::from(self.coats) / PRICING.coverage_sqft_per_gallon
    }
}

/// Echoed room geometry plus the computed areas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub doors: u32,
    pub windows: u32,
    /// Gross wall area (sq ft, 1 dp)
    pub wall_area: f64,
    /// Wall area net of openings (sq ft, 1 dp)
    pub paintable_area: f64,
}

/// Paint and supplies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialsBreakdown {
    /// Whole gallons to buy, never less than one
    pub gallons_needed: u64,
    pub paint_cost: f64,
    pub supplies_cost: f64,
    pub materials_total: f64,
}

/// Labor after prep adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborBreakdown {
    /// Estimated crew hours (1 dp)
    pub hours: f64,
    pub labor_cost: f64,
}

/// Customer-facing totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub markup: f64,
    pub total: f64,
}

/// Echoed job parameters and the estimate date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub condition: SurfaceCondition,
    pub paint_quality: PaintQuality,
    pub coats: u32,
    /// Long-form date, e.g. "March 05, 2025"
    pub date: String,
}

/// Results from an estimate. Money is rounded to cents, areas and hours
/// to one decimal place.
///
/// ## JSON Example
///
/// ```json
/// {
///   "room_info": { "length": 10.0, "width": 10.0, "height": 8.0, "doors": 1, "windows": 2,
///                  "wall_area": 320.0, "paintable_area": 276.0 },
///   "materials": { "gallons_needed": 2, "paint_cost": 70.0, "supplies_cost": 41.4,
///                  "materials_total": 111.4 },
///   "labor": { "hours": 2.2, "labor_cost": 828.0 },
///   "totals": { "subtotal": 939.4, "markup": 187.88, "total": 1127.28 },
///   "job_details": { "condition": "good", "paint_quality": "basic", "coats": 2,
///                    "date": "March 05, 2025" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub room_info: RoomInfo,
    pub materials: MaterialsBreakdown,
    pub labor: LaborBreakdown,
    pub totals: Totals,
    pub job_details: JobDetails,
}

/// Calculate a room painting estimate.
///
/// # Arguments
///
/// * `input` - Room geometry and job parameters
/// * `clock` - Source of the estimate date
///
/// # Returns
///
/// * `Ok(EstimateResult)` - Cost breakdown
/// * `Err(EstimateError)` - Non-positive dimensions, zero coats, a room too
///   large to count its gallons exactly, or openings larger than the walls
pub fn calculate(input: &EstimateInput, clock: &dyn Clock) -> EstimateOutcome<EstimateResult> {
    input.validate()?;

    let pricing = &*PRICING;

    // === Areas ===
    let wall_area = input.wall_area();
    let paintable_area = input.paintable_area().0;
    let prep_multiplier = pricing.prep_multiplier(input.condition);

    // === Materials ===
    // Half-gallon bias before rounding, then a one-gallon floor.
    // validate() caps the count at MAX_GALLONS, so both casts are exact.
    let gallons_needed = ((input.raw_gallons() + 0.5).round() as u64).max(1);

    let paint_cost = gallons_needed as f64 * pricing.paint_price_per_gallon(input.paint_quality);
    let supplies_cost = paintable_area * pricing.supplies_per_sqft;
    let materials_total = paint_cost + supplies_cost;

    // === Labor ===
    let base_labor_cost = paintable_area * pricing.labor_rate_per_sqft(input.paint_quality);
    let total_labor = base_labor_cost * prep_multiplier;
    let hours = paintable_area / pricing.sqft_per_hour * prep_multiplier;

    // === Totals ===
    let subtotal = materials_total + total_labor;
    let markup = subtotal * pricing.markup_rate;
    let total = subtotal + markup;

    Ok(EstimateResult {
        room_info: RoomInfo {
            length: input.length_ft,
            width: input.width_ft,
            height: input.height_ft,
            doors: input.doors,
            windows: input.windows,
            wall_area: round_tenths(wall_area.0),
            paintable_area: round_tenths(paintable_area),
        },
        materials: MaterialsBreakdown {
            gallons_needed,
            paint_cost: round_money(paint_cost),
            supplies_cost: round_money(supplies_cost),
            materials_total: round_money(materials_total),
        },
        labor: LaborBreakdown {
            hours: round_tenths(hours),
            labor_cost: round_money(total_labor),
        },
        totals: Totals {
            subtotal: round_money(subtotal),
            markup: round_money(markup),
            total: round_money(total),
        },
        job_details: JobDetails {
            condition: input.condition,
            paint_quality: input.paint_quality,
            coats: input.coats,
            date: format_estimate_date(clock.today()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap())
    }

    fn sample_input() -> EstimateInput {
        EstimateInput {
            length_ft: 10.0,
            width_ft: 10.0,
            height_ft: 8.0,
            doors: 1,
            windows: 2,
            condition: SurfaceCondition::Good,
            paint_quality: PaintQuality::Basic,
            coats: 2,
        }
    }

    #[test]
    fn test_reference_room() {
        let result = calculate(&sample_input(), &clock()).unwrap();

        assert_eq!(result.room_info.wall_area, 320.0);
        assert_eq!(result.room_info.paintable_area, 276.0);

        assert_eq!(result.materials.gallons_needed, 2);
        assert_eq!(result.materials.paint_cost, 70.0);
        assert_eq!(result.materials.supplies_cost, 41.4);
        assert_eq!(result.materials.materials_total, 111.4);

        assert_eq!(result.labor.labor_cost, 828.0);
        assert_eq!(result.labor.hours, 2.2);

        assert_eq!(result.totals.subtotal, 939.4);
        assert_eq!(result.totals.markup, 187.88);
        assert_eq!(result.totals.total, 1127.28);

        assert_eq!(result.job_details.condition, SurfaceCondition::Good);
        assert_eq!(result.job_details.paint_quality, PaintQuality::Basic);
        assert_eq!(result.job_details.coats, 2);
        assert_eq!(result.job_details.date, "March 05, 2025");
    }

    #[test]
    fn test_echoes_room_info() {
        let result = calculate(&sample_input(), &clock()).unwrap();
        assert_eq!(result.room_info.length, 10.0);
        assert_eq!(result.room_info.width, 10.0);
        assert_eq!(result.room_info.height, 8.0);
        assert_eq!(result.room_info.doors, 1);
        assert_eq!(result.room_info.windows, 2);
    }

    #[test]
    fn test_deterministic() {
        let input = sample_input();
        let first = calculate(&input, &clock()).unwrap();
        for _ in 0..5 {
            assert_eq!(calculate(&input, &clock()).unwrap(), first);
        }
    }

    #[test]
    fn test_no_openings_paints_whole_wall() {
        let input = EstimateInput {
            doors: 0,
            windows: 0,
            length_ft: 13.5,
            width_ft: 11.25,
            ..sample_input()
        };
        assert_eq!(input.paintable_area(), input.wall_area());

        let result = calculate(&input, &clock()).unwrap();
        assert_eq!(result.room_info.paintable_area, result.room_info.wall_area);
    }

    #[test]
    fn test_minimum_one_gallon() {
        let input = EstimateInput {
            length_ft: 2.0,
            width_ft: 2.0,
            height_ft: 2.0,
            doors: 0,
            windows: 0,
            coats: 1,
            ..sample_input()
        };
        let result = calculate(&input, &clock()).unwrap();
        assert!(result.room_info.paintable_area > 0.0);
        assert_eq!(result.materials.gallons_needed, 1);
    }

    #[test]
    fn test_zero_paintable_area_still_buys_a_gallon() {
        // 2(4·5) + 2(6·5) = 100 sq ft; 2 doors + 5 windows = 40 + 60 = 100
        let input = EstimateInput {
            length_ft: 4.0,
            width_ft: 6.0,
            height_ft: 5.0,
            doors: 2,
            windows: 5,
            ..sample_input()
        };
        let result = calculate(&input, &clock()).unwrap();
        assert_eq!(result.room_info.paintable_area, 0.0);
        assert_eq!(result.materials.gallons_needed, 1);
        assert_eq!(result.labor.labor_cost, 0.0);
        assert_eq!(result.totals.total, 42.0); // 35 paint + 20% markup
    }

    #[test]
    fn test_gallon_rounding_bias() {
        // 350 sq ft, one coat: raw 1.0 -> 1.5 -> rounds up to 2
        let input = EstimateInput {
            length_ft: 87.5,
            width_ft: 87.5,
            height_ft: 1.0,
            doors: 0,
            windows: 0,
            coats: 1,
            ..sample_input()
        };
        assert_eq!(input.paintable_area(), SquareFeet(350.0));
        let result = calculate(&input, &clock()).unwrap();
        assert_eq!(result.materials.gallons_needed, 2);
    }

    #[test]
    fn test_coats_scale_paint() {
        let one = calculate(&EstimateInput { coats: 1, ..sample_input() }, &clock()).unwrap();
        let three = calculate(&EstimateInput { coats: 3, ..sample_input() }, &clock()).unwrap();
        // 276/350 = 0.79 -> 1; 828/350 = 2.37 -> 3
        assert_eq!(one.materials.gallons_needed, 1);
        assert_eq!(three.materials.gallons_needed, 3);
        // Labor does not depend on coats
        assert_eq!(one.labor, three.labor);
    }

    #[test]
    fn test_monotonic_in_dimensions() {
        let base = sample_input();
        let axes: [fn(&EstimateInput, f64) -> EstimateInput; 3] = [
            |b, grow| EstimateInput { length_ft: b.length_ft + grow, ..b.clone() },
            |b, grow| EstimateInput { width_ft: b.width_ft + grow, ..b.clone() },
            |b, grow| EstimateInput { height_ft: b.height_ft + grow, ..b.clone() },
        ];

        for grow_along in axes {
            let mut previous = calculate(&base, &clock()).unwrap();
            for step in 1..=20 {
                let input = grow_along(&base, f64::from(step) * 0.75);
                let result = calculate(&input, &clock()).unwrap();

                assert!(result.room_info.wall_area >= previous.room_info.wall_area);
                assert!(result.room_info.paintable_area >= previous.room_info.paintable_area);
                assert!(result.materials.gallons_needed >= previous.materials.gallons_needed);
                assert!(result.materials.materials_total >= previous.materials.materials_total);
                assert!(result.labor.labor_cost >= previous.labor.labor_cost);
                assert!(result.totals.total >= previous.totals.total);

                previous = result;
            }
        }
    }

    #[test]
    fn test_tier_ordering() {
        for condition in SurfaceCondition::ALL {
            let totals: Vec<f64> = PaintQuality::ALL
                .iter()
                .map(|&paint_quality| {
                    let input = EstimateInput {
                        condition,
                        paint_quality,
                        ..sample_input()
                    };
                    calculate(&input, &clock()).unwrap().totals.total
                })
                .collect();
            assert!(totals[0] <= totals[1], "basic should not exceed premium");
            assert!(totals[1] <= totals[2], "premium should not exceed luxury");
        }
    }

    #[test]
    fn test_markup_identity() {
        for condition in SurfaceCondition::ALL {
            for paint_quality in PaintQuality::ALL {
                let input = EstimateInput {
                    length_ft: 14.3,
                    width_ft: 11.7,
                    height_ft: 9.1,
                    condition,
                    paint_quality,
                    ..sample_input()
                };
                let r = calculate(&input, &clock()).unwrap();
                assert!((r.totals.total - r.totals.subtotal * 1.2).abs() < 0.011);
                assert!((r.totals.subtotal - (r.materials.materials_total + r.labor.labor_cost)).abs() < 0.011);
                assert!((r.totals.total - (r.totals.subtotal + r.totals.markup)).abs() < 0.011);
            }
        }
    }

    #[test]
    fn test_prep_scales_labor_and_hours() {
        let excellent = calculate(
            &EstimateInput { condition: SurfaceCondition::Excellent, ..sample_input() },
            &clock(),
        )
        .unwrap();
        let poor = calculate(
            &EstimateInput { condition: SurfaceCondition::Poor, ..sample_input() },
            &clock(),
        )
        .unwrap();

        assert_eq!(excellent.labor.labor_cost, 690.0);
        assert_eq!(poor.labor.labor_cost, 1380.0);
        assert_eq!(excellent.labor.hours, 1.8);
        assert_eq!(poor.labor.hours, 3.7);
        // Materials are independent of condition
        assert_eq!(excellent.materials, poor.materials);
    }

    #[test]
    fn test_openings_exceeding_walls_rejected() {
        let input = EstimateInput {
            length_ft: 2.0,
            width_ft: 2.0,
            height_ft: 2.0,
            doors: 1,
            windows: 0,
            ..sample_input()
        };
        // 16 sq ft of wall, 20 sq ft of door
        let err = calculate(&input, &clock()).unwrap_err();
        assert_eq!(err, EstimateError::invalid_geometry(16.0, 20.0));
    }

    #[test]
    fn test_validation_rejects_bad_dimensions() {
        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let input = EstimateInput { height_ft: bad, ..sample_input() };
            let err = calculate(&input, &clock()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert_eq!(err.field(), Some("height"));
        }
    }

    #[test]
    fn test_huge_room_keeps_exact_gallons() {
        let input = EstimateInput {
            length_ft: 1e6,
            width_ft: 1e6,
            height_ft: 1e6,
            doors: 0,
            windows: 0,
            ..sample_input()
        };
        let result = calculate(&input, &clock()).unwrap();
        // 4e12 sq ft * 2 coats / 350 = 22857142857.14 -> +0.5 -> 22857142858
        assert_eq!(result.materials.gallons_needed, 22_857_142_858);
        assert_eq!(result.materials.paint_cost, 800_000_000_030.0);
    }

    #[test]
    fn test_room_beyond_gallon_range_rejected() {
        for size in [1e9, 1e200] {
            let input = EstimateInput {
                length_ft: size,
                width_ft: size,
                height_ft: size,
                ..sample_input()
            };
            let err = calculate(&input, &clock()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert_eq!(err.field(), Some("length"));
        }
    }

    #[test]
    fn test_quarter_foot_room_rounds_ties_to_even() {
        // 2(10.25·8.5) + 2(10·8.5) = 344.25 exactly
        let input = EstimateInput {
            length_ft: 10.25,
            width_ft: 10.0,
            height_ft: 8.5,
            doors: 0,
            windows: 0,
            ..sample_input()
        };
        assert_eq!(input.wall_area(), SquareFeet(344.25));

        let result = calculate(&input, &clock()).unwrap();
        assert_eq!(result.room_info.wall_area, 344.2);
        assert_eq!(result.room_info.paintable_area, 344.2);
    }

    #[test]
    fn test_validation_rejects_zero_coats() {
        let input = EstimateInput { coats: 0, ..sample_input() };
        let err = calculate(&input, &clock()).unwrap_err();
        assert_eq!(err.field(), Some("coats"));
    }

    #[test]
    fn test_result_json_shape() {
        let result = calculate(&sample_input(), &clock()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["materials"]["gallons_needed"], 2);
        assert_eq!(json["totals"]["total"], 1127.28);
        assert_eq!(json["job_details"]["paint_quality"], "basic");
        assert_eq!(json["job_details"]["condition"], "good");
        assert_eq!(json["job_details"]["date"], "March 05, 2025");

        let roundtrip: EstimateResult = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip, result);
    }
}
