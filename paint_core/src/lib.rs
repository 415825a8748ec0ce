//! # paint_core - Painting Estimate Engine
//!
//! `paint_core` is the computational heart of Brushline: it prices a room
//! paint job from its dimensions, openings, surface condition, paint tier,
//! and coat count. All inputs and outputs are JSON-serializable, so the
//! same engine backs the web form, the CLI, and any scripted caller.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Injected clock**: The estimate date comes from a [`clock::Clock`]
//! - **Closed enums**: Paint tiers and conditions are parsed once, at the edge
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use paint_core::{calculate, EstimateRequest, SystemClock};
//!
//! let fields: HashMap<String, String> = [
//!     ("length", "10"), ("width", "10"), ("height", "8"),
//!     ("doors", "1"), ("windows", "2"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let request = EstimateRequest::from_fields(&fields).unwrap();
//! let result = calculate(&request.input, &SystemClock).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`estimate`] - Estimate input/result types and the `calculate` function
//! - [`pricing`] - Paint tiers, surface conditions, and the price sheet
//! - [`form`] - Coercion of raw form fields into a typed request
//! - [`clock`] - Date capability used by the estimator
//! - [`units`] - Type-safe unit wrappers and rounding
//! - [`errors`] - Structured error types

pub mod clock;
pub mod errors;
pub mod estimate;
pub mod form;
pub mod pricing;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{EstimateError, EstimateOutcome};
pub use estimate::{calculate, EstimateInput, EstimateResult};
pub use form::{CustomerInfo, EstimateRequest};
pub use pricing::{PaintQuality, SurfaceCondition, PRICING};
