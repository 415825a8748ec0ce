//! # Form Coercion
//!
//! Turns raw, string-valued form fields into a typed [`EstimateRequest`].
//! Any front end (HTML form, CLI prompts) hands over a field map and gets
//! back either a ready-to-price request or a structured error naming the
//! offending field.
//!
//! ## Defaults
//!
//! | Field           | Missing or blank          |
//! |-----------------|---------------------------|
//! | `length`        | error (`MissingField`)    |
//! | `width`         | error (`MissingField`)    |
//! | `height`        | error (`MissingField`)    |
//! | `doors`         | 0                         |
//! | `windows`       | 0                         |
//! | `condition`     | `good`                    |
//! | `paint_quality` | `basic`                   |
//! | `coats`         | 2                         |
//! | `customer_name` | `Customer`                |
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use paint_core::form::EstimateRequest;
//!
//! let fields: HashMap<String, String> = [("length", "12"), ("width", "10"), ("height", "8")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let request = EstimateRequest::from_fields(&fields).unwrap();
//! assert_eq!(request.input.coats, 2);
//! assert_eq!(request.customer.name, "Customer");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateOutcome};
use crate::estimate::{EstimateInput, DEFAULT_COATS};
use crate::pricing::{PaintQuality, SurfaceCondition};

/// Name shown on the estimate when the customer leaves it blank
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

/// Contact details echoed onto the estimate. Free text, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Job site address
    pub address: String,
}

impl Default for CustomerInfo {
    fn default() -> Self {
        CustomerInfo {
            name: DEFAULT_CUSTOMER_NAME.to_string(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }
}

impl CustomerInfo {
    /// Extract customer fields from a form field map
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let text = |key: &str| fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default();

        let name = text("customer_name");
        CustomerInfo {
            name: if name.is_empty() { DEFAULT_CUSTOMER_NAME.to_string() } else { name },
            email: text("customer_email"),
            phone: text("customer_phone"),
            address: text("job_address"),
        }
    }
}

/// A fully coerced estimate request: what to price, and for whom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub input: EstimateInput,
    pub customer: CustomerInfo,
}

impl EstimateRequest {
    /// Coerce raw form fields into a typed request.
    ///
    /// # Errors
    ///
    /// * `MissingField` - a room dimension is absent or blank
    /// * `InvalidInput` - a numeric field does not parse, is not finite, or is negative
    /// * `UnknownOption` - `condition` or `paint_quality` is not a known value
    pub fn from_fields(fields: &HashMap<String, String>) -> EstimateOutcome<Self> {
        let input = EstimateInput {
            length_ft: required_feet(fields, "length")?,
            width_ft: required_feet(fields, "width")?,
            height_ft: required_feet(fields, "height")?,
            doors: optional_count(fields, "doors", 0)?,
            windows: optional_count(fields, "windows", 0)?,
            condition: match present(fields, "condition") {
                Some(raw) => SurfaceCondition::from_str_flexible(raw)?,
                None => SurfaceCondition::default(),
            },
            paint_quality: match present(fields, "paint_quality") {
                Some(raw) => PaintQuality::from_str_flexible(raw)?,
                None => PaintQuality::default(),
            },
            coats: optional_count(fields, "coats", DEFAULT_COATS)?,
        };

        Ok(EstimateRequest {
            input,
            customer: CustomerInfo::from_fields(fields),
        })
    }
}

/// A field's trimmed value, or `None` when absent or blank
fn present<'a>(fields: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    fields.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn required_feet(fields: &HashMap<String, String>, key: &str) -> EstimateOutcome<f64> {
    let raw = present(fields, key).ok_or_else(|| EstimateError::missing_field(key))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| EstimateError::invalid_input(key, raw, "Expected a number of feet"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(EstimateError::invalid_input(key, raw, "Expected a non-negative number of feet"));
    }
    Ok(value)
}

fn optional_count(fields: &HashMap<String, String>, key: &str, default: u32) -> EstimateOutcome<u32> {
    match present(fields, key) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| EstimateError::invalid_input(key, raw, "Expected a whole number")),
    }
}
