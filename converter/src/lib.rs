//! Unit registry and conversion engine.
//!
//! Four categories are supported, each routed through a base unit:
//!
//! | Category    | Base | Strategy                    |
//! |-------------|------|-----------------------------|
//! | Length      | m    | linear factor               |
//! | Mass        | kg   | linear factor               |
//! | Volume      | L    | linear factor               |
//! | Temperature | °C   | affine pair per [`TempUnit`] |
//!
//! Raw user input goes through [`normalize`] first, then [`convert`]:
//!
//! ```
//! use converter::{convert, normalize};
//!
//! let from = normalize("Kilometers");
//! let miles = convert(&from, "mi", 1.0)?;
//! assert!((miles - 0.621_372_7).abs() < 1e-6);
//! # Ok::<(), converter::ConvertError>(())
//! ```

pub mod error;
pub mod registry;

use std::fmt;

use log::trace;
use serde::Serialize;

pub use error::{ConvertError, Result};
pub use registry::{
    classify, linear_factor, normalize, units_in, TempUnit, ALIASES, LENGTH, MASS,
    TEMPERATURE, VOLUME,
};

// ────────────────────────────────────────────────────────────────────
//  Category
// ────────────────────────────────────────────────────────────────────

/// Measurement category of a canonical unit symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Volume,
    Temperature,
    /// Not found in any table; never converted.
    Unknown,
}

impl Category {
    /// The convertible categories, in listing order.
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Temperature,
    ];

    /// Symbol of the unit every conversion in this category passes through.
    pub fn base_unit(self) -> Option<&'static str> {
        match self {
            Category::Length => Some("m"),
            Category::Mass => Some("kg"),
            Category::Volume => Some("L"),
            Category::Temperature => Some("C"),
            Category::Unknown => None,
        }
    }

    pub fn is_linear(self) -> bool {
        matches!(self, Category::Length | Category::Mass | Category::Volume)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Volume => "Volume",
            Category::Temperature => "Temperature",
            Category::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

// ────────────────────────────────────────────────────────────────────
//  Engine
// ────────────────────────────────────────────────────────────────────

/// A completed conversion between two canonical units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub category: Category,
    pub value: f64,
    pub result: f64,
}

impl Conversion {
    /// Classify both units, check they share a category and convert.
    pub fn run(from: &str, to: &str, value: f64) -> Result<Self> {
        let from_category = classify(from);
        let to_category = classify(to);

        if from_category == Category::Unknown {
            return Err(ConvertError::CategoryUnknown(from.to_string()));
        }
        if to_category == Category::Unknown {
            return Err(ConvertError::CategoryUnknown(to.to_string()));
        }
        if from_category != to_category {
            return Err(ConvertError::IncompatibleCategories {
                from: from.to_string(),
                to: to.to_string(),
                from_category,
                to_category,
            });
        }

        let result = match from_category {
            Category::Temperature => convert_temperature(from, to, value)?,
            linear if linear.is_linear() => convert_linear(linear, from, to, value)?,
            other => return Err(ConvertError::UnhandledCategory(other)),
        };

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            category: from_category,
            value,
            result,
        })
    }
}

/// Convert `value` from one canonical unit to another.
///
/// Both symbols must already be normalized; see [`normalize`].
pub fn convert(from: &str, to: &str, value: f64) -> Result<f64> {
    Conversion::run(from, to, value).map(|c| c.result)
}

// The factor ratio is taken first so that converting a unit to itself
// multiplies by exactly 1.0.
fn convert_linear(category: Category, from: &str, to: &str, value: f64) -> Result<f64> {
    let from_factor = linear_factor(category, from)
        .ok_or_else(|| ConvertError::CategoryUnknown(from.to_string()))?;
    let to_factor = linear_factor(category, to)
        .ok_or_else(|| ConvertError::CategoryUnknown(to.to_string()))?;
    trace!("{category}: {value} * {from_factor} / {to_factor}");
    Ok(value * (from_factor / to_factor))
}

fn convert_temperature(from: &str, to: &str, value: f64) -> Result<f64> {
    let from_unit = TempUnit::from_symbol(from)
        .ok_or_else(|| ConvertError::CategoryUnknown(from.to_string()))?;
    let to_unit = TempUnit::from_symbol(to)
        .ok_or_else(|| ConvertError::CategoryUnknown(to.to_string()))?;
    let celsius = from_unit.to_celsius(value);
    trace!("Temperature: {value} {from} = {celsius} C");
    Ok(to_unit.from_celsius(celsius))
}
