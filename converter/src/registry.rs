//! Static unit tables and alias resolution.
//!
//! Every table is a `const` slice: nothing is built at runtime and nothing
//! can be mutated.  A canonical symbol appears in exactly one category
//! table, so [`classify`] is unambiguous.

use log::debug;

use crate::Category;

// ────────────────────────────────────────────────────────────────────
//  Linear tables (symbol, factor to base unit)
// ────────────────────────────────────────────────────────────────────

/// Length factors, base unit **m**.
pub const LENGTH: &[(&str, f64)] = &[
    ("m", 1.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("km", 1000.0),
    ("mi", 1609.34),
];

/// Mass factors, base unit **kg**.
pub const MASS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("g", 0.001),
    ("lb", 0.453592),
    ("oz", 0.0283495),
];

/// Volume factors, base unit **L**.
///
/// The lowercase spellings `l`, `ml` and `ul` are canonical keys in their
/// own right, not aliases.
pub const VOLUME: &[(&str, f64)] = &[
    ("L", 1.0),
    ("l", 1.0),
    ("mL", 0.001),
    ("ml", 0.001),
    ("uL", 0.000_001),
    ("ul", 0.000_001),
    // US customary
    ("gal", 3.78541),
    ("qt", 0.946353),
    ("pt", 0.473176),
    ("cup", 0.24), // metric cup
    ("floz", 0.0295735),
    ("tbsp", 0.0147868),
    ("tsp", 0.00492892),
    // cubic
    ("m3", 1000.0),
    ("cm3", 0.001),
    ("cc", 0.001),
    ("in3", 0.0163871),
    ("ft3", 28.3168),
];

// ────────────────────────────────────────────────────────────────────
//  Temperature
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.  Conversions route through degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    /// Degrees Celsius (base)
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

/// Temperature symbols in listing order.
pub const TEMPERATURE: &[(&str, TempUnit)] = &[
    ("C", TempUnit::Celsius),
    ("F", TempUnit::Fahrenheit),
    ("K", TempUnit::Kelvin),
];

impl TempUnit {
    /// Look up a canonical temperature symbol (`"C"`, `"F"`, `"K"`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        TEMPERATURE
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, unit)| *unit)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TempUnit::Celsius => "C",
            TempUnit::Fahrenheit => "F",
            TempUnit::Kelvin => "K",
        }
    }

    /// This unit → °C
    pub fn to_celsius(self, t: f64) -> f64 {
        match self {
            TempUnit::Celsius => t,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
            TempUnit::Kelvin => t - 273.15,
        }
    }

    /// °C → this unit
    pub fn from_celsius(self, c: f64) -> f64 {
        match self {
            TempUnit::Celsius => c,
            TempUnit::Fahrenheit => c * 9.0 / 5.0 + 32.0,
            TempUnit::Kelvin => c + 273.15,
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Aliases (lowercase informal name → canonical symbol)
// ────────────────────────────────────────────────────────────────────

pub const ALIASES: &[(&str, &str)] = &[
    // length
    ("meter", "m"),
    ("meters", "m"),
    ("metre", "m"),
    ("metres", "m"),
    ("kilometer", "km"),
    ("kilometers", "km"),
    ("kilometre", "km"),
    ("kilometres", "km"),
    ("foot", "ft"),
    ("feet", "ft"),
    ("yard", "yd"),
    ("yards", "yd"),
    ("mile", "mi"),
    ("miles", "mi"),
    // mass
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("gram", "g"),
    ("grams", "g"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("lbs", "lb"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    // volume
    ("liter", "L"),
    ("liters", "L"),
    ("litre", "L"),
    ("litres", "L"),
    ("milliliter", "mL"),
    ("milliliters", "mL"),
    ("millilitre", "mL"),
    ("millilitres", "mL"),
    ("cup", "cup"),
    ("cups", "cup"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    // temperature
    ("c", "C"),
    ("celsius", "C"),
    ("centigrade", "C"),
    ("f", "F"),
    ("fahrenheit", "F"),
    ("k", "K"),
    ("kelvin", "K"),
];

// ────────────────────────────────────────────────────────────────────
//  Lookups
// ────────────────────────────────────────────────────────────────────

/// Resolve a raw unit string to its canonical symbol.
///
/// The input is ASCII-lowercased and looked up in [`ALIASES`].  On a miss
/// the *original* string comes back untouched, so canonical symbols are
/// matched case-sensitively later on: `"L"` stays `"L"`, while `"Kg"`
/// stays `"Kg"` and classifies as [`Category::Unknown`].
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();
    match ALIASES.iter().find(|(alias, _)| *alias == lower) {
        Some((_, canonical)) => {
            debug!("alias '{raw}' -> '{canonical}'");
            (*canonical).to_string()
        }
        None => raw.to_string(),
    }
}

/// Category of a canonical symbol, checked in the order length, mass,
/// volume, temperature.
pub fn classify(unit: &str) -> Category {
    let category = if contains(LENGTH, unit) {
        Category::Length
    } else if contains(MASS, unit) {
        Category::Mass
    } else if contains(VOLUME, unit) {
        Category::Volume
    } else if TempUnit::from_symbol(unit).is_some() {
        Category::Temperature
    } else {
        Category::Unknown
    };
    debug!("classify '{unit}' -> {category}");
    category
}

/// Factor table for a linear category, `None` for temperature and unknown.
pub fn linear_table(category: Category) -> Option<&'static [(&'static str, f64)]> {
    match category {
        Category::Length => Some(LENGTH),
        Category::Mass => Some(MASS),
        Category::Volume => Some(VOLUME),
        Category::Temperature | Category::Unknown => None,
    }
}

/// Factor of `symbol` to the base unit of `category`.
pub fn linear_factor(category: Category, symbol: &str) -> Option<f64> {
    linear_table(category)?
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, factor)| *factor)
}

/// Canonical symbols of a category in registry order.
pub fn units_in(category: Category) -> Vec<&'static str> {
    match category {
        Category::Temperature => TEMPERATURE.iter().map(|(_, unit)| unit.symbol()).collect(),
        other => linear_table(other)
            .map(|table| table.iter().map(|(s, _)| *s).collect())
            .unwrap_or_default(),
    }
}

fn contains(table: &[(&str, f64)], unit: &str) -> bool {
    table.iter().any(|(s, _)| *s == unit)
}
