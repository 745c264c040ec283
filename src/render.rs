//! Text and JSON output for every [`Request`](crate::Request) kind.

use std::fmt::Write;

use clap::CommandFactory;
use colored::Colorize;
use converter::{linear_factor, units_in, Category, Conversion};
use serde::Serialize;

use crate::cli::Cli;

/// Full help text, followed by the hint about `--list`.
pub fn help() -> String {
    Cli::command().render_help().to_string()
}

/// One-line usage summary, reprinted after every error.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

pub fn version() -> String {
    format!(
        "Current Version:\t{}",
        env!("CARGO_PKG_VERSION").bold().green()
    )
}

// ── Unit listing ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UnitListing {
    pub categories: Vec<CategoryListing>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub base_unit: &'static str,
    pub units: Vec<UnitEntry>,
}

#[derive(Debug, Serialize)]
pub struct UnitEntry {
    pub symbol: &'static str,
    /// Factor to the base unit; absent for temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

impl UnitListing {
    pub fn collect() -> Self {
        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryListing {
                category,
                base_unit: category.base_unit().unwrap_or_default(),
                units: units_in(category)
                    .into_iter()
                    .map(|symbol| UnitEntry {
                        symbol,
                        factor: linear_factor(category, symbol),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }
}

pub fn units_text() -> String {
    let mut out = String::from("Supported units:\n");
    for listing in UnitListing::collect().categories {
        let symbols: Vec<&str> = listing.units.iter().map(|u| u.symbol).collect();
        let _ = write!(out, "\n{}:\n  {}\n", listing.category, symbols.join("  "));
    }
    out
}

pub fn units_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&UnitListing::collect())
}

// ── Conversion result ───────────────────────────────────────────────

pub fn conversion_text(c: &Conversion) -> String {
    let value = format!("{}{}", c.result, c.to);
    format!("From: {}\nTo: {}\nValue: {}", c.from, c.to, value.bold().green())
}

pub fn conversion_json(c: &Conversion) -> serde_json::Result<String> {
    serde_json::to_string_pretty(c)
}
