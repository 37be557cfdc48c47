//! Free-text quantity parsing for implicit ("kitchen-style") requests.
//!
//! Turns inputs like "100g", "2.5 cups" or "250 millilitres" into an
//! amount plus a canonical registry unit name. Lax by intent: the pair is
//! extracted from anywhere in the string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::error::{AppError, AppResult};

// Number followed by unit ("100g", "2.5 cups"), then unit followed by
// number ("g 100"). No anchors so the pair may sit inside longer text.
static RE_AMOUNT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*([a-zA-Z-]+)").expect("Failed to compile amount-unit pattern")
});

static RE_UNIT_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z-]+)\s*(\d+(?:\.\d+)?)").expect("Failed to compile unit-amount pattern")
});

/// Map spellings and plurals to canonical registry names.
fn normalize_unit(unit: &str) -> Option<&'static str> {
    let unit_lower = unit.to_lowercase();
    match unit_lower.as_str() {
        // Weight
        "mg" | "milligram" | "milligrams" => Some("mg"),
        "g" | "gram" | "grams" => Some("g"),
        "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => Some("kg"),
        "oz" | "ounce" | "ounces" => Some("oz"),
        "lb" | "lbs" | "pound" | "pounds" => Some("lb"),
        // Volume
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some("ml"),
        "l" | "liter" | "liters" | "litre" | "litres" => Some("l"),
        "tsp" | "teaspoon" | "teaspoons" => Some("tsp"),
        "tbsp" | "tablespoon" | "tablespoons" => Some("tbsp"),
        "fl-oz" | "floz" | "fluid-ounce" | "fluid-ounces" => Some("fl-oz"),
        "cup" | "cups" => Some("cup"),
        "pint" | "pints" => Some("pint"),
        "quart" | "quarts" => Some("quart"),
        "gal" | "gallon" | "gallons" => Some("gal"),
        _ => None,
    }
}

/// Parse an amount and canonical unit from free text.
pub fn parse_quantity(text: &str) -> AppResult<(f64, String)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Empty quantity text".to_string()));
    }

    // Comma decimal separators ("2,5 cups") normalized to dots.
    let normalized = text.replace(',', ".");

    if let Some(caps) = RE_AMOUNT_UNIT.captures(&normalized) {
        if let (Ok(amount), Some(unit_str)) = (caps[1].parse::<f64>(), caps.get(2)) {
            if let Some(unit) = normalize_unit(unit_str.as_str()) {
                return Ok((amount, unit.to_string()));
            }
        }
    }

    if let Some(caps) = RE_UNIT_AMOUNT.captures(&normalized) {
        if let (Some(unit_str), Ok(amount)) = (caps.get(1), caps[2].parse::<f64>()) {
            if let Some(unit) = normalize_unit(unit_str.as_str()) {
                return Ok((amount, unit.to_string()));
            }
        }
    }

    Err(AppError::Validation(format!(
        "Could not parse a quantity from: {}",
        text
    )))
}
