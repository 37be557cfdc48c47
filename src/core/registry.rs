//! Static unit registry.
//!
//! Immutable process-wide catalog of supported kitchen units, grouped by
//! physical dimension. Initialized once, never mutated during execution.
//! Iteration order is declaration order so conventional groupings
//! (g, kg, mg together) survive into selection inputs.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Physical quantity category. Units of the same dimension convert by
/// factor alone; crossing dimensions requires a density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Weight,
    Volume,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Weight => "weight",
            Dimension::Volume => "volume",
        }
    }
}

/// One named measurement unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub label: &'static str,
    pub dimension: Dimension,
    /// Multiplicative factor to the dimension's base unit
    /// (grams for weight, milliliters for volume). Always > 0.
    pub to_base: f64,
}

/// Canonical base unit names per dimension.
pub const BASE_WEIGHT_UNIT: &str = "g";
pub const BASE_VOLUME_UNIT: &str = "ml";

/// Declaration order is the display order; keep metric runs together.
static UNITS: &[Unit] = &[
    // Weight (base: grams)
    Unit { name: "mg", label: "Milligrams", dimension: Dimension::Weight, to_base: 0.001 },
    Unit { name: "g", label: "Grams", dimension: Dimension::Weight, to_base: 1.0 },
    Unit { name: "kg", label: "Kilograms", dimension: Dimension::Weight, to_base: 1000.0 },
    Unit { name: "oz", label: "Ounces", dimension: Dimension::Weight, to_base: 28.3495 },
    Unit { name: "lb", label: "Pounds", dimension: Dimension::Weight, to_base: 453.592 },
    // Volume (base: milliliters)
    Unit { name: "ml", label: "Milliliters", dimension: Dimension::Volume, to_base: 1.0 },
    Unit { name: "l", label: "Liters", dimension: Dimension::Volume, to_base: 1000.0 },
    Unit { name: "tsp", label: "Teaspoons", dimension: Dimension::Volume, to_base: 4.92892 },
    Unit { name: "tbsp", label: "Tablespoons", dimension: Dimension::Volume, to_base: 14.7868 },
    Unit { name: "fl-oz", label: "Fluid Ounces", dimension: Dimension::Volume, to_base: 29.5735 },
    Unit { name: "cup", label: "Cups", dimension: Dimension::Volume, to_base: 236.588 },
    Unit { name: "pint", label: "Pints", dimension: Dimension::Volume, to_base: 473.176 },
    Unit { name: "quart", label: "Quarts", dimension: Dimension::Volume, to_base: 946.353 },
    Unit { name: "gal", label: "Gallons", dimension: Dimension::Volume, to_base: 3785.41 },
];

/// Name index over the declaration-ordered table, built once at startup.
static UNIT_INDEX: Lazy<HashMap<&'static str, &'static Unit>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(UNITS.len());
    for unit in UNITS {
        let previous = index.insert(unit.name, unit);
        debug_assert!(previous.is_none(), "duplicate unit name: {}", unit.name);
    }
    index
});

/// Exact, case-sensitive lookup against registered unit names.
pub fn lookup(name: &str) -> Option<&'static Unit> {
    UNIT_INDEX.get(name).copied()
}

/// All units of one dimension, in declaration order.
pub fn units_of(dimension: Dimension) -> impl Iterator<Item = &'static Unit> {
    UNITS.iter().filter(move |u| u.dimension == dimension)
}

/// Every registered unit, in declaration order.
pub fn all_units() -> impl Iterator<Item = &'static Unit> {
    UNITS.iter()
}
