//! The conversion computation.
//!
//! Pure and synchronous: reads the immutable registry, owns no state, and
//! reports failures as typed values. Cross-dimension conversions pivot
//! through grams/milliliters using the supplied density (g/ml).

use crate::core::registry::{self, Dimension, Unit};
use crate::shared::error::ConversionError;

/// Convert `value` from `from_name` to `to_name` using `density` (g/ml)
/// when the dimensions differ. Returns the full-precision result; display
/// rounding is the caller's concern.
pub fn convert(
    value: f64,
    from_name: &str,
    to_name: &str,
    density: f64,
) -> Result<f64, ConversionError> {
    let from = resolve(from_name)?;
    let to = resolve(to_name)?;

    if !value.is_finite() || value < 0.0 {
        return Err(ConversionError::InvalidQuantity);
    }

    // Identity must be numerically exact, not a factor ratio that happens
    // to cancel, so short-circuit before any arithmetic.
    if from.name == to.name {
        return Ok(value);
    }

    if from.dimension == to.dimension {
        return Ok(value * from.to_base / to.to_base);
    }

    // WEIGHT <-> VOLUME: pivot through grams and milliliters.
    if !density.is_finite() || density <= 0.0 {
        return Err(ConversionError::InvalidDensity);
    }

    let result = match (from.dimension, to.dimension) {
        (Dimension::Weight, Dimension::Volume) => {
            let grams = value * from.to_base;
            let ml = grams / density;
            ml / to.to_base
        }
        (Dimension::Volume, Dimension::Weight) => {
            let ml = value * from.to_base;
            let grams = ml * density;
            grams / to.to_base
        }
        _ => unreachable!("same-dimension handled above"),
    };

    Ok(result)
}

fn resolve(name: &str) -> Result<&'static Unit, ConversionError> {
    registry::lookup(name).ok_or_else(|| ConversionError::UnknownUnit(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::round2;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1e-12);
        assert!(
            ((actual - expected) / scale).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn grams_to_kilograms() {
        let result = convert(1000.0, "g", "kg", 1.0).unwrap();
        assert_eq!(round2(result), 1.00);
    }

    #[test]
    fn cup_to_milliliters() {
        let result = convert(1.0, "cup", "ml", 1.0).unwrap();
        assert_eq!(round2(result), 236.59);
    }

    #[test]
    fn weight_to_volume_with_oil_density() {
        // 100 g of oil at 0.92 g/ml -> 108.6956... ml
        let result = convert(100.0, "g", "ml", 0.92).unwrap();
        assert_close(result, 100.0 / 0.92);
        assert_eq!(round2(result), 108.70);
    }

    #[test]
    fn volume_to_weight_with_milk_density() {
        // 250 ml of milk at 1.03 g/ml -> 257.5 g
        let result = convert(250.0, "ml", "g", 1.03).unwrap();
        assert_close(result, 257.5);
        assert_eq!(round2(result), 257.50);
    }

    #[test]
    fn zero_converts_to_zero() {
        assert_eq!(convert(0.0, "g", "kg", 1.0).unwrap(), 0.0);
        assert_eq!(convert(0.0, "g", "ml", 0.92).unwrap(), 0.0);
    }

    #[test]
    fn identity_is_exact_for_every_unit() {
        for unit in crate::core::registry::all_units() {
            for value in [0.0, 0.1, 1.0, 3.7, 12345.678] {
                assert_eq!(convert(value, unit.name, unit.name, 1.0).unwrap(), value);
            }
        }
    }

    #[test]
    fn unknown_units_are_rejected() {
        assert_eq!(
            convert(10.0, "xyz", "g", 1.0),
            Err(ConversionError::UnknownUnit("xyz".to_string()))
        );
        assert_eq!(
            convert(5.0, "kg", "banana", 1.0),
            Err(ConversionError::UnknownUnit("banana".to_string()))
        );
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert_eq!(
            convert(-5.0, "g", "kg", 1.0),
            Err(ConversionError::InvalidQuantity)
        );
    }

    #[test]
    fn non_finite_quantity_is_rejected() {
        assert_eq!(
            convert(f64::NAN, "g", "kg", 1.0),
            Err(ConversionError::InvalidQuantity)
        );
        assert_eq!(
            convert(f64::INFINITY, "ml", "l", 1.0),
            Err(ConversionError::InvalidQuantity)
        );
    }

    #[test]
    fn bad_density_is_rejected_on_cross_dimension_only() {
        // Same-dimension conversions never consult density.
        assert!(convert(10.0, "g", "kg", 0.0).is_ok());
        assert!(convert(10.0, "g", "kg", f64::NAN).is_ok());

        assert_eq!(
            convert(10.0, "g", "ml", 0.0),
            Err(ConversionError::InvalidDensity)
        );
        assert_eq!(
            convert(10.0, "ml", "g", -1.0),
            Err(ConversionError::InvalidDensity)
        );
        assert_eq!(
            convert(10.0, "ml", "g", f64::NAN),
            Err(ConversionError::InvalidDensity)
        );
    }

    #[test]
    fn round_trip_within_dimension() {
        let pairs = [("g", "lb"), ("kg", "oz"), ("ml", "cup"), ("tsp", "gal")];
        for (a, b) in pairs {
            for value in [0.25, 1.0, 17.3, 980.0] {
                let there = convert(value, a, b, 1.0).unwrap();
                let back = convert(there, b, a, 1.0).unwrap();
                assert_close(back, value);
            }
        }
    }

    #[test]
    fn scale_linearity() {
        for k in [0.0, 0.5, 2.0, 13.0] {
            let single = convert(3.2, "cup", "tbsp", 1.0).unwrap();
            let scaled = convert(k * 3.2, "cup", "tbsp", 1.0).unwrap();
            assert_close(scaled, k * single);
        }
    }

    #[test]
    fn cross_dimension_inverse() {
        for density in [0.74, 0.92, 1.0, 1.03, 13.6] {
            let ml = convert(340.0, "g", "cup", density).unwrap();
            let back = convert(ml, "cup", "g", density).unwrap();
            assert_close(back, 340.0);
        }
    }
}
