//! Density resolution for cross-dimension conversions.
//!
//! Produces a single g/ml density from, in order of precedence: an
//! explicit caller-supplied value, the referenced ingredient's stored
//! density, or the water-equivalent default of 1. A conversion should
//! always be computable, so lookup faults degrade rather than block.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::shared::error::AppResult;

/// Water-equivalent default (g/ml) applied when nothing better is known.
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Bound on the ingredient lookup; elapsing is treated as not-found.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// External ingredient-lookup collaborator. The engine only reads a
/// density through this seam; it never owns or mutates ingredient data.
#[async_trait]
pub trait IngredientLookup: Send + Sync {
    /// Stored density for an ingredient, `Ok(None)` when the ingredient
    /// is unknown or carries no density.
    async fn density_of(&self, ingredient_id: &str) -> AppResult<Option<f64>>;
}

pub struct DensityResolver {
    lookup: Option<Arc<dyn IngredientLookup>>,
    timeout: Duration,
}

impl DensityResolver {
    pub fn new(lookup: Option<Arc<dyn IngredientLookup>>) -> Self {
        Self {
            lookup,
            timeout: LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the density to apply for one conversion. Never fails.
    pub async fn resolve(&self, explicit: Option<f64>, ingredient_id: Option<&str>) -> f64 {
        // An explicit user density always wins.
        if let Some(density) = explicit {
            if density.is_finite() && density > 0.0 {
                return density;
            }
            println!(
                "[DensityResolver] Ignoring invalid explicit density {}; falling back",
                density
            );
        }

        if let (Some(id), Some(lookup)) = (ingredient_id, &self.lookup) {
            match tokio::time::timeout(self.timeout, lookup.density_of(id)).await {
                Ok(Ok(Some(density))) if density.is_finite() && density > 0.0 => return density,
                Ok(Ok(Some(density))) => {
                    println!(
                        "[DensityResolver] Ingredient {} has invalid stored density {}; using default",
                        id, density
                    );
                }
                Ok(Ok(None)) => {}
                Ok(Err(e)) => {
                    eprintln!("[DensityResolver] Lookup failed for {}: {}; using default", id, e);
                }
                Err(_) => {
                    eprintln!("[DensityResolver] Lookup timed out for {}; using default", id);
                }
            }
        }

        DEFAULT_DENSITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AppError;

    struct FixedLookup(Option<f64>);

    #[async_trait]
    impl IngredientLookup for FixedLookup {
        async fn density_of(&self, _ingredient_id: &str) -> AppResult<Option<f64>> {
            Ok(self.0)
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl IngredientLookup for FailingLookup {
        async fn density_of(&self, _ingredient_id: &str) -> AppResult<Option<f64>> {
            Err(AppError::Network("connection refused".to_string()))
        }
    }

    struct HangingLookup;

    #[async_trait]
    impl IngredientLookup for HangingLookup {
        async fn density_of(&self, _ingredient_id: &str) -> AppResult<Option<f64>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Some(0.92))
        }
    }

    #[tokio::test]
    async fn explicit_density_wins_over_lookup() {
        let resolver = DensityResolver::new(Some(Arc::new(FixedLookup(Some(0.92)))));
        assert_eq!(resolver.resolve(Some(1.03), Some("milk")).await, 1.03);
    }

    #[tokio::test]
    async fn stored_density_used_when_no_explicit() {
        let resolver = DensityResolver::new(Some(Arc::new(FixedLookup(Some(0.92)))));
        assert_eq!(resolver.resolve(None, Some("oil")).await, 0.92);
    }

    #[tokio::test]
    async fn defaults_to_one_without_any_source() {
        let resolver = DensityResolver::new(None);
        assert_eq!(resolver.resolve(None, None).await, DEFAULT_DENSITY);
        assert_eq!(resolver.resolve(None, Some("oil")).await, DEFAULT_DENSITY);
    }

    #[tokio::test]
    async fn invalid_explicit_falls_through_to_lookup() {
        let resolver = DensityResolver::new(Some(Arc::new(FixedLookup(Some(0.92)))));
        assert_eq!(resolver.resolve(Some(0.0), Some("oil")).await, 0.92);
        assert_eq!(resolver.resolve(Some(f64::NAN), Some("oil")).await, 0.92);
    }

    #[tokio::test]
    async fn invalid_stored_density_degrades_to_default() {
        let resolver = DensityResolver::new(Some(Arc::new(FixedLookup(Some(-2.0)))));
        assert_eq!(resolver.resolve(None, Some("bad")).await, DEFAULT_DENSITY);
    }

    #[tokio::test]
    async fn lookup_failure_degrades_to_default() {
        let resolver = DensityResolver::new(Some(Arc::new(FailingLookup)));
        assert_eq!(resolver.resolve(None, Some("oil")).await, DEFAULT_DENSITY);
    }

    #[tokio::test]
    async fn lookup_timeout_degrades_to_default() {
        let resolver = DensityResolver::new(Some(Arc::new(HangingLookup)))
            .with_timeout(Duration::from_millis(20));
        assert_eq!(resolver.resolve(None, Some("oil")).await, DEFAULT_DENSITY);
    }
}
