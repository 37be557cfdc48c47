//! Orchestration of a conversion request end to end.
//!
//! The service resolves the request's target mode once at the boundary,
//! asks the density resolver for the mediating density, runs the pure
//! engine, and (on explicit request) persists the confirmed result
//! through the record store collaborator.

use std::sync::Arc;

use crate::core::density::DensityResolver;
use crate::core::engine;
use crate::core::parse;
use crate::core::registry::{self, Dimension};
use crate::remote::records::RecordStore;
use crate::shared::error::{AppError, AppResult, ConversionError};
use crate::shared::types::{
    ConversionRecord, ConversionRequest, ConversionResult, NewRecord, UnitDto, UnitSelection,
};

pub struct ConversionService {
    resolver: DensityResolver,
    store: Option<Arc<dyn RecordStore>>,
}

impl ConversionService {
    pub fn new(resolver: DensityResolver, store: Option<Arc<dyn RecordStore>>) -> Self {
        Self { resolver, store }
    }

    /// All registered units in registry order, for selection inputs.
    pub fn available_units(&self) -> Vec<UnitDto> {
        registry::all_units()
            .map(|u| UnitDto {
                id: u.name.to_string(),
                label: u.label.to_string(),
                dimension: u.dimension.as_str().to_string(),
            })
            .collect()
    }

    /// Compute a conversion without persisting anything.
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let (from, to) = self.resolve_target(request)?;

        let density = self
            .resolver
            .resolve(request.density, request.ingredient_id.as_deref())
            .await;

        let result = engine::convert(request.value, &from, &to, density)?;

        Ok(ConversionResult {
            value: request.value,
            from_unit: from,
            to_unit: to,
            result,
            density_used: density,
        })
    }

    /// Convert from free text ("100g", "2.5 cups"), kitchen-style: the
    /// parsed quantity is bridged to the opposite dimension's base unit.
    pub async fn convert_text(&self, text: &str) -> AppResult<ConversionResult> {
        let (value, from_unit) = parse::parse_quantity(text)?;
        let request = ConversionRequest {
            value,
            from_unit,
            to_unit: None,
            density: None,
            ingredient_id: None,
        };
        Ok(self.convert(&request).await?)
    }

    /// Compute, then persist the confirmed result via the record store.
    pub async fn convert_and_save(
        &self,
        request: &ConversionRequest,
        ingredient_name: Option<String>,
    ) -> AppResult<ConversionRecord> {
        let store = self
            .store
            .as_ref()
            .ok_or_else(|| AppError::System("No record store configured".to_string()))?;

        let conversion = self.convert(request).await?;
        store
            .create(NewRecord {
                conversion,
                ingredient_name,
            })
            .await
    }

    /// Resolve the tagged target mode to a concrete (from, to) pair.
    ///
    /// Implicit requests bridge to the opposite dimension's base unit:
    /// weight sources convert to milliliters, volume sources to grams.
    fn resolve_target(
        &self,
        request: &ConversionRequest,
    ) -> Result<(String, String), ConversionError> {
        match request.selection() {
            UnitSelection::Standard { from, to } => Ok((from, to)),
            UnitSelection::Implicit { from } => {
                let from_unit = registry::lookup(&from)
                    .ok_or_else(|| ConversionError::UnknownUnit(from.clone()))?;
                let to = match from_unit.dimension {
                    Dimension::Weight => registry::BASE_VOLUME_UNIT,
                    Dimension::Volume => registry::BASE_WEIGHT_UNIT,
                };
                Ok((from, to.to_string()))
            }
        }
    }
}
