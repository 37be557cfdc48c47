use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::shared::error::ConversionError;

/// Wire request for a single conversion.
///
/// `to_unit` is omitted for "kitchen"-style implicit conversions; the
/// target is then resolved once at the boundary (see [`UnitSelection`]),
/// never re-branched inside the engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../bindings/types.ts")]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_unit: Option<String>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub ingredient_id: Option<String>,
}

/// The two conversion modes, resolved from the flat wire shape exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitSelection {
    /// Explicit source and destination units.
    Standard { from: String, to: String },
    /// Source unit only; the destination is the engine's implicit kitchen
    /// target (base unit of the opposite dimension).
    Implicit { from: String },
}

impl ConversionRequest {
    pub fn selection(&self) -> UnitSelection {
        match &self.to_unit {
            Some(to) => UnitSelection::Standard {
                from: self.from_unit.clone(),
                to: to.clone(),
            },
            None => UnitSelection::Implicit {
                from: self.from_unit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../bindings/types.ts")]
pub struct ConversionResult {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    /// Full-precision converted quantity. Rounding to 2 decimals happens
    /// only at presentation time (`core::format`), never before persistence.
    pub result: f64,
    pub density_used: f64,
}

/// A persisted conversion, as returned by the record store.
///
/// Created once when a user confirms a result; never mutated afterwards.
/// Corrections are delete + recreate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../bindings/types.ts")]
pub struct ConversionRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub conversion: ConversionResult,
    #[serde(default)]
    pub ingredient_name: Option<String>,
    /// ISO-8601 on the wire, assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a record; `_id` and `createdAt` are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../bindings/types.ts")]
pub struct NewRecord {
    #[serde(flatten)]
    pub conversion: ConversionResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_name: Option<String>,
}

/// Unit descriptor for frontend selection inputs, in registry order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../bindings/types.ts")]
pub struct UnitDto {
    pub id: String,
    pub label: String,
    pub dimension: String,
}

/// Wire error shape: `{ "error": "UnknownUnit", "detail": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../bindings/types.ts")]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}

impl From<&ConversionError> for ErrorBody {
    fn from(err: &ConversionError) -> Self {
        ErrorBody {
            error: err.code().to_string(),
            detail: err.to_string(),
        }
    }
}
