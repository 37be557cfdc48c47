//! Kitchen measurement conversion engine.
//!
//! Converts quantities between weight and volume units, bridging the two
//! dimensions through an ingredient density (g/ml). The engine itself is
//! pure and synchronous; its two external collaborators (ingredient
//! lookup and the conversion-record store) are remote HTTP services
//! reached through the clients in [`remote`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use kitchen_units::core::density::DensityResolver;
//! use kitchen_units::core::service::ConversionService;
//! use kitchen_units::remote::config::RemoteConfig;
//! use kitchen_units::remote::ingredients::HttpIngredientLookup;
//! use kitchen_units::shared::types::ConversionRequest;
//!
//! # async fn run() {
//! let lookup = HttpIngredientLookup::new(RemoteConfig::new("https://crud.example.com/api"));
//! let service = ConversionService::new(DensityResolver::new(Some(Arc::new(lookup))), None);
//!
//! let request = ConversionRequest {
//!     value: 250.0,
//!     from_unit: "ml".to_string(),
//!     to_unit: Some("g".to_string()),
//!     density: Some(1.03),
//!     ingredient_id: None,
//! };
//! let result = service.convert(&request).await.unwrap();
//! assert_eq!(result.result, 257.5);
//! # }
//! ```

pub mod core;
pub mod remote;
pub mod shared;

pub use crate::core::service::ConversionService;
pub use crate::shared::error::{AppError, AppResult, ConversionError};
pub use crate::shared::types::{ConversionRecord, ConversionRequest, ConversionResult};
