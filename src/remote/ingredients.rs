//! HTTP client for the ingredient-lookup collaborator (crud service).

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::core::density::IngredientLookup;
use crate::remote::config::RemoteConfig;
use crate::shared::error::{AppError, AppResult};

// Lazy static HTTP client to reuse the connection pool
static CLIENT: OnceLock<Client> = OnceLock::new();

fn get_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("kitchen-units/ingredients")
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Only the fields the resolver reads; density is optional server-side.
#[derive(Debug, Deserialize)]
struct IngredientDto {
    #[serde(default)]
    density: Option<f64>,
}

pub struct HttpIngredientLookup {
    config: RemoteConfig,
}

impl HttpIngredientLookup {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl IngredientLookup for HttpIngredientLookup {
    async fn density_of(&self, ingredient_id: &str) -> AppResult<Option<f64>> {
        let url = format!(
            "{}/ingredients/{}",
            self.config.base_url,
            urlencoding::encode(ingredient_id)
        );

        let response = get_client()
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                eprintln!("[Ingredients] Network error for {}: {}", ingredient_id, e);
                AppError::Network(format!("Ingredient service connection failed: {}", e))
            })?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Ingredient service returned error: {}",
                response.status()
            )));
        }

        let ingredient = response.json::<IngredientDto>().await.map_err(|e| {
            eprintln!("[Ingredients] Parse error for {}: {}", ingredient_id, e);
            AppError::Validation(format!("Failed to parse ingredient: {}", e))
        })?;

        Ok(ingredient.density)
    }
}
