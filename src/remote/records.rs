//! Conversion record store collaborator.
//!
//! The engine itself persists nothing; confirmed results are handed to
//! this store, which assigns `_id` and `createdAt` server-side. Records
//! are never updated in place: corrections are delete + recreate.

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::remote::config::RemoteConfig;
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{ConversionRecord, NewRecord};

static CLIENT: OnceLock<Client> = OnceLock::new();

fn get_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("kitchen-units/records")
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// History filters, serialized to the crud service's query string.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, record: NewRecord) -> AppResult<ConversionRecord>;
    async fn list(&self, filters: Option<RecordFilters>) -> AppResult<Vec<ConversionRecord>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct HttpRecordStore {
    config: RemoteConfig,
}

impl HttpRecordStore {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/conversions{}", self.config.base_url, suffix)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn create(&self, record: NewRecord) -> AppResult<ConversionRecord> {
        let response = get_client()
            .post(self.url(""))
            .timeout(self.config.timeout)
            .json(&record)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Record store create failed: {}",
                response.status()
            )));
        }

        let created = response.json::<ConversionRecord>().await?;
        println!(
            "[Records] Saved conversion {} ({} {} -> {})",
            created.id,
            created.conversion.value,
            created.conversion.from_unit,
            created.conversion.to_unit
        );
        Ok(created)
    }

    async fn list(&self, filters: Option<RecordFilters>) -> AppResult<Vec<ConversionRecord>> {
        let mut request = get_client().get(self.url("")).timeout(self.config.timeout);
        if let Some(filters) = &filters {
            request = request.query(filters);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Record store list failed: {}",
                response.status()
            )));
        }

        Ok(response.json::<Vec<ConversionRecord>>().await?)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let url = self.url(&format!("/{}", urlencoding::encode(id)));
        let response = get_client()
            .delete(&url)
            .timeout(self.config.timeout)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::NotFound(format!("No record with id {}", id))),
            status if status.is_success() => Ok(()),
            status => Err(AppError::Network(format!(
                "Record store delete failed: {}",
                status
            ))),
        }
    }
}
