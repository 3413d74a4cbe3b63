use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::models::{Accommodation, LocalStay};
use crate::sources::traits::StaySource;

const SOURCE_NAME: &str = "record store";

/// Connection settings for the hosted relational store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Read-only client for the hosted store's REST surface.
///
/// Constructed explicitly by the entry point and passed to whoever needs
/// it; there is no shared module-level client.
pub struct StoreClient {
    client: Client,
    config: StoreConfig,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sifnos-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::from_reqwest(SOURCE_NAME, e))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/accommodations",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl StaySource for StoreClient {
    async fn fetch(&self) -> Result<Vec<Accommodation>, SourceError> {
        let url = self.endpoint();
        debug!("Fetching URL: {}", url);

        // The store's default ordering; everything downstream assumes it
        let mut request = self.client.get(&url).query(&[("order", "rating.desc")]);
        if let Some(key) = &self.config.api_key {
            request = request.header("apikey", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::from_reqwest(SOURCE_NAME, e))?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                source_name: SOURCE_NAME,
                status: response.status().as_u16(),
            });
        }

        let stays: Vec<LocalStay> = response
            .json()
            .await
            .map_err(|e| SourceError::from_reqwest(SOURCE_NAME, e))?;

        info!("Fetched {} curated records from the store", stays.len());
        Ok(stays.into_iter().map(Accommodation::Local).collect())
    }

    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }
}
