use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::models::{Accommodation, LiveStay};
use crate::sources::traits::StaySource;
use crate::sources::types::StaySearchParams;

const SOURCE_NAME: &str = "booking search";

/// Connection settings for the third-party booking search API
#[derive(Debug, Clone)]
pub struct LiveSearchConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl LiveSearchConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for the third-party booking search.
///
/// Holds the stay parameters it searches with; a new search replaces the
/// parameters and issues a fresh request, it does not cancel an earlier
/// one still in flight.
pub struct LiveSearchClient {
    client: Client,
    config: LiveSearchConfig,
    params: StaySearchParams,
}

impl LiveSearchClient {
    pub fn new(config: LiveSearchConfig, params: StaySearchParams) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sifnos-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::from_reqwest(SOURCE_NAME, e))?;

        Ok(Self {
            client,
            config,
            params,
        })
    }

    pub fn set_params(&mut self, params: StaySearchParams) {
        self.params = params;
    }

    pub fn params(&self) -> &StaySearchParams {
        &self.params
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    fn query_pairs(params: &StaySearchParams) -> Vec<(&'static str, String)> {
        vec![
            ("location", params.location.clone()),
            ("checkin", params.check_in.to_string()),
            ("checkout", params.check_out.to_string()),
            ("adults", params.adults.to_string()),
            ("children", params.children.to_string()),
        ]
    }

    /// Run the booking search with the given parameters
    pub async fn search(
        &self,
        params: &StaySearchParams,
    ) -> Result<Vec<Accommodation>, SourceError> {
        let url = self.endpoint();
        debug!(
            "Searching {} for {} ({} nights)",
            url,
            params.location,
            params.nights()
        );

        let mut request = self.client.get(&url).query(&Self::query_pairs(params));
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
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

        let stays: Vec<LiveStay> = response
            .json()
            .await
            .map_err(|e| SourceError::from_reqwest(SOURCE_NAME, e))?;

        info!("Booking search returned {} live results", stays.len());
        Ok(stays.into_iter().map(Accommodation::ThirdParty).collect())
    }
}

#[async_trait]
impl StaySource for LiveSearchClient {
    async fn fetch(&self) -> Result<Vec<Accommodation>, SourceError> {
        self.search(&self.params).await
    }

    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }
}
