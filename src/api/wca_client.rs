use anyhow::{Context, Result};
use log::info;
use serde_json::Value;
use std::future::Future;
use urlencoding::encode;

use crate::config::settings::ApiSettings;
use crate::errors::{fetch_context, parse_context};
use crate::http::HttpClient;

/// Anything that can produce the raw person records for a set of WCA ids
pub trait RecordSource {
    fn fetch_records(&self, wca_ids: &[&str]) -> impl Future<Output = Result<Vec<Value>>> + Send;
}

/// WCA public API client
#[derive(Debug, Clone)]
pub struct WcaClient {
    client: HttpClient,
    base_url: String,
    per_page: u32,
}

impl WcaClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            per_page: settings.per_page,
        })
    }

    /// Fetch the persons endpoint for all `wca_ids` in one request
    pub async fn fetch_persons(&self, wca_ids: &[&str]) -> Result<Vec<Value>> {
        let url = self.build_persons_url(wca_ids);
        info!("Fetching {} persons from {}", wca_ids.len(), self.base_url);

        let response = self
            .client
            .get(&url)
            .await
            .with_context(|| fetch_context(&url))?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        let data: Value = response
            .json()
            .await
            .with_context(|| parse_context("persons response"))?;

        let records = Self::into_records(data)?;
        info!("Fetched {} person records", records.len());
        Ok(records)
    }

    // --- Helper Methods ---

    pub fn build_persons_url(&self, wca_ids: &[&str]) -> String {
        let ids = wca_ids
            .iter()
            .map(|id| encode(id).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/persons?per_page={}&wca_ids={}",
            self.base_url, self.per_page, ids
        )
    }

    fn into_records(data: Value) -> Result<Vec<Value>> {
        match data {
            Value::Array(records) => Ok(records),
            other => anyhow::bail!("Expected a JSON array of persons, got: {}", other),
        }
    }
}

impl RecordSource for WcaClient {
    async fn fetch_records(&self, wca_ids: &[&str]) -> Result<Vec<Value>> {
        self.fetch_persons(wca_ids).await
    }
}
