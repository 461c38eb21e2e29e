use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client with a fixed user agent and request timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}
