use std::time::Duration;

use reqwest::{header, Client};
use serde_json::Value;

use crate::error::{Error, Result};

pub const USER_AGENT: &str = "jobscope/0.1 (remote tech job market analysis)";

/// Thin JSON GET client shared by every job board.
#[derive(Clone)]
pub struct JobBoardClient {
    client: Client,
}

impl JobBoardClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    pub async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(response.json().await?)
    }
}
