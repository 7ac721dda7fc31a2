//! reqwest による `/counties` `/match` 呼び出し

use crate::config::Config;
use crate::error::Result;
use jagedo_match_common::{CountyList, Endpoints, Error, Match, Query, SearchBackend};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoints,
        })
    }

    pub fn from_config(config: &Config, base_url: Option<&str>) -> Result<Self> {
        let endpoints = Endpoints::with_base(&config.resolve_base_url(base_url))?;
        Self::new(endpoints, config.timeout())
    }
}

impl SearchBackend for HttpBackend {
    async fn fetch_counties(&self) -> jagedo_match_common::Result<CountyList> {
        let url = self.endpoints.counties_url();
        debug!(%url, "fetching counties");

        let response = self.client.get(&url).send().await.map_err(network)?;
        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_matches(&self, query: &Query) -> jagedo_match_common::Result<Vec<Match>> {
        let url = self.endpoints.match_url();
        debug!(%url, job_type = %query.job_type, location = %query.location, "fetching matches");

        let response = self
            .client
            .post(&url)
            .json(query)
            .send()
            .await
            .map_err(network)?;
        let body = success_body(response).await?;
        let matches: Vec<Match> = serde_json::from_str(&body)?;
        debug!(count = matches.len(), "matches received");
        Ok(matches)
    }
}

/// 2xx以外は Status エラー
async fn success_body(response: reqwest::Response) -> jagedo_match_common::Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }
    response.text().await.map_err(network)
}

fn network(e: reqwest::Error) -> Error {
    Error::Network(e.to_string())
}
