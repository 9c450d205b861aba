/// Authenticated client for the Rancher v3 REST API.
///
/// Every endpoint used here returns its records wrapped in a
/// `{"data": [...]}` envelope and is queried with a bearer token.
/// Responses other than HTTP 200 are reported as [`ApiError`].
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::rancher::api_error::ApiError;
use crate::rancher::cluster::Cluster;
use crate::rancher::node::Node;
use crate::settings::settings::Settings;

#[derive(Deserialize)]
struct ApiCollection<T> {
    data: Vec<T>,
}

pub struct RancherClient {
    client: reqwest::Client,
    api_url_base: String,
    api_token: String,
}

impl RancherClient {
    pub fn new(settings: &Settings, request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .danger_accept_invalid_certs(!settings.main.ssl_verify_enabled())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url_base: settings.main.api_url_base(),
            api_token: settings.main.rancher_token.clone(),
        })
    }

    /// The `<rancher_url>/v3` base every request is made against.
    pub fn api_url_base(&self) -> &str {
        &self.api_url_base
    }

    /// Lists all clusters.
    /// GET /v3/clusters
    pub async fn get_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        let url = format!("{}/clusters", self.api_url_base);
        self.get_data(&url).await
    }

    /// Lists the nodes of one cluster.
    /// GET /v3/clusters/{cluster_id}/nodes
    pub async fn get_nodes(&self, cluster_id: &str) -> Result<Vec<Node>, ApiError> {
        let url = format!("{}/clusters/{}/nodes", self.api_url_base, cluster_id);
        self.get_data(&url).await
    }

    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let collection: ApiCollection<T> =
            response.json().await.map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })?;

        Ok(collection.data)
    }
}
