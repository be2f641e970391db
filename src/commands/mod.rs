//! REST Command Wrappers
//!
//! Bindings to the plugin's REST routes, organized by resource. Every
//! request carries the host nonce.

mod partners;
mod rank_labels;
mod media;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use alliance_core::{AdminConfig, SaveReceipt, SyncError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use media::MediaLibrary;
pub use partners::PartnerEndpoint;
pub use rank_labels::RankLabelEndpoint;

/// Header WordPress checks the REST nonce in
pub const NONCE_HEADER: &str = "X-WP-Nonce";

/// HTTP client bound to one admin configuration
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    config: Rc<AdminConfig>,
}

/// `{ success, message }` body returned by the save routes
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn into_receipt(self) -> Result<SaveReceipt, SyncError> {
        if self.success {
            Ok(SaveReceipt { message: self.message })
        } else {
            Err(SyncError::rejected(self.message))
        }
    }
}

/// `WP_Error` body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl RestClient {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            client: Client::new(),
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// GET a route of the plugin namespace
    pub async fn get<T: DeserializeOwned>(&self, route: &str) -> Result<T, SyncError> {
        self.get_url(&self.config.endpoint(route)).await
    }

    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T, SyncError> {
        debug!(%url, "GET");
        self.send(self.client.get(url)).await
    }

    /// POST a JSON body to a route of the plugin namespace
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, route: &str, body: &B) -> Result<T, SyncError> {
        let url = self.config.endpoint(route);
        debug!(%url, "POST");
        self.send(self.client.post(&url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, SyncError> {
        let response = request
            .header(NONCE_HEADER, self.config.nonce.as_str())
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.json::<ErrorBody>().await.ok().and_then(|body| body.message);
            return Err(SyncError::from_status(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(|e| SyncError::Server {
            status: Some(status.as_u16()),
            message: format!("Unexpected response from the server: {e}"),
        })
    }
}
