//! Host-provided configuration
//!
//! The admin page is served with a global object holding the REST base URL,
//! the request nonce and the translated UI strings. It is read once at
//! startup; a missing or empty value stops the editor from mounting.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("host configuration object `{0}` is not defined")]
    Missing(String),
    #[error("invalid host configuration: {0}")]
    Parse(String),
    #[error("`apiUrl` is empty")]
    EmptyApiUrl,
    #[error("`nonce` is empty")]
    EmptyNonce,
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Translated button and prompt texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiStrings {
    pub save: String,
    pub cancel: String,
    pub delete: String,
    pub edit: String,
    pub add_new: String,
    pub confirm_delete: String,
}

impl Default for UiStrings {
    fn default() -> Self {
        Self {
            save: "Save".to_string(),
            cancel: "Cancel".to_string(),
            delete: "Delete".to_string(),
            edit: "Edit".to_string(),
            add_new: "Add New".to_string(),
            confirm_delete: "Are you sure you want to delete this item?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    /// Plugin REST namespace, e.g. `https://example.com/wp-json/s2j-alliance-manager/v1/`
    pub api_url: String,
    pub nonce: String,
    #[serde(default)]
    pub strings: UiStrings,
}

impl AdminConfig {
    /// Name of the global the host page defines
    pub const GLOBAL_NAME: &'static str = "s2jAllianceManager";

    const REST_PREFIX: &'static str = "/wp-json/";

    pub fn new(api_url: impl Into<String>, nonce: impl Into<String>) -> Result<Self, ConfigError> {
        Self {
            api_url: api_url.into(),
            nonce: nonce.into(),
            strings: UiStrings::default(),
        }
        .validated()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(json)?.validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if self.nonce.trim().is_empty() {
            return Err(ConfigError::EmptyNonce);
        }
        Ok(self)
    }

    /// Joins `route` onto the plugin namespace with exactly one `/`.
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), route.trim_start_matches('/'))
    }

    /// Root of the REST API (`…/wp-json/`), used for core routes such as media.
    pub fn rest_root(&self) -> String {
        match self.api_url.find(Self::REST_PREFIX) {
            Some(pos) => self.api_url[..pos + Self::REST_PREFIX.len()].to_string(),
            None => Self::REST_PREFIX.to_string(),
        }
    }

    /// Joins `route` onto [`Self::rest_root`].
    pub fn core_endpoint(&self, route: &str) -> String {
        format!("{}{}", self.rest_root(), route.trim_start_matches('/'))
    }
}
