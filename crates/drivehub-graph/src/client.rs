//! Microsoft Graph API client.
//!
//! Provides authenticated access to the drive listing endpoint via
//! client-credentials OAuth against Azure AD.

use async_trait::async_trait;
use tracing::{debug, info};

use drivehub_core::config::graph::GraphConfig;
use drivehub_core::error::{AppError, ErrorKind};
use drivehub_core::result::AppResult;
use drivehub_core::traits::drive::DriveLister;
use drivehub_core::types::FileEntry;

use crate::types::{DriveChildrenResponse, SELECT_FIELDS, TokenResponse};

/// Graph API client for listing the drive root.
#[derive(Debug, Clone)]
pub struct GraphClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    /// Tenant, application, and endpoint configuration.
    config: GraphConfig,
}

impl GraphClient {
    /// Create a new Graph client.
    ///
    /// Construction never fails: credentials are checked on the refresh
    /// path so that cache hits work without them.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Check that the client-credentials triple is present.
    fn credentials(&self) -> AppResult<()> {
        if self.config.tenant_id.is_empty()
            || self.config.client_id.is_empty()
            || self.config.client_secret.is_empty()
        {
            return Err(AppError::configuration(
                "Missing Microsoft Graph credentials (tenant id, client id, client secret)",
            ));
        }
        Ok(())
    }

    /// Acquire an access token from the Azure AD token endpoint.
    async fn acquire_token(&self) -> AppResult<String> {
        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.config.login_endpoint.trim_end_matches('/'),
            self.config.tenant_id,
        );

        debug!(tenant_id = %self.config.tenant_id, "Requesting Graph access token");

        let params = [
            ("grant_type", "client_credentials"),
            ("scope", self.config.scope.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Credential, "Token request failed", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::credential(format!(
                "Token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Credential, "Failed to parse token response", e)
        })?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl DriveLister for GraphClient {
    async fn list_root_children(&self) -> AppResult<Vec<FileEntry>> {
        self.credentials()?;
        let token = self.acquire_token().await?;

        let url = format!(
            "{}/me/drive/root/children",
            self.config.api_endpoint.trim_end_matches('/'),
        );

        let response = self
            .http
            .get(&url)
            .query(&[("$select", SELECT_FIELDS)])
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Upstream, "Drive listing request failed", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::upstream(format!(
                "Drive listing returned {status}: {body}"
            )));
        }

        let listing: DriveChildrenResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Upstream, "Failed to parse drive listing", e)
        })?;

        let files: Vec<FileEntry> = listing.value.into_iter().map(FileEntry::from).collect();
        info!(count = files.len(), "Fetched drive root listing");
        Ok(files)
    }
}
