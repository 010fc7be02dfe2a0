//! Microsoft Graph client configuration.

use serde::{Deserialize, Serialize};

/// Microsoft Graph (OneDrive) client configuration.
///
/// `tenant_id`, `client_id`, and `client_secret` are mandatory; they are
/// checked on the refresh path, after the cache has been consulted, so a
/// cache hit never requires credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Azure AD tenant id.
    #[serde(default)]
    pub tenant_id: String,
    /// Azure AD application (client) id.
    #[serde(default)]
    pub client_id: String,
    /// Azure AD client secret.
    #[serde(default)]
    pub client_secret: String,
    /// OAuth scope requested for the access token.
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Token endpoint base URL.
    #[serde(default = "default_login_endpoint")]
    pub login_endpoint: String,
    /// Graph API base URL.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            scope: default_scope(),
            login_endpoint: default_login_endpoint(),
            api_endpoint: default_api_endpoint(),
        }
    }
}

fn default_scope() -> String {
    "https://graph.microsoft.com/.default".to_string()
}

fn default_login_endpoint() -> String {
    "https://login.microsoftonline.com".to_string()
}

fn default_api_endpoint() -> String {
    "https://graph.microsoft.com/v1.0".to_string()
}
