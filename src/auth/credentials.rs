use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{PersonioError, Result};
use crate::personio::parse::parse_data;

/// Secret used to authenticate with the Personio API v1.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    /// Token to use for the first authenticated call, if one is already known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            access_token: None,
        }
    }

    /// Reads credentials from a JSON file (`clientId`, `clientSecret`, optional `accessToken`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            PersonioError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let credentials: Credentials = serde_json::from_str(&contents).map_err(|e| {
            PersonioError::Config(format!("Invalid credentials file {}: {e}", path.display()))
        })?;
        credentials.validate()?;
        Ok(credentials)
    }

    /// Reads credentials from `<config dir>/personio/credentials.json`.
    pub fn from_default_location() -> Result<Self> {
        let path = default_credentials_path().ok_or_else(|| {
            PersonioError::Config("No user config directory available".to_string())
        })?;
        Self::from_file(path)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
            return Err(PersonioError::Config(
                "Client id and client secret must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Location searched by [`Credentials::from_default_location`].
pub fn default_credentials_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("personio").join("credentials.json"))
}

#[derive(Debug, Deserialize)]
struct AuthData {
    token: String,
}

/// Exchanges client credentials for a fresh access token at `<base_url>/auth`.
pub async fn fetch_access_token(
    client: &Client,
    base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String> {
    let token_url = format!("{}/auth", base_url);
    let params = [("client_id", client_id), ("client_secret", client_secret)];

    let resp = client
        .post(&token_url)
        .header("Accept", "application/json")
        .form(&params)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(PersonioError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = resp.bytes().await?;
    let auth: AuthData = parse_data(&body)?;

    if auth.token.trim().is_empty() {
        return Err(PersonioError::Api {
            code: 0,
            message: "Access token was empty".to_string(),
        });
    }

    Ok(auth.token)
}
