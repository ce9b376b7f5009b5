use std::future::Future;

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::LogLevel;
use crate::auth::credentials::{Credentials, fetch_access_token};
use crate::auth::token::TokenSlot;
use crate::config::ClientConfig;
use crate::error::{PersonioError, Result};
use crate::personio::parse::parse_data;

/// HTTP plumbing shared by all endpoints: URL building, bearer token
/// rotation, status checks and cancellation.
pub(crate) struct Transport {
    client: Client,
    base_url: String,
    credentials: Credentials,
    token: Mutex<TokenSlot>,
    cancel: Option<CancellationToken>,
    log_level: LogLevel,
}

impl Transport {
    pub(crate) fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        credentials.validate()?;

        let client = Client::builder().timeout(config.timeout).build()?;
        let token = TokenSlot::new(credentials.access_token.clone());

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            token: Mutex::new(token),
            cancel: None,
            log_level: config.log_level,
        })
    }

    pub(crate) fn set_cancellation(&mut self, cancel: CancellationToken) {
        self.cancel = Some(cancel);
    }

    /// Fetches a new access token without touching the held one.
    pub(crate) async fn authenticate(&self, client_id: &str, client_secret: &str) -> Result<String> {
        self.cancellable(fetch_access_token(
            &self.client,
            &self.base_url,
            client_id,
            client_secret,
        ))
        .await
    }

    /// Sends a JSON request and decodes the `data` member of the response envelope.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self.request(method, path, query).await?;
        parse_data(&body)
    }

    /// Sends an authenticated request and returns the raw body of a 2xx response.
    ///
    /// The call consumes the held token and stores the rotated one from the
    /// response. The token slot stays locked for the whole exchange, so calls
    /// on one client run one at a time.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>> {
        let url = build_url(&self.base_url, path, query);

        if matches!(self.log_level, LogLevel::Debug) {
            debug!("{} {}", method, url);
        }

        let request = self
            .client
            .request(method, &url)
            .header(ACCEPT, "application/json");

        let mut slot = self.token.lock().await;
        if slot.is_empty() {
            debug!("No access token held, authenticating");
            let token = self
                .authenticate(&self.credentials.client_id, &self.credentials.client_secret)
                .await?;
            slot.store(token);
        }

        let request = match slot.take() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = self.cancellable(send(request)).await?;

        if slot.rotate(response.headers()) {
            debug!("Access token rotated by response");
        } else {
            debug!("Response carried no rotation token, next call re-authenticates");
        }
        drop(slot);

        self.cancellable(read_body(response)).await
    }

    async fn cancellable<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match &self.cancel {
            Some(cancel) => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Err(PersonioError::Cancelled),
                    result = fut => result,
                }
            }
            None => fut.await,
        }
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Response> {
    Ok(request.send().await?)
}

async fn read_body(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    if !status.is_success() {
        return Err(PersonioError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}

/// Joins base URL, path and percent-encoded query parameters.
pub(crate) fn build_url(base_url: &str, path: &str, query: &[(&str, String)]) -> String {
    let mut url = format!("{}{}", base_url, path);

    for (index, (key, value)) in query.iter().enumerate() {
        url.push(if index == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    url
}
