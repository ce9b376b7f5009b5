use reqwest::header::{AUTHORIZATION, HeaderMap};

const BEARER_PREFIX: &str = "Bearer ";

/// Holder of the single access token a client may use next.
///
/// Personio rotates tokens: each token is good for one call and the response
/// names the token for the following call. A token is taken out of the slot
/// when it is attached to a request; a rotation header puts the next one back.
#[derive(Debug, Default)]
pub struct TokenSlot {
    token: Option<String>,
}

impl TokenSlot {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            token: initial.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none()
    }

    /// Stores a freshly issued token, replacing any unconsumed one.
    pub fn store(&mut self, token: String) {
        if !token.trim().is_empty() {
            self.token = Some(token);
        }
    }

    /// Removes the held token for attaching to an outgoing request.
    pub fn take(&mut self) -> Option<String> {
        self.token.take()
    }

    /// Applies the rotation header of a response, if it carries a token.
    ///
    /// Returns `true` when the slot was refilled.
    pub fn rotate(&mut self, headers: &HeaderMap) -> bool {
        match rotation_token(headers) {
            Some(next) => {
                self.token = Some(next);
                true
            }
            None => false,
        }
    }
}

/// Extracts the next token from a response's `authorization` header.
pub fn rotation_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
