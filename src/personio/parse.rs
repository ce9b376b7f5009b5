use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{PersonioError, Result};

/// Status part of the `{success, error, data}` envelope every v1 endpoint returns.
#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    success: bool,
    #[serde(default)]
    error: Option<EnvelopeError>,
}

#[derive(Debug, Default, Deserialize)]
struct EnvelopeError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData<T> {
    data: T,
}

/// Fails with [`PersonioError::Api`] if the envelope reports `success: false`.
pub(crate) fn check_envelope(body: &[u8]) -> Result<()> {
    let status: EnvelopeStatus = serde_json::from_slice(body)?;
    if status.success {
        return Ok(());
    }

    let error = status.error.unwrap_or_default();
    Err(PersonioError::Api {
        code: error.code,
        message: error.message,
    })
}

/// Checks the envelope and decodes its `data` member.
pub(crate) fn parse_data<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    check_envelope(body)?;
    let envelope: EnvelopeData<T> = serde_json::from_slice(body)?;
    Ok(envelope.data)
}

/// Reads JSON `null` as the field's default, like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
