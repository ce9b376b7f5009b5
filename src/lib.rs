//! Unofficial async client for the Personio HR API v1.
//!
//! The client covers employee records and time-off periods:
//!
//! - [`ServiceClient::get_employee`] fetches one employee by id
//! - [`ServiceClient::get_employees`] pages through every employee
//! - [`ServiceClient::get_time_offs`] fetches a window of time-offs for a date range
//!
//! Employee records carry dynamically typed attributes; see
//! [`personio::attribute::AttributeContainer`] for the typed accessors.
//!
//! ```no_run
//! use personio_client::{Credentials, ServiceClient};
//! use personio_client::personio::attribute::AttributeContainer;
//!
//! # async fn example() -> personio_client::Result<()> {
//! let client = ServiceClient::new(Credentials::new("client-id", "client-secret"))?;
//!
//! for employee in client.get_employees().await? {
//!     println!("{:?}", employee.get_string_attribute("email"));
//! }
//!
//! let time_offs = client.get_time_offs(None, None, 0, 50).await?;
//! println!("{} time-offs", time_offs.len());
//! # Ok(())
//! # }
//! ```

/// Credential handling and the rotating access-token slot.
pub mod auth;
/// Client configuration.
pub mod config;
/// Error type shared by every operation.
pub mod error;
/// Personio-specific types and the service client.
pub mod personio;
/// Time-range helpers.
pub mod util;

pub use auth::credentials::Credentials;
pub use config::ClientConfig;
pub use error::{PersonioError, Result};
pub use personio::employee::Employee;
pub use personio::serviceclient::ServiceClient;
pub use personio::timeoff::TimeOff;

/// Logging verbosity for SDK operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Emit per-request debug output (page fetches, URLs).
    Debug,
    /// Emit standard informational output.
    Information,
}

impl Default for LogLevel {
    /// Defaults to `Information` logging.
    fn default() -> Self {
        LogLevel::Information
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<ServiceClient>;
    let _ = assert_send_sync::<PersonioError>;
};
