use chrono::NaiveDate;
use log::debug;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::LogLevel;
use crate::auth::credentials::Credentials;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::personio::employee::Employee;
use crate::personio::paging::collect_pages;
use crate::personio::timeoff::{TimeOff, TimeOffContainer};
use crate::personio::transport::Transport;

/// Date format of the `start_date`/`end_date` query parameters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

const EMPLOYEES_PATH: &str = "/company/employees";
const TIME_OFFS_PATH: &str = "/company/time-offs";

/// Client for the Personio API v1.
///
/// Personio hands out single-use access tokens and names the next token in
/// each response. The client keeps that token internally and serializes
/// authenticated calls; use one client per concurrent worker if calls should
/// overlap.
pub struct ServiceClient {
    transport: Transport,
    page_size: usize,
    log_level: LogLevel,
}

impl ServiceClient {
    /// Creates a client for the default endpoint.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Creates a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(credentials, &config)?;
        Ok(Self {
            transport,
            page_size: config.page_size.clamp(1, crate::config::MAX_PAGE_SIZE),
            log_level: config.log_level,
        })
    }

    /// Aborts in-flight and future calls with [`crate::PersonioError::Cancelled`]
    /// once `cancel` fires.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.transport.set_cancellation(cancel);
        self
    }

    /// Exchanges a client id and secret for a fresh access token.
    ///
    /// The token is returned to the caller and not stored by the client.
    pub async fn authenticate(&self, client_id: &str, client_secret: &str) -> Result<String> {
        self.transport.authenticate(client_id, client_secret).await
    }

    /// Fetches a single employee by id.
    ///
    /// An unknown id yields a status error with [`crate::PersonioError::is_not_found`].
    pub async fn get_employee(&self, id: i64) -> Result<Employee> {
        let path = format!("{}/{}", EMPLOYEES_PATH, id);
        self.transport
            .request_json(Method::GET, &path, &[])
            .await
    }

    /// Fetches every employee, following pages until upstream runs out.
    pub async fn get_employees(&self) -> Result<Vec<Employee>> {
        let transport = &self.transport;
        let log_level = self.log_level;

        collect_pages(0, usize::MAX, self.page_size, move |offset, step| {
            log_page(log_level, "employees", offset, step);
            let query = vec![
                ("limit", step.to_string()),
                ("offset", offset.to_string()),
            ];
            async move {
                transport
                    .request_json::<Vec<Employee>>(Method::GET, EMPLOYEES_PATH, &query)
                    .await
            }
        })
        .await
    }

    /// Fetches up to `limit` time-offs, skipping the first `offset`, that
    /// intersect `[start, end]` (both inclusive).
    ///
    /// A missing bound leaves that side of the range open. `offset` and
    /// `limit` are not bound by the upstream page size; larger windows are
    /// fetched page by page. Fewer than `limit` results mean upstream has no
    /// more matching records.
    pub async fn get_time_offs(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<TimeOff>> {
        let mut range: Vec<(&str, String)> = vec![];
        if let Some(start) = start {
            range.push(("start_date", start.format(QUERY_DATE_FORMAT).to_string()));
        }
        if let Some(end) = end {
            range.push(("end_date", end.format(QUERY_DATE_FORMAT).to_string()));
        }

        let transport = &self.transport;
        let log_level = self.log_level;

        collect_pages(offset, limit, self.page_size, move |page_offset, step| {
            log_page(log_level, "time-offs", page_offset, step);
            let mut query = range.clone();
            query.push(("limit", step.to_string()));
            query.push(("offset", page_offset.to_string()));
            async move {
                transport
                    .request_json::<Vec<TimeOffContainer>>(Method::GET, TIME_OFFS_PATH, &query)
                    .await
                    .map(|page| {
                        page.into_iter()
                            .map(|container| container.attributes)
                            .collect::<Vec<_>>()
                    })
            }
        })
        .await
    }
}

fn log_page(log_level: LogLevel, resource: &str, offset: usize, step: usize) {
    if matches!(log_level, LogLevel::Debug) {
        debug!("Fetch {} page: offset={}, limit={}", resource, offset, step);
    }
}
