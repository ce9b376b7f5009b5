//! In-process emulation of the Personio API v1 used by the integration tests.
//!
//! Valid credentials are `abc`/`def`; `/auth` issues token `ghi`. Every
//! authenticated endpoint accepts `ghi` or `jkl`, rejects a token that was
//! used for the previous call, and rotates to the other token via the
//! `authorization` response header.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use personio_client::util::date_max;
use personio_client::{ClientConfig, Credentials, ServiceClient, TimeOff};
use serde_json::{Value, json};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const EMPLOYEE_EL_GONZO: i64 = 6205887;
pub const EMPLOYEE_MEGA_HUI: i64 = 7161253;
pub const TIME_OFF_EARLY: i64 = 125814620;
pub const TIME_OFF_LATE: i64 = 125682392;

const PAGING_MAX_LIMIT: usize = 200;

const TIME_OFFS_BODY: &str = include_str!("../fixtures/time-offs.json");
const EMPLOYEE_EL_GONZO_BODY: &str = include_str!("../fixtures/employee-6205887.json");
const EMPLOYEE_MEGA_HUI_BODY: &str = include_str!("../fixtures/employee-7161253.json");

#[derive(Clone)]
pub struct PersonioMock {
    last_token: Arc<Mutex<String>>,
    time_offs: Arc<Vec<Value>>,
    employees: Arc<Vec<(i64, Value)>>,
}

impl PersonioMock {
    pub fn new() -> Self {
        let time_offs: Value = serde_json::from_str(TIME_OFFS_BODY).expect("valid time-offs fixture");
        let employees = [
            (EMPLOYEE_EL_GONZO, EMPLOYEE_EL_GONZO_BODY),
            (EMPLOYEE_MEGA_HUI, EMPLOYEE_MEGA_HUI_BODY),
        ]
        .into_iter()
        .map(|(id, body)| {
            let envelope: Value = serde_json::from_str(body).expect("valid employee fixture");
            (id, envelope["data"].clone())
        })
        .collect();

        Self {
            last_token: Arc::new(Mutex::new(String::new())),
            time_offs: Arc::new(
                time_offs["data"]
                    .as_array()
                    .cloned()
                    .expect("time-offs fixture holds a data array"),
            ),
            employees: Arc::new(employees),
        }
    }

    /// Checks the bearer token and returns the rotation token to send back.
    fn authenticate(&self, request: &Request) -> Option<&'static str> {
        let token = request
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim_start_matches("Bearer ").to_string())
            .unwrap_or_default();

        let mut last = self.last_token.lock().unwrap();
        if (token != "ghi" && token != "jkl") || token == *last {
            return None;
        }

        let next = if token == "ghi" { "jkl" } else { "ghi" };
        *last = token;
        Some(next)
    }

    fn auth(&self, request: &Request) -> ResponseTemplate {
        let form = String::from_utf8_lossy(&request.body).to_string();
        let field = |name: &str| {
            form.split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        };

        if field("client_id").as_deref() == Some("abc")
            && field("client_secret").as_deref() == Some("def")
        {
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": {"token": "ghi"}}))
        } else {
            ResponseTemplate::new(401)
        }
    }

    fn time_offs(&self, request: &Request) -> ResponseTemplate {
        let query = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        let start = match query("start_date").map(|s| parse_query_date(&s)) {
            Some(Some(start)) => start,
            Some(None) => return ResponseTemplate::new(400),
            None => DateTime::<Utc>::MIN_UTC,
        };
        let end = match query("end_date").map(|s| parse_query_date(&s)) {
            Some(Some(end)) => end,
            Some(None) => return ResponseTemplate::new(400),
            None => date_max(),
        };
        let limit = match query("limit").map(|s| s.parse::<usize>()) {
            Some(Ok(limit)) if (1..=PAGING_MAX_LIMIT).contains(&limit) => limit,
            Some(_) => return ResponseTemplate::new(400),
            None => PAGING_MAX_LIMIT,
        };
        let offset = match query("offset").map(|s| s.parse::<usize>()) {
            Some(Ok(offset)) => offset,
            Some(Err(_)) => return ResponseTemplate::new(400),
            None => 0,
        };
        if end < start {
            return ResponseTemplate::new(400);
        }

        let data: Vec<Value> = self
            .time_offs
            .iter()
            .filter(|container| {
                let time_off: TimeOff = serde_json::from_value(container["attributes"].clone())
                    .expect("valid time-off fixture");
                time_off.overlaps(&start, &end)
            })
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data}))
    }

    fn employees(&self, request: &Request) -> ResponseTemplate {
        let query = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == name)
                .and_then(|(_, value)| value.parse::<usize>().ok())
        };
        let limit = query("limit").unwrap_or(PAGING_MAX_LIMIT);
        let offset = query("offset").unwrap_or(0);

        let data: Vec<Value> = self
            .employees
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(_, employee)| employee.clone())
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data}))
    }

    fn employee(&self, id: &str) -> ResponseTemplate {
        let Ok(id) = id.parse::<i64>() else {
            return ResponseTemplate::new(404);
        };

        match self.employees.iter().find(|(known, _)| *known == id) {
            Some((_, employee)) => ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": employee})),
            None => ResponseTemplate::new(404),
        }
    }
}

impl Respond for PersonioMock {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let method = request.method.as_str();
        let path = request.url.path().trim_end_matches('/');

        if method == "POST" && path == "/auth" {
            return self.auth(request);
        }
        if method != "GET" {
            return ResponseTemplate::new(404);
        }

        let employee_id = path.strip_prefix("/company/employees/");
        let known = matches!(path, "/company/time-offs" | "/company/employees")
            || employee_id.is_some_and(|id| !id.contains('/'));
        if !known {
            return ResponseTemplate::new(404);
        }

        let Some(next) = self.authenticate(request) else {
            return ResponseTemplate::new(401);
        };

        let response = match (path, employee_id) {
            ("/company/time-offs", _) => self.time_offs(request),
            (_, Some(id)) => self.employee(id),
            _ => self.employees(request),
        };
        response.insert_header("authorization", format!("Bearer {next}"))
    }
}

/// Starts a mock server emulating the API.
pub async fn start_mock_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(PersonioMock::new())
        .mount(&server)
        .await;
    server
}

pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri())
}

pub fn test_client(server: &MockServer) -> ServiceClient {
    ServiceClient::with_config(Credentials::new("abc", "def"), test_config(server))
        .expect("failed to build client")
}

/// Received requests whose path is `path`, in arrival order.
pub async fn requests_to(server: &MockServer, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == path)
        .collect()
}

pub fn query_value(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
}

fn parse_query_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
