use super::TimeEntrySink;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::utils::time::format_hours;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

const API_KEY_HEADER: &str = "x-redmine-api-key";

/// Body of `POST /time_entries.json`.
#[derive(Debug, Serialize)]
struct TimeEntryRequest<'a> {
    time_entry: NewTimeEntry<'a>,
}

#[derive(Debug, Serialize)]
struct NewTimeEntry<'a> {
    #[serde(flatten)]
    entry: &'a TimeEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    activity_id: Option<u32>,
}

/// Redmine validation failures, e.g. `{"errors": ["Hours cannot be blank"]}`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

/// Redmine REST API client bound to one server and API key.
pub struct RedmineClient {
    base_url: String,
    activity_id: Option<u32>,
    client: Client,
}

impl RedmineClient {
    /// Build a client from the configuration. No request is made here.
    pub fn new(cfg: &Config) -> AppResult<Self> {
        Self::with_builder(cfg, Client::builder())
    }

    /// Like [`RedmineClient::new`], starting from a caller-tuned HTTP builder
    /// (proxy, TLS roots, timeouts).
    pub fn with_builder(cfg: &Config, builder: ClientBuilder) -> AppResult<Self> {
        let base_url = cfg
            .redmine_base_address
            .trim()
            .trim_end_matches('/')
            .to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut key = HeaderValue::from_str(cfg.api_key.trim()).map_err(|_| {
            AppError::Config("'api-key' contains characters not allowed in a header".to_string())
        })?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let client = builder
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url,
            activity_id: cfg.activity_id,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn time_entries_url(&self) -> String {
        format!("{}/time_entries.json", self.base_url)
    }
}

impl TimeEntrySink for RedmineClient {
    fn create_time_entry(&mut self, entry: &TimeEntry) -> AppResult<()> {
        let payload = TimeEntryRequest {
            time_entry: NewTimeEntry {
                entry,
                activity_id: self.activity_id,
            },
        };

        let response = self
            .client
            .post(self.time_entries_url())
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        debug!(
            issue_id = entry.issue_id,
            spent_on = %entry.spent_on,
            hours = %format_hours(entry.hours),
            "time entry created"
        );
        Ok(())
    }
}

/// Human readable message from a Redmine error body.
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) if !resp.errors.is_empty() => resp.errors.join("; "),
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}
