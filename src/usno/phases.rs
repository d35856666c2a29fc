use std::fmt;

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};

use crate::{
    config,
    types::{MoonApiResponse, PhaseEvent},
    utils::DATE_FORMAT,
};

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Status(StatusCode),
    Payload(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "request to phase API failed: {}", e),
            FetchError::Status(status) => write!(f, "phase API responded with {}", status),
            FetchError::Payload(msg) => write!(f, "malformed phase API response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Payload(err.to_string())
        } else {
            FetchError::Http(err)
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Payload(err.to_string())
    }
}

/// Source of major phase events.
#[allow(async_fn_in_trait)]
pub trait PhaseProvider {
    /// Returns `count` consecutive phase events starting at `start`, in
    /// chronological order.
    async fn phases(&self, start: NaiveDate, count: u32) -> Result<Vec<PhaseEvent>, FetchError>;
}

/// [`PhaseProvider`] backed by the USNO web API.
pub struct UsnoClient {
    client: Client,
    api_url: String,
}

impl UsnoClient {
    pub fn new(api_url: String) -> Self {
        Self::with_client(Client::new(), api_url)
    }

    pub fn with_client(client: Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Client for the endpoint named by `MOONPHASE_API_URL`.
    pub fn from_env() -> Self {
        Self::new(config::api_url())
    }

    pub fn query_url(&self, start: NaiveDate, count: u32) -> String {
        format!(
            "{url}?date={date}&nump={count}",
            url = self.api_url,
            date = start.format(DATE_FORMAT),
            count = count
        )
    }
}

impl PhaseProvider for UsnoClient {
    /// Fetches `count` phases starting at `start`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on connection or transport failures
    /// - [`FetchError::Status`] for any non-success status code
    /// - [`FetchError::Payload`] if the body is not a valid phase document
    async fn phases(&self, start: NaiveDate, count: u32) -> Result<Vec<PhaseEvent>, FetchError> {
        let api_url = self.query_url(start, count);
        let response = self.client.get(&api_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let json: MoonApiResponse = serde_json::from_str(&body)?;
        events_from_response(json)
    }
}

/// Converts the API document into dated phase events, preserving order.
pub fn events_from_response(response: MoonApiResponse) -> Result<Vec<PhaseEvent>, FetchError> {
    response
        .phasedata
        .into_iter()
        .map(|entry| {
            let date = NaiveDate::from_ymd_opt(entry.year, entry.month, entry.day).ok_or_else(
                || {
                    FetchError::Payload(format!(
                        "invalid date {}-{}-{} for {}",
                        entry.year, entry.month, entry.day, entry.phase
                    ))
                },
            )?;

            Ok(PhaseEvent {
                date,
                phase: entry.phase,
                time: Some(entry.time).filter(|t| !t.is_empty()),
            })
        })
        .collect()
}
