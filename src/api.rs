//! Synchronous client for the **disease.sh historical API (v3)**.
//!
//! One call to [`Client::fetch`] is one `GET {base_url}/historical/{country}?lastdays={n}`.
//! There is no retry, paging or caching: a failed request fails the invocation.
//!
//! ### Notes
//! - On a non-2xx status the API answers with `{"message": "..."}`; that message
//!   becomes [`Error::Remote`]. A body that is not JSON surfaces as [`Error::Decode`].
//! - Network timeouts use a sane default (30s) and can be adjusted by editing the client builder.
//!
//! Typical usage:
//! ```no_run
//! # use clatest_rs::{Client, Query};
//! # use chrono::NaiveDate;
//! let client = Client::default();
//! let day = NaiveDate::from_ymd_opt(2021, 3, 25).unwrap();
//! let series = client.fetch_series(&Query::on("australia", day))?;
//! # Ok::<(), clatest_rs::Error>(())
//! ```
use crate::date::lookback_days;
use crate::error::{Error, Result};
use crate::models::{ErrorBody, Query, RawEnvelope};
use crate::series::Series;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://disease.sh/v3/covid-19";

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// Allow -, _, . unescaped in country names
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

impl Client {
    /// Client against a custom API root (e.g. a local mock server).
    ///
    /// Panics if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("clatest_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// URL for the last `days` days of `country`.
    pub fn historical_url(&self, country: &str, days: u32) -> String {
        let country = percent_encoding::utf8_percent_encode(country.trim(), SAFE);
        format!("{}/historical/{}?lastdays={}", self.base_url, country, days)
    }

    /// Fetch the raw timeline for `country` covering the last `days` days.
    ///
    /// ### Errors
    /// - [`Error::Transport`]: the request could not be completed
    /// - [`Error::Remote`]: non-2xx status, carrying the API's `message`
    /// - [`Error::Decode`]: the body (success or error) is not the expected JSON
    pub fn fetch(&self, country: &str, days: u32) -> Result<RawEnvelope> {
        let url = self.historical_url(country, days);
        debug!("GET {url}");

        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        let body = resp.bytes()?;

        if !status.is_success() {
            let err = remote_error(status.as_u16(), &body);
            warn!("GET {url} failed with HTTP {status}: {err}");
            return Err(err);
        }

        let envelope: RawEnvelope = serde_json::from_slice(&body)?;
        debug!(
            "received {} days for {} ({} provinces)",
            envelope.timeline.cases.len(),
            envelope.country,
            envelope.provinces.len()
        );
        Ok(envelope)
    }

    /// Fetch, build, order and filter in one go, relative to today's date.
    pub fn fetch_series(&self, query: &Query) -> Result<Series> {
        self.fetch_series_at(query, Local::now().date_naive())
    }

    /// Same as [`Client::fetch_series`] with an explicit "today".
    pub fn fetch_series_at(&self, query: &Query, today: NaiveDate) -> Result<Series> {
        let envelope = self.fetch(&query.country, lookback_days(query.from, today))?;
        let mut series = Series::build(&envelope)?;
        series.order();
        series.filter(query.from, query.to, query.latest);
        debug!("{} records after filtering", series.len());
        Ok(series)
    }
}

/// Turn a non-2xx body into an error. Non-JSON bodies surface as decode errors.
fn remote_error(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => Error::Remote { status, message },
        Ok(ErrorBody { message: None }) => Error::Remote {
            status,
            message: format!("request failed with HTTP {status}"),
        },
        Err(e) => Error::Decode(e),
    }
}
