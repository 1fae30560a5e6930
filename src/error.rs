//! Error types for the clatest library.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the fetch → build → filter → render pipeline can produce.
///
/// All of them are fatal to the current invocation: nothing is retried and no
/// partial series or partial output is produced.
#[derive(Error, Debug)]
pub enum Error {
    /// A date token did not split into exactly three `/`-delimited parts.
    #[error("Incorrect Date Format: {0:?}")]
    BadDateFormat(String),

    /// The parts were present but did not form a real calendar date.
    #[error("invalid calendar date {input:?}: {reason}")]
    InvalidCalendarDate { input: String, reason: String },

    /// Non-success HTTP status from the API.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// Malformed JSON in a response body.
    #[error("decode json: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network / HTTP transport failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
