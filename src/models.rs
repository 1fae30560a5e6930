use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

/// Decoded body of `GET /historical/{country}?lastdays={n}`.
///
/// ```json
/// {"country":"Australia","province":["..."],
///  "timeline":{"cases":{"3/25/21":29239},"deaths":{...},"recovered":{...}}}
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawEnvelope {
    pub country: String,
    /// The API sends `null` here for countries without provinces.
    #[serde(rename = "province", default, deserialize_with = "de_null_as_empty")]
    pub provinces: Vec<String>,
    pub timeline: Timeline,
}

/// Three counters keyed by the same raw `m/d/yy` tokens.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Timeline {
    #[serde(default)]
    pub cases: HashMap<String, u64>,
    #[serde(default)]
    pub deaths: HashMap<String, u64>,
    #[serde(default)]
    pub recovered: HashMap<String, u64>,
}

fn de_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error payload of a non-2xx response, e.g. `{"message":"Country not found ..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// One day of counts for one country (one row = one day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub country: String,
    pub date: NaiveDate,
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// What a single invocation asks for, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub country: String,
    /// First day to keep (inclusive).
    pub from: NaiveDate,
    /// Last day to keep (inclusive).
    pub to: NaiveDate,
    /// Ignore `from`/`to` and keep only the most recent day.
    pub latest: bool,
}

impl Query {
    /// Query for a single exact day.
    pub fn on(country: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            country: country.into(),
            from: day,
            to: day,
            latest: false,
        }
    }
}
