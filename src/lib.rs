//! clatest_rs
//!
//! A small Rust library for retrieving daily COVID-19 counts per country from
//! the disease.sh API and printing them. Pairs with the `clatest` CLI.
//!
//! ### Features
//! - Fetch the case/death/recovery timeline of one country
//! - Normalize the API's `m/d/yy` date keys into calendar dates
//! - Keep an inclusive date range, or only the most recent day
//! - Print as CSV or as an aligned, markdown-like table
//!
//! ### Example
//! ```no_run
//! use chrono::NaiveDate;
//! use clatest_rs::{Client, Query, render};
//!
//! let client = Client::default();
//! let query = Query {
//!     country: "australia".into(),
//!     from: NaiveDate::from_ymd_opt(2021, 3, 20).unwrap(),
//!     to: NaiveDate::from_ymd_opt(2021, 3, 25).unwrap(),
//!     latest: false,
//! };
//! let series = client.fetch_series(&query)?;
//! render::write_series(&series, "csv", std::io::stdout())?;
//! # Ok::<(), clatest_rs::Error>(())
//! ```

pub mod api;
pub mod date;
pub mod error;
pub mod models;
pub mod render;
pub mod series;

pub use api::Client;
pub use error::{Error, Result};
pub use models::{DailyRecord, Query, RawEnvelope};
pub use render::OutputFormat;
pub use series::Series;
