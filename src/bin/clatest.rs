use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use clatest_rs::api::DEFAULT_BASE_URL;
use clatest_rs::date::parse_iso_date;
use clatest_rs::{Client, Query, render};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "clatest",
    version,
    about = "Get the latest stats on covid for your country",
    long_about = "Download daily covid case, death and recovery counts for a country.\n\
                  The data comes from disease.sh and is sourced from Johns Hopkins."
)]
struct Cli {
    /// Country name; several words are joined with spaces (e.g. new zealand)
    #[arg(required = true, num_args = 1..)]
    country: Vec<String>,
    /// First date to download data for (YYYY-MM-DD, default: yesterday)
    #[arg(short, long)]
    from: Option<String>,
    /// Last date to download data for (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    to: Option<String>,
    /// A single date to get (YYYY-MM-DD); overrides --from and --to
    #[arg(short = 'o', long = "on")]
    on: Option<String>,
    /// Only print the most recent day available
    #[arg(short, long, default_value_t = false)]
    latest: bool,
    /// Output format (markdown, csv). Unknown formats print the markdown table.
    #[arg(long, default_value = "markdown")]
    format: String,
    /// Write to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// API root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Log requests and record counts to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_or(arg: Option<&str>, fallback: NaiveDate) -> Result<NaiveDate> {
    match arg {
        Some(s) => Ok(parse_iso_date(s)?),
        None => Ok(fallback),
    }
}

fn build_query(cli: &Cli, today: NaiveDate) -> Result<Query> {
    let yesterday = today
        .checked_sub_days(Days::new(1))
        .context("no day before today")?;
    let mut from = parse_or(cli.from.as_deref(), yesterday)?;
    let mut to = parse_or(cli.to.as_deref(), today)?;
    if let Some(on) = cli.on.as_deref() {
        let day = parse_iso_date(on)?;
        from = day;
        to = day;
    }
    Ok(Query {
        country: cli.country.join(" "),
        from,
        to,
        latest: cli.latest,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let query = build_query(&cli, Local::now().date_naive())?;
    let client = Client::new(cli.base_url.as_str());
    let series = client.fetch_series(&query)?;

    match cli.out.as_ref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            render::write_series(&series, &cli.format, BufWriter::new(file))?;
            log::info!("wrote {} rows to {}", series.len(), path.display());
        }
        None => render::write_series(&series, &cli.format, std::io::stdout().lock())?,
    }

    Ok(())
}
