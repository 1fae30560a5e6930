//! Building, ordering and filtering the per-day series.

use crate::date::parse_date;
use crate::error::Result;
use crate::models::{DailyRecord, RawEnvelope};
use chrono::NaiveDate;
use log::debug;

/// Ordered, filterable collection of [`DailyRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series {
    records: Vec<DailyRecord>,
}

impl Series {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    /// Turn a decoded envelope into one record per date token.
    ///
    /// The `cases` keys decide which days exist. `deaths` and `recovered` are
    /// looked up by the same token and count as zero when the token is
    /// missing there; tokens only present in `deaths`/`recovered` are dropped.
    ///
    /// The first unparseable token aborts the whole build. The result is in
    /// no particular order until [`Series::order`] is called.
    pub fn build(envelope: &RawEnvelope) -> Result<Self> {
        let timeline = &envelope.timeline;
        let records = timeline
            .cases
            .iter()
            .map(|(token, &cases)| -> Result<DailyRecord> {
                Ok(DailyRecord {
                    country: envelope.country.clone(),
                    date: parse_date(token)?,
                    cases,
                    deaths: timeline.deaths.get(token).copied().unwrap_or(0),
                    recovered: timeline.recovered.get(token).copied().unwrap_or(0),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("built {} records for {}", records.len(), envelope.country);
        Ok(Self { records })
    }

    /// Sort ascending by date.
    pub fn order(&mut self) {
        self.records.sort_by_key(|r| r.date);
    }

    /// Keep the records selected by either latest mode or the inclusive
    /// `from..=to` window. Expects an ordered series.
    ///
    /// Latest mode on an empty series leaves it empty.
    pub fn filter(&mut self, from: NaiveDate, to: NaiveDate, latest: bool) {
        if latest {
            let last = self.records.pop();
            self.records.clear();
            self.records.extend(last);
            return;
        }
        self.records.retain(|r| (from..=to).contains(&r.date));
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DailyRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest date present, if any.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// One `[date, cases, deaths, recovered]` row per record.
    pub fn rows(&self) -> Vec<[String; 4]> {
        self.records
            .iter()
            .map(|r| {
                [
                    r.date.format("%Y-%m-%d").to_string(),
                    r.cases.to_string(),
                    r.deaths.to_string(),
                    r.recovered.to_string(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::Timeline;
    use std::collections::HashMap;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(d: NaiveDate) -> DailyRecord {
        DailyRecord {
            country: String::new(),
            date: d,
            cases: 0,
            deaths: 0,
            recovered: 0,
        }
    }

    fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn three_days() -> Series {
        Series::new(vec![
            day(ymd(2021, 1, 1)),
            day(ymd(2021, 1, 2)),
            day(ymd(2021, 1, 3)),
        ])
    }

    #[test]
    fn order_sorts_reversed_input() {
        let mut s = Series::new(vec![
            day(ymd(2021, 1, 3)),
            day(ymd(2021, 1, 2)),
            day(ymd(2021, 1, 1)),
        ]);
        s.order();
        assert_eq!(s, three_days());
    }

    #[test]
    fn order_is_idempotent() {
        let mut s = Series::new(vec![
            day(ymd(2021, 2, 1)),
            day(ymd(2020, 12, 31)),
            day(ymd(2021, 1, 15)),
        ]);
        s.order();
        let once = s.clone();
        s.order();
        assert_eq!(s, once);
    }

    #[test]
    fn order_tolerates_duplicate_dates() {
        let mut s = Series::new(vec![
            day(ymd(2021, 1, 2)),
            day(ymd(2021, 1, 1)),
            day(ymd(2021, 1, 2)),
        ]);
        s.order();
        let dates: Vec<_> = s.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![ymd(2021, 1, 1), ymd(2021, 1, 2), ymd(2021, 1, 2)]);
    }

    #[test]
    fn filter_single_day_window() {
        let mut s = three_days();
        s.filter(ymd(2021, 1, 1), ymd(2021, 1, 1), false);
        assert_eq!(s.records(), &[day(ymd(2021, 1, 1))]);
    }

    #[test]
    fn filter_bounds_are_inclusive() {
        let mut s = three_days();
        s.filter(ymd(2021, 1, 1), ymd(2021, 1, 2), false);
        assert_eq!(s.records(), &[day(ymd(2021, 1, 1)), day(ymd(2021, 1, 2))]);
    }

    #[test]
    fn filter_out_of_range_is_empty() {
        let mut s = three_days();
        s.filter(ymd(2022, 1, 1), ymd(2022, 2, 1), false);
        assert!(s.is_empty());
    }

    #[test]
    fn latest_ignores_bounds() {
        let mut s = three_days();
        s.filter(ymd(2021, 1, 1), ymd(2021, 1, 2), true);
        assert_eq!(s.records(), &[day(ymd(2021, 1, 3))]);
    }

    #[test]
    fn latest_on_empty_series_stays_empty() {
        let mut s = Series::default();
        s.filter(ymd(2021, 1, 1), ymd(2021, 1, 2), true);
        assert!(s.is_empty());
    }

    #[test]
    fn full_span_filter_keeps_everything() {
        let mut s = Series::new(vec![
            day(ymd(2021, 1, 3)),
            day(ymd(2021, 1, 1)),
            day(ymd(2021, 1, 2)),
        ]);
        s.order();
        let (from, to) = s.date_span().unwrap();
        s.filter(from, to, false);
        assert_eq!(s, three_days());
    }

    #[test]
    fn build_uses_cases_keys_and_zero_fills() {
        let envelope = RawEnvelope {
            country: "Australia".into(),
            provinces: vec![],
            timeline: Timeline {
                cases: counts(&[("3/24/21", 29230), ("3/25/21", 29239)]),
                deaths: counts(&[("3/24/21", 909), ("3/26/21", 910)]),
                recovered: counts(&[("3/25/21", 22991)]),
            },
        };
        let mut s = Series::build(&envelope).unwrap();
        s.order();
        assert_eq!(
            s.records(),
            &[
                DailyRecord {
                    country: "Australia".into(),
                    date: ymd(2021, 3, 24),
                    cases: 29230,
                    deaths: 909,
                    recovered: 0,
                },
                DailyRecord {
                    country: "Australia".into(),
                    date: ymd(2021, 3, 25),
                    cases: 29239,
                    deaths: 0,
                    recovered: 22991,
                },
            ]
        );
    }

    #[test]
    fn build_aborts_on_bad_token() {
        let envelope = RawEnvelope {
            country: "Australia".into(),
            provinces: vec![],
            timeline: Timeline {
                cases: counts(&[("3/24/21", 1), ("2021-03-25", 2)]),
                ..Default::default()
            },
        };
        assert!(matches!(
            Series::build(&envelope),
            Err(Error::BadDateFormat(_))
        ));
    }

    #[test]
    fn rows_are_plain_decimal() {
        let s = Series::new(vec![DailyRecord {
            country: "X".into(),
            date: ymd(2021, 1, 1),
            cases: 1_234_567,
            deaths: 0,
            recovered: 7,
        }]);
        assert_eq!(
            s.rows(),
            vec![[
                "2021-01-01".to_string(),
                "1234567".to_string(),
                "0".to_string(),
                "7".to_string()
            ]]
        );
    }
}
