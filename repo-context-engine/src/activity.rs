//! Commit-activity aggregation.
//!
//! Pure transform from raw commit timestamps to the per-day series the
//! activity chart renders. Grouping is by UTC calendar day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// One bar of the activity chart: ISO date plus commit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    /// Calendar day formatted as `YYYY-MM-DD`.
    pub date: String,
    pub count: u64,
}

/// Groups commit timestamps by UTC day, ascending by date.
pub fn commit_activity(timestamps: &[DateTime<Utc>]) -> Vec<DayCount> {
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for ts in timestamps {
        *by_day.entry(ts.date_naive()).or_insert(0) += 1;
    }

    by_day
        .into_iter()
        .map(|(day, count)| DayCount {
            date: day.format("%Y-%m-%d").to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn groups_by_day_ascending() {
        let stamps = vec![
            ts("2024-03-02 10:00:00"),
            ts("2024-03-01 09:00:00"),
            ts("2024-03-02 23:59:59"),
            ts("2024-03-01 00:00:00"),
            ts("2024-02-28 12:00:00"),
        ];
        let series = commit_activity(&stamps);
        assert_eq!(
            series,
            vec![
                DayCount {
                    date: "2024-02-28".into(),
                    count: 1
                },
                DayCount {
                    date: "2024-03-01".into(),
                    count: 2
                },
                DayCount {
                    date: "2024-03-02".into(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn empty_history_yields_empty_series() {
        assert!(commit_activity(&[]).is_empty());
    }

    #[test]
    fn day_count_serializes_iso_date() {
        let series = commit_activity(&[ts("2024-03-01 09:00:00")]);
        let v = serde_json::to_value(&series).unwrap();
        assert_eq!(v[0]["date"], "2024-03-01");
        assert_eq!(v[0]["count"], 1);
    }
}
