//! Per-day sentiment counts over a trailing window

use crate::models::FeedbackRecord;
use crate::stats::LabelCounts;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

/// Longest window `daily_trend` builds buckets for; larger requests are capped.
pub const MAX_TREND_DAYS: u32 = 3660;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCounts {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: LabelCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTrend {
    /// Oldest day first, one entry per day in the window
    pub days: Vec<DailyCounts>,
    /// Every record inside the time window, per label
    pub summary: LabelCounts,
}

/// Bucket records by UTC calendar day for the `days` days ending at `now`.
///
/// Records are kept when `created_at >= now - days * 24h`. Buckets cover the
/// dates of `now - (days - 1)` through `now`; a kept record from the partial
/// day before the first bucket shows up in `summary` only. `days` is capped
/// at [`MAX_TREND_DAYS`]; windows reaching past chrono's range start at its
/// minimum.
pub fn daily_trend(records: &[FeedbackRecord], days: u32, now: DateTime<Utc>) -> SentimentTrend {
    if days == 0 {
        return SentimentTrend::default();
    }
    let days = days.min(MAX_TREND_DAYS);

    let window_start = now
        .checked_sub_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let today = now.date_naive();
    let first_day = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);

    let mut buckets: Vec<DailyCounts> = (0..days)
        .map(|offset| DailyCounts {
            date: first_day + Duration::days(i64::from(offset)),
            counts: LabelCounts::default(),
        })
        .collect();

    let mut summary = LabelCounts::default();
    for record in records {
        let Some(created_at) = record.created_at else {
            continue;
        };
        if created_at < window_start {
            continue;
        }
        summary.add(record.sentiment);

        let date = created_at.date_naive();
        if date < first_day {
            continue;
        }
        let index = (date - first_day).num_days() as usize;
        if let Some(bucket) = buckets.get_mut(index) {
            bucket.counts.add(record.sentiment);
        }
    }

    SentimentTrend {
        days: buckets,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn record(sentiment: Sentiment, created_at: Option<DateTime<Utc>>) -> FeedbackRecord {
        FeedbackRecord {
            sentiment,
            created_at,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_days_is_empty() {
        let records = vec![record(Sentiment::Positive, Some(at(2024, 3, 7, 9)))];
        assert_eq!(daily_trend(&records, 0, at(2024, 3, 7, 12)), SentimentTrend::default());
    }

    #[test]
    fn test_buckets_are_zero_filled_oldest_first() {
        let trend = daily_trend(&[], 3, at(2024, 3, 7, 12));
        let dates: Vec<String> = trend.days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-05", "2024-03-06", "2024-03-07"]);
        assert!(trend.days.iter().all(|d| d.counts.total() == 0));
        assert_eq!(trend.summary.total(), 0);
    }

    #[test]
    fn test_records_land_in_their_day() {
        let now = at(2024, 3, 7, 12);
        let records = vec![
            record(Sentiment::Positive, Some(at(2024, 3, 7, 8))),
            record(Sentiment::Negative, Some(at(2024, 3, 7, 9))),
            record(Sentiment::Neutral, Some(at(2024, 3, 5, 23))),
            record(Sentiment::Positive, None),
            // Before the window start
            record(Sentiment::Negative, Some(at(2024, 3, 1, 0))),
        ];
        let trend = daily_trend(&records, 3, now);

        assert_eq!(trend.days[2].counts.positive, 1);
        assert_eq!(trend.days[2].counts.negative, 1);
        assert_eq!(trend.days[0].counts.neutral, 1);
        assert_eq!(trend.days[1].counts.total(), 0);
        assert_eq!(trend.summary.total(), 3);
    }

    #[test]
    fn test_partial_leading_day_counts_in_summary_only() {
        let now = at(2024, 3, 7, 12);
        // Window starts 2024-03-04T12:00, first bucket is 2024-03-05
        let records = vec![record(Sentiment::Negative, Some(at(2024, 3, 4, 18)))];
        let trend = daily_trend(&records, 3, now);

        assert_eq!(trend.summary.negative, 1);
        assert!(trend.days.iter().all(|d| d.counts.total() == 0));
    }

    #[test]
    fn test_huge_window_is_capped() {
        let now = at(2024, 3, 7, 12);
        let records = vec![record(Sentiment::Positive, Some(at(1990, 1, 1, 0)))];
        let trend = daily_trend(&records, u32::MAX, now);

        assert_eq!(trend.days.len(), MAX_TREND_DAYS as usize);
        assert_eq!(trend.days.last().map(|d| d.date), Some(now.date_naive()));
        // 1990 is outside a ten-year window
        assert_eq!(trend.summary.total(), 0);
    }

    #[test]
    fn test_window_near_chrono_minimum_does_not_overflow() {
        let now = DateTime::<Utc>::MIN_UTC + Duration::days(3);
        let records = vec![record(Sentiment::Negative, Some(now))];
        let trend = daily_trend(&records, MAX_TREND_DAYS, now);

        assert_eq!(trend.summary.negative, 1);
        assert_eq!(trend.days.len(), MAX_TREND_DAYS as usize);
    }

    #[test]
    fn test_trend_serializes_flat_counts() {
        let trend = daily_trend(&[], 1, at(2024, 3, 7, 12));
        let json = serde_json::to_value(&trend).unwrap();
        assert_eq!(json["days"][0]["date"], "2024-03-07");
        assert_eq!(json["days"][0]["positive"], 0);
    }
}
