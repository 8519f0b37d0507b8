//! Reductions over a snapshot of the entry list: chart series, average,
//! covered date range. None of them mutate or reorder their input.

use crate::core::presentation::{chart_label, full_label};
use crate::models::chart::{ChartPoint, ReportSummary};
use crate::models::entry::Entry;
use chrono::{NaiveDate, TimeZone};
use std::fmt::Display;

pub const DEFAULT_WINDOW: usize = 10;

/// Entries ordered oldest first. Ties keep list order.
pub fn sorted_by_time(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);
    sorted
}

/// The last `window` entries in chronological order.
pub fn window(entries: &[Entry], window: usize) -> Vec<&Entry> {
    let sorted = sorted_by_time(entries);
    let skip = sorted.len().saturating_sub(window);
    sorted.into_iter().skip(skip).collect()
}

pub fn chart_series<Tz: TimeZone>(entries: &[Entry], window_size: usize, tz: &Tz) -> Vec<ChartPoint>
where
    Tz::Offset: Display,
{
    window(entries, window_size)
        .into_iter()
        .map(|e| ChartPoint {
            x: chart_label(&e.timestamp, tz),
            y: e.pain_level.value(),
            full_time: full_label(&e.timestamp, tz),
        })
        .collect()
}

/// Mean pain level rounded to one decimal; `0.0` for an empty list.
pub fn average(entries: &[Entry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u64 = entries.iter().map(|e| u64::from(e.pain_level.value())).sum();
    let mean = sum as f64 / entries.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Calendar dates (in `tz`) of the earliest and latest entry.
pub fn date_range<Tz: TimeZone>(entries: &[Entry], tz: &Tz) -> Option<(NaiveDate, NaiveDate)> {
    let first = entries.iter().map(|e| e.timestamp).min()?;
    let last = entries.iter().map(|e| e.timestamp).max()?;
    Some((
        first.with_timezone(tz).date_naive(),
        last.with_timezone(tz).date_naive(),
    ))
}

pub fn report<Tz: TimeZone>(entries: &[Entry], window_size: usize, tz: &Tz) -> ReportSummary
where
    Tz::Offset: Display,
{
    let range = date_range(entries, tz);
    ReportSummary {
        count: entries.len(),
        average: average(entries),
        start: range.map(|(s, _)| s),
        end: range.map(|(_, e)| e),
        series: chart_series(entries, window_size, tz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scale;
    use crate::models::pain_level::PainLevel;
    use chrono::{DateTime, Duration, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn entry(id: i64, level: u8, days: i64) -> Entry {
        let pain_level = PainLevel::new(level).unwrap();
        Entry {
            id,
            pain_level,
            note: String::new(),
            timestamp: base() + Duration::days(days),
            pain_info: scale::lookup(pain_level),
        }
    }

    #[test]
    fn average_examples() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[entry(1, 4, 0), entry(2, 6, 1)]), 5.0);
        assert_eq!(average(&[entry(1, 5, 0)]), 5.0);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let list = [entry(1, 1, 0), entry(2, 2, 1), entry(3, 2, 2)];
        assert_eq!(average(&list), 1.7);
    }

    #[test]
    fn series_is_sorted_regardless_of_input_order() {
        // newest-created first, but with a backdated entry in the middle
        let list = vec![entry(3, 7, 5), entry(2, 1, -3), entry(1, 4, 0)];
        let series = chart_series(&list, DEFAULT_WINDOW, &Utc);
        let ys: Vec<u8> = series.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1, 4, 7]);
        assert_eq!(series[0].x, "27 Feb");
    }

    #[test]
    fn series_keeps_only_latest_window() {
        let list: Vec<Entry> = (0..15).map(|i| entry(i, (i % 11) as u8, i)).collect();
        let series = chart_series(&list, 10, &Utc);
        assert_eq!(series.len(), 10);
        assert_eq!(series[0].full_time, "06/03/2024 12:00");
        assert_eq!(series[9].full_time, "15/03/2024 12:00");
    }

    #[test]
    fn series_with_fewer_entries_than_window() {
        let list = vec![entry(1, 2, 0), entry(2, 3, 1)];
        assert_eq!(chart_series(&list, 10, &Utc).len(), 2);
        assert!(chart_series(&[], 10, &Utc).is_empty());
        assert!(chart_series(&list, 0, &Utc).is_empty());
    }

    #[test]
    fn series_does_not_touch_input() {
        let list = vec![entry(3, 7, 5), entry(2, 1, -3)];
        let before = list.clone();
        let a = chart_series(&list, 10, &Utc);
        let b = chart_series(&list, 10, &Utc);
        assert_eq!(a, b);
        assert_eq!(list, before);
    }

    #[test]
    fn date_range_ignores_list_order() {
        let list = vec![entry(2, 1, 2), entry(1, 1, -1), entry(3, 1, 0)];
        let (start, end) = date_range(&list, &Utc).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
        assert!(date_range(&[], &Utc).is_none());
    }

    #[test]
    fn report_combines_views() {
        let list = vec![entry(2, 6, 1), entry(1, 4, 0)];
        let r = report(&list, 10, &Utc);
        assert_eq!(r.count, 2);
        assert_eq!(r.average, 5.0);
        assert_eq!(r.series.len(), 2);
        assert_eq!(r.start, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(r.end, NaiveDate::from_ymd_opt(2024, 3, 2));
    }
}
