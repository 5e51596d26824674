//! Time-range and text filtering over entry collections

use crate::domain::Entry;
use chrono::{DateTime, Duration, Local};
use std::str::FromStr;

/// Time window a listing is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    All,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
}

impl TimeRange {
    fn cutoff(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        match self {
            TimeRange::All => None,
            TimeRange::Week => Some(now - Duration::days(7)),
            TimeRange::Month => Some(now - Duration::days(30)),
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TimeRange::All),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            _ => Err(format!(
                "Invalid range: '{}'. Valid ranges are: all, week, month",
                s
            )),
        }
    }
}

/// Keep entries with a timestamp strictly after `now` minus the range.
pub fn filter_by_time_range(entries: &[Entry], range: TimeRange, now: DateTime<Local>) -> Vec<Entry> {
    match range.cutoff(now) {
        None => entries.to_vec(),
        Some(cutoff) => entries
            .iter()
            .filter(|e| e.timestamp > cutoff)
            .cloned()
            .collect(),
    }
}

/// Keep entries whose content or mood tag contains the query,
/// case-insensitively. An empty query passes everything through.
pub fn filter_by_text(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.content.to_lowercase().contains(&needle) || e.mood.as_str().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Composed filter: time range first, then text, AND semantics.
pub fn filter_entries(
    entries: &[Entry],
    range: TimeRange,
    query: &str,
    now: DateTime<Local>,
) -> Vec<Entry> {
    let in_range = filter_by_time_range(entries, range, now);
    filter_by_text(&in_range, query)
}
