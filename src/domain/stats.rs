//! Statistics derived from the entry collection
//!
//! Pure functions over a slice of entries. Callers pass the reference date
//! explicitly, so every computation is deterministic under test.

use crate::domain::{Entry, Mood, ALL_MOODS};
use chrono::{Datelike, Duration, NaiveDate, Timelike};
use std::collections::HashMap;

/// One point of the 7-day mood flow series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Count of consecutive calendar days with at least one entry, counting
/// back from `today`. A day without an entry stops the count; several
/// entries on the same day count once.
///
/// Entry order does not matter: days are sorted newest-first before the
/// scan rather than trusting the caller.
pub fn current_streak(entries: &[Entry], today: NaiveDate) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let mut days: Vec<NaiveDate> = entries.iter().map(|e| e.timestamp.date_naive()).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak: i64 = 0;
    for day in days {
        let day_diff = (today - day).num_days();
        if day_diff == streak {
            streak += 1;
        } else if day_diff > streak {
            break;
        }
        // day_diff < streak: another entry on an already-counted day
    }

    streak as u32
}

/// Mean valence of the entries on the given local calendar day, or `None`
/// when the day has no entries.
pub fn average_valence_for_date(entries: &[Entry], date: NaiveDate) -> Option<f64> {
    let day_entries: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.timestamp.date_naive() == date)
        .collect();

    if day_entries.is_empty() {
        return None;
    }

    let total: i32 = day_entries.iter().map(|e| e.mood.valence()).sum();
    Some(f64::from(total) / day_entries.len() as f64)
}

/// Per-day average valence for the 7 calendar days ending `today`, oldest
/// first. Days with no entries are skipped, so the series may hold fewer
/// than 7 points.
pub fn seven_day_series(entries: &[Entry], today: NaiveDate) -> Vec<MoodPoint> {
    (0..7)
        .rev()
        .filter_map(|offset| {
            let date = today - Duration::days(offset);
            average_valence_for_date(entries, date).map(|value| MoodPoint { date, value })
        })
        .collect()
}

/// Entry count per mood across the whole collection, sorted descending by
/// count. Only moods that occur are included. Ties are broken by valence
/// then tag so the ordering is stable.
pub fn mood_distribution(entries: &[Entry]) -> Vec<(Mood, usize)> {
    let mut counts: HashMap<Mood, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }

    let mut distribution: Vec<(Mood, usize)> = ALL_MOODS
        .iter()
        .filter_map(|mood| counts.get(mood).map(|&count| (*mood, count)))
        .collect();

    distribution.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then(b.0.valence().cmp(&a.0.valence()))
            .then(a.0.as_str().cmp(b.0.as_str()))
    });

    distribution
}

/// Entry counts bucketed by time of day and weekday: 8 rows of 3-hour
/// blocks (00-03 first), 7 columns of weekdays (Sunday first).
pub fn time_of_day_pattern(entries: &[Entry]) -> [[u32; 7]; 8] {
    let mut grid = [[0u32; 7]; 8];

    for entry in entries {
        let hour = entry.timestamp.hour() as usize;
        let block = (hour / 3).min(7);
        let weekday = entry.timestamp.date_naive().weekday().num_days_from_sunday() as usize;
        grid[block][weekday] += 1;
    }

    grid
}
