//! Output formatting utilities

use crate::domain::stats::MoodPoint;
use crate::domain::{Entry, Mood};

const WEEKDAY_HEADER: &str = "Sun Mon Tue Wed Thu Fri Sat";

/// Format a list of entries for display, one line per entry
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let quick = if entry.is_quick_entry { "  [quick]" } else { "" };
        output.push_str(&format!(
            "{}  {} {:<10}  {}  {} ({} words){}\n",
            entry.timestamp.format("%d-%m-%Y %H:%M"),
            entry.mood.emoji(),
            entry.mood.display_name(),
            entry.id,
            entry.content,
            entry.word_count,
            quick,
        ));
    }
    output.trim_end().to_string()
}

/// Format the entry count and streak counters
pub fn format_summary(total_entries: usize, current_streak: u32) -> String {
    let day_word = if current_streak == 1 { "day" } else { "days" };
    format!(
        "Entries: {}\nCurrent streak: {} {}",
        total_entries, current_streak, day_word
    )
}

/// Format the 7-day average-valence series
pub fn format_mood_flow(series: &[MoodPoint]) -> String {
    if series.is_empty() {
        return "Mood flow (last 7 days):\n  no entries in the last 7 days".to_string();
    }

    let mut output = String::from("Mood flow (last 7 days):");
    for point in series {
        output.push_str(&format!(
            "\n  {}  {:.1}",
            point.date.format("%d-%m-%Y"),
            point.value
        ));
    }
    output
}

/// Format the per-mood entry counts
pub fn format_distribution(distribution: &[(Mood, usize)]) -> String {
    if distribution.is_empty() {
        return "Mood distribution:\n  no entries".to_string();
    }

    let mut output = String::from("Mood distribution:");
    for (mood, count) in distribution {
        output.push_str(&format!(
            "\n  {} {:<10}  {}",
            mood.emoji(),
            mood.display_name(),
            count
        ));
    }
    output
}

/// Format the time-of-day grid: one row per 3-hour block, one column per
/// weekday, `·` for empty cells
pub fn format_time_pattern(grid: &[[u32; 7]; 8]) -> String {
    let mut output = format!("Time of day:\n         {}", WEEKDAY_HEADER);

    for (block, row) in grid.iter().enumerate() {
        let start = block * 3;
        output.push_str(&format!("\n  {:02}-{:02}h", start, start + 3));
        for &count in row {
            if count == 0 {
                output.push_str("   ·");
            } else {
                output.push_str(&format!(" {:>3}", count));
            }
        }
    }

    output
}
