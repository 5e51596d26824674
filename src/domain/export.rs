//! CSV and HTML export of the journal

use crate::domain::Entry;
use chrono::{DateTime, Local};
use std::str::FromStr;

/// Output format of a journal export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Html,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "html" => Ok(ExportFormat::Html),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: csv, html",
                s
            )),
        }
    }
}

/// Render the collection as CSV: a `Date,Time,Mood,Entry,Word Count`
/// header, then one row per entry in collection order. Every field is
/// double-quoted; embedded quotes are doubled.
pub fn export_csv(entries: &[Entry]) -> String {
    let mut csv = String::from("Date,Time,Mood,Entry,Word Count\n");

    for entry in entries {
        let date = entry.timestamp.format("%d-%m-%Y").to_string();
        let time = entry.timestamp.format("%H:%M").to_string();
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&date),
            csv_field(&time),
            csv_field(entry.mood.display_name()),
            csv_field(&entry.content),
            csv_field(&entry.word_count.to_string()),
        ));
    }

    csv
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the collection as a single self-contained HTML document, one
/// block per entry with timestamp, mood, content, and word count. Intended
/// for downstream conversion to a fixed-layout format; no pagination here.
pub fn export_html(entries: &[Entry], generated_at: DateTime<Local>) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n\
        <html>\n\
        <head>\n\
        <meta charset=\"utf-8\">\n\
        <title>Mood Journal</title>\n\
        <style>\n\
        body {{ font-family: system-ui, sans-serif; margin: 40px; color: #333; }}\n\
        h1 {{ color: #1a1a1a; margin-bottom: 30px; }}\n\
        .entry {{ margin-bottom: 30px; page-break-inside: avoid; }}\n\
        .date {{ font-weight: bold; color: #666; }}\n\
        .mood {{ display: inline-block; margin-left: 10px; }}\n\
        .content {{ margin-top: 10px; line-height: 1.6; }}\n\
        .wordcount {{ font-size: 12px; color: #999; margin-top: 5px; }}\n\
        </style>\n\
        </head>\n\
        <body>\n\
        <h1>Mood Journal</h1>\n\
        <p>Generated on {}</p>\n\
        <hr>\n",
        generated_at.format("%B %d, %Y %H:%M")
    );

    for entry in entries {
        html.push_str(&format!(
            "<div class=\"entry\">\n\
            <div class=\"date\">{}</div>\n\
            <div class=\"mood\">Mood: {} {}</div>\n\
            <div class=\"content\">{}</div>\n\
            <div class=\"wordcount\">Words: {}</div>\n\
            </div>\n",
            entry.timestamp.format("%B %d, %Y %H:%M"),
            entry.mood.display_name(),
            entry.mood.emoji(),
            html_escape(&entry.content),
            entry.word_count,
        ));
    }

    html.push_str("</body></html>\n");
    html
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
