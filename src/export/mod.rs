//! Pure export serializers for the UI/export collaborator: stop-table
//! markdown, pretty JSON, and a minimal iCalendar document. Agent-form
//! days are resolved through `stops_or_synthesized` so every view consumes
//! the same legacy stop contract.

use chrono::NaiveTime;

use crate::error::Result;
use crate::types::Itinerary;

/// Stop-table flavored markdown view across all days.
pub fn to_markdown_digest(itinerary: &Itinerary, default_start: NaiveTime) -> String {
    let mut lines = vec![format!("# Itinerary: {}\n", itinerary.city)];
    for day in &itinerary.days {
        lines.push(format!("## {}", day.date));
        if !day.theme.is_empty() {
            lines.push(format!("_{}_", day.theme));
        }
        for stop in day.content.stops_or_synthesized(default_start) {
            let mut meta = Vec::new();
            if !stop.category.is_empty() {
                meta.push(stop.category.clone());
            }
            if let Some(duration) = stop.duration_min {
                meta.push(format!("{duration} min"));
            }
            if let Some(cost) = stop.cost_est {
                meta.push(format!("€{cost:.2}"));
            }
            let meta_txt = if meta.is_empty() {
                String::new()
            } else {
                format!(" _({})_", meta.join(" • "))
            };
            lines.push(format!("- **{}** — **{}**{}", stop.time, stop.name, meta_txt));
            if !stop.notes.is_empty() {
                lines.push(format!("  - {}", stop.notes));
            }
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Pretty-printed JSON; the itinerary serializes without further
/// transformation.
pub fn to_json(itinerary: &Itinerary) -> Result<String> {
    Ok(serde_json::to_string_pretty(itinerary)?)
}

/// Minimal iCalendar document, one VEVENT per stop.
///
/// `DTSTART` is the day's date (digits only) plus the stop time as HHMM
/// and seconds "00". The time is re-formatted from the parsed value, so a
/// sloppy single-digit hour like "9:00" normalizes to "0900"; a stop time
/// that does not parse as "HH:MM" at all falls back to `default_start`
/// rather than emitting an invalid timestamp.
pub fn to_ics(itinerary: &Itinerary, default_start: NaiveTime) -> String {
    let mut buf = String::from("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//trip-planner-rs//EN\n");

    for day in &itinerary.days {
        if day.date.is_empty() {
            continue;
        }
        let day_digits = day.date.replace('-', "");
        for stop in day.content.stops_or_synthesized(default_start) {
            let time = NaiveTime::parse_from_str(&stop.time, "%H:%M")
                .unwrap_or(default_start)
                .format("%H%M")
                .to_string();

            buf.push_str("BEGIN:VEVENT\n");
            buf.push_str(&format!("DTSTART:{day_digits}T{time}00\n"));
            buf.push_str(&format!("SUMMARY:{}\n", stop.name));
            if !stop.notes.is_empty() {
                buf.push_str(&format!("DESCRIPTION:{}\n", fold_text(&stop.notes, 70)));
            }
            buf.push_str("END:VEVENT\n");
        }
    }

    buf.push_str("END:VCALENDAR\n");
    buf
}

/// Collapse whitespace and wrap at `width` columns.
fn fold_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
