use std::io;

use serde_json::Value;
use txsift_client::display::empty_state_text;
use txsift_client::filter::EmptyState;

use super::format::{Align, Column, key_value_rows, render_table, terminal_width};

pub fn render_transactions(data: &Value) -> io::Result<String> {
    render_transactions_with_width(data, terminal_width())
}

fn render_transactions_with_width(data: &Value, width: usize) -> io::Result<String> {
    let heading = text_field(data, "heading")
        .ok_or_else(|| io::Error::other("transactions payload is missing `heading`"))?;

    let mut lines = vec![heading, text_field(data, "subtitle").unwrap_or_default()];

    let filters = filter_summary(data);
    if !filters.is_empty() {
        lines.push(String::new());
        lines.extend(key_value_rows(&filters, 2));
    }

    lines.push(String::new());
    match empty_state(data) {
        Some(state) => {
            let (headline, detail) = empty_state_text(state);
            lines.push(format!("  {headline}"));
            lines.push(format!("  {detail}"));
        }
        None => lines.extend(render_table(&COLUMNS, &table_rows(data), width)),
    }

    lines.push(String::new());
    lines.push(format!("Source: {}", text_field(data, "source").unwrap_or_default()));

    Ok(lines.join("\n"))
}

const COLUMNS: [Column<'static>; 4] = [
    Column {
        name: "Date",
        align: Align::Left,
    },
    Column {
        name: "Title",
        align: Align::Left,
    },
    Column {
        name: "Details",
        align: Align::Left,
    },
    Column {
        name: "Amount",
        align: Align::Right,
    },
];

fn filter_summary(data: &Value) -> Vec<(&'static str, String)> {
    if data.get("is_filtered").and_then(Value::as_bool) != Some(true) {
        return Vec::new();
    }

    let mut entries = Vec::new();
    if let Some(count) = data.get("badge_count").and_then(Value::as_u64) {
        let total = data.get("total").and_then(Value::as_u64).unwrap_or(count);
        entries.push(("Matching:", format!("{count} of {total}")));
    }
    if let Some(interval) = data.get("interval").filter(|value| value.is_object()) {
        let mut range = format!(
            "{} to {}",
            text_field(interval, "from_label").unwrap_or_default(),
            text_field(interval, "to_label").unwrap_or_default()
        );
        if interval.get("inverted").and_then(Value::as_bool) == Some(true) {
            range.push_str(" (reversed)");
        }
        entries.push(("Date range:", range));
    }
    let has_statuses = data
        .get("statuses")
        .and_then(Value::as_array)
        .is_some_and(|statuses| !statuses.is_empty());
    if has_statuses {
        entries.push((
            "Status:",
            text_field(data, "status_selection").unwrap_or_default(),
        ));
    }
    entries
}

fn empty_state(data: &Value) -> Option<EmptyState> {
    match data.get("empty_state").and_then(Value::as_str) {
        Some("no_transactions") => Some(EmptyState::NoTransactions),
        Some("no_matches") => Some(EmptyState::NoMatches),
        _ => None,
    }
}

fn table_rows(data: &Value) -> Vec<Vec<String>> {
    data.get("rows")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| {
                    vec![
                        text_field(row, "date").unwrap_or_default(),
                        text_field(row, "title").unwrap_or_default(),
                        text_field(row, "status_line").unwrap_or_default(),
                        text_field(row, "amount_display").unwrap_or_default(),
                    ]
                })
                .collect()
        })
        .unwrap_or_default()
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
}
