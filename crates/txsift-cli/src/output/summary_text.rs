use std::io;

use serde_json::Value;

use super::format::key_value_rows;

pub fn render_preset(data: &Value) -> io::Result<String> {
    let label = text(data, "label")?;
    let interval = data
        .get("interval")
        .ok_or_else(|| io::Error::other("preset payload is missing `interval`"))?;
    let day_count = data.get("day_count").and_then(Value::as_i64).unwrap_or(0);

    let mut lines = vec![format!("{label} ({})", text(data, "preset")?), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Today:", text(data, "today")?),
            (
                "From:",
                format!("{}  ({})", text(interval, "from")?, text(interval, "from_label")?),
            ),
            (
                "To:",
                format!("{}  ({})", text(interval, "to")?, text(interval, "to_label")?),
            ),
            ("Days:", day_count.to_string()),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_wallet(data: &Value) -> io::Result<String> {
    let mut lines = vec![
        "Available Balance".to_string(),
        format!("  {}", text(data, "available_balance")?),
        String::new(),
    ];

    let cards = data
        .get("cards")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let entries = cards
        .iter()
        .map(|card| -> io::Result<(String, String)> {
            Ok((text(card, "label")?, text(card, "value")?))
        })
        .collect::<io::Result<Vec<(String, String)>>>()?;
    let borrowed = entries
        .iter()
        .map(|(label, value)| (label.as_str(), value.clone()))
        .collect::<Vec<(&str, String)>>();
    lines.extend(key_value_rows(&borrowed, 2));

    Ok(lines.join("\n"))
}

fn text(value: &Value, key: &str) -> io::Result<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(std::string::ToString::to_string)
        .ok_or_else(|| io::Error::other(format!("payload is missing `{key}`")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{render_preset, render_wallet};

    #[test]
    fn preset_shows_iso_and_picker_dates() {
        let data = json!({
            "preset": "last-7-days",
            "label": "Last 7 days",
            "today": "2025-10-23",
            "day_count": 7,
            "interval": {
                "from": "2025-10-17",
                "to": "2025-10-23",
                "from_label": "17 Oct 2025",
                "to_label": "23 Oct 2025",
                "inverted": false
            }
        });

        let rendered = render_preset(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Last 7 days (last-7-days)"));
            assert!(text.contains("  From:   2025-10-17  (17 Oct 2025)"));
            assert!(text.contains("  Days:   7"));
        }
    }

    #[test]
    fn wallet_lists_cards_under_the_balance() {
        let data = json!({
            "source": "wallet.json",
            "available_balance": "USD 1,234.50",
            "cards": [
                {"label": "Ledger Balance", "value": "USD 500"},
                {"label": "Pending Payout", "value": "USD 0"}
            ]
        });

        let rendered = render_wallet(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("  USD 1,234.50"));
            assert!(text.contains("  Ledger Balance  USD 500"));
            assert!(text.contains("  Pending Payout  USD 0"));
        }
    }

    #[test]
    fn incomplete_payloads_are_errors() {
        assert!(render_preset(&json!({ "label": "Today" })).is_err());
        assert!(render_wallet(&json!({})).is_err());
    }
}
