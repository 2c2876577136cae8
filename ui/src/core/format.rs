//! Formatting helpers for presenting catalogue metadata.

use time::macros::format_description;
use time::OffsetDateTime;

use crate::data::filter::parse_entry_date;

/// `2024-05-03T10:00:00Z` → `2024-05-03`. Unparsable input is shown as-is.
pub fn format_entry_date(raw: &str) -> String {
    parse_entry_date(raw)
        .and_then(|date| format_day(date).ok())
        .unwrap_or_else(|| raw.to_string())
}

fn format_day(date: OffsetDateTime) -> Result<String, time::error::Format> {
    date.format(&format_description!("[year]-[month]-[day]"))
}

/// Thousands grouping with thin spaces: `12345` → `12 345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202F}');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_as_calendar_days() {
        assert_eq!(format_entry_date("2024-05-03T10:00:00Z"), "2024-05-03");
        assert_eq!(format_entry_date("2024-05-03"), "2024-05-03");
        assert_eq!(format_entry_date("last spring"), "last spring");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(100), "100");
        assert_eq!(format_count(1234), "1\u{202F}234");
        assert_eq!(format_count(1234567), "1\u{202F}234\u{202F}567");
    }
}
