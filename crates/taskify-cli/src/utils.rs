use chrono::NaiveDateTime;

const SERVICE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, SERVICE_FORMAT) {
        dt.format("%b %-d, %Y %H:%M:%S").to_string()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        dt.format("%b %-d, %Y %H:%M:%S").to_string()
    } else {
        raw.get(..19).unwrap_or(raw).replace('T', " ")
    }
}

pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_else(|| "-".to_string())
}

pub fn truncate(text: &str, len: usize) -> String {
    if text.chars().count() <= len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

/// Splits `KEY=VALUE` on the first `=`.
pub fn split_option(raw: &str) -> Option<(&str, &str)> {
    let (key, value) = raw.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}
