use chrono::NaiveDate;

/// Parse a form date (`YYYY-MM-DD`, zero-padded).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_shape(s, "9999-99-99") {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// True when `s` matches `pattern` character by character, `9` standing for
/// any ASCII digit. chrono accepts unpadded fields, the form does not.
pub fn has_shape(s: &str, pattern: &str) -> bool {
    s.len() == pattern.len()
        && s.bytes().zip(pattern.bytes()).all(|(c, p)| match p {
            b'9' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// `DD/MM/YYYY` for report headers, `N/A` when there is no date.
pub fn format_optional(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
