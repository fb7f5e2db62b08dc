/// Rounds half-up to one decimal and formats with exactly one fractional digit
pub fn round1(value: f64) -> String {
    let rounded = (value * 10.0 + 0.5).floor() / 10.0;
    format!("{:.1}", rounded)
}

/// Like [`round1`], but an absent value renders as an empty string
pub fn round1_or_blank(value: Option<f64>) -> String {
    value.map(round1).unwrap_or_default()
}
