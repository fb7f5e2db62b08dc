use crate::error::ReportError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Literal used for measurements seen before any date line
pub const NO_DATE: &str = "no-date";

/// Exam date bucket for a finding
///
/// Dates are kept as their `YYYY-MM-DD` text. The fixed-width form sorts
/// lexicographically in calendar order, so no calendar parsing is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateKey {
    /// Measurements recorded before any date line for the finding
    NoDate,
    /// Exam date in strict `YYYY-MM-DD` form
    Date(String),
}

impl DateKey {
    /// Creates a dated key, validating the ISO shape
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDate`] if `s` is not exactly `YYYY-MM-DD`
    pub fn date(s: &str) -> Result<Self, ReportError> {
        if is_iso_date(s) {
            Ok(DateKey::Date(s.to_string()))
        } else {
            Err(ReportError::InvalidDate(s.to_string()))
        }
    }

    /// Whether this key is a real exam date
    pub fn is_date(&self) -> bool {
        matches!(self, DateKey::Date(_))
    }

    /// Returns the textual form (`YYYY-MM-DD` or `no-date`)
    pub fn as_str(&self) -> &str {
        match self {
            DateKey::NoDate => NO_DATE,
            DateKey::Date(s) => s,
        }
    }
}

/// Checks for the strict `YYYY-MM-DD` shape (digits only, no trailing text)
pub fn is_iso_date(s: &str) -> bool {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile regex")
    });
    re.is_match(s)
}

impl FromStr for DateKey {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == NO_DATE {
            Ok(DateKey::NoDate)
        } else {
            DateKey::date(trimmed)
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for DateKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2025-06-13", true)]
    #[case("2022-12-12", true)]
    #[case("2025-6-13", false)]
    #[case("2025-06-13 ", false)]
    #[case("Date: 2025-06-13", false)]
    #[case("20250613", false)]
    #[case("no-date", false)]
    fn test_is_iso_date(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_iso_date(input), expected);
    }

    #[test]
    fn test_parse_sentinel_and_date() {
        assert_eq!("no-date".parse::<DateKey>().unwrap(), DateKey::NoDate);
        assert_eq!(
            "2025-06-13".parse::<DateKey>().unwrap(),
            DateKey::Date("2025-06-13".to_string())
        );
        assert!(matches!(
            "June 13".parse::<DateKey>(),
            Err(ReportError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(DateKey::NoDate.to_string(), "no-date");
        assert_eq!(DateKey::date("2024-01-31").unwrap().to_string(), "2024-01-31");
    }

    #[test]
    fn test_dates_order_lexicographically() {
        let older = DateKey::date("2022-12-12").unwrap();
        let newer = DateKey::date("2025-06-13").unwrap();
        assert!(older < newer);
    }
}
