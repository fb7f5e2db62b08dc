use regex::Regex;
use std::sync::OnceLock;

// Structure lines
pub const FINDING_HEADER: &str = r"^Finding\s+(?P<number>\d+)(?P<suffix>.*)$";

// Measurement lines. Every value group requires at least one digit, so a
// label exported without its value never matches.
pub const MAX_SUV: &str = r"\bMax:\s*(?P<value>\d*\.?\d+)\s*SUVbw";
pub const MEAN_SUV: &str = r"\bMean:\s*(?P<value>\d*\.?\d+)\s*SUVbw";
pub const SLICE_WITH_MAX: &str = r"\bSlice with Max:\s*(?P<value>\d+)\s*#";
pub const RECIST_LONG: &str = r"\bRECIST Long:\s*(?P<value>\d*\.?\d+)\s*cm";
pub const RECIST_SHORT: &str = r"\bRECIST Short:\s*(?P<value>\d*\.?\d+)\s*cm";

/// Measurement label recognized in the exported text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MaxSuv,
    MeanSuv,
    SliceWithMax,
    RecistLong,
    RecistShort,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::MaxSuv,
        Field::MeanSuv,
        Field::SliceWithMax,
        Field::RecistLong,
        Field::RecistShort,
    ];

    fn pattern(&self) -> &'static str {
        match self {
            Field::MaxSuv => MAX_SUV,
            Field::MeanSuv => MEAN_SUV,
            Field::SliceWithMax => SLICE_WITH_MAX,
            Field::RecistLong => RECIST_LONG,
            Field::RecistShort => RECIST_SHORT,
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::MaxSuv => 0,
            Field::MeanSuv => 1,
            Field::SliceWithMax => 2,
            Field::RecistLong => 3,
            Field::RecistShort => 4,
        }
    }

    /// Compiled regex for this label
    pub fn regex(&self) -> &'static Regex {
        static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
        let compiled = REGEXES.get_or_init(|| {
            Field::ALL
                .iter()
                .map(|field| Regex::new(field.pattern()).expect("Failed to compile regex"))
                .collect()
        });
        &compiled[self.index()]
    }
}

/// Compiled finding header regex
pub fn finding_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(FINDING_HEADER).expect("Failed to compile regex"))
}

/// Returns the captured value text for `field`, if the line carries one
pub fn capture_value<'a>(line: &'a str, field: Field) -> Option<&'a str> {
    field
        .regex()
        .captures(line)
        .and_then(|caps| caps.name("value"))
        .map(|m| m.as_str())
}

/// Parses a captured decimal value
pub fn get_f64_value(line: &str, field: Field) -> Option<f64> {
    capture_value(line, field).and_then(|s| s.parse().ok())
}

/// Parses a captured integer value
pub fn get_u32_value(line: &str, field: Field) -> Option<u32> {
    capture_value(line, field).and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Max: 8.2 SUVbw", Field::MaxSuv, Some("8.2"))]
    #[case("Max:8 SUVbw", Field::MaxSuv, Some("8"))]
    #[case("Mean: 2.69 SUVbw", Field::MeanSuv, Some("2.69"))]
    #[case("Slice with Max: 141 #", Field::SliceWithMax, Some("141"))]
    #[case("RECIST Long: 3.1 cm", Field::RecistLong, Some("3.1"))]
    #[case("RECIST Short: .9 cm", Field::RecistShort, Some(".9"))]
    #[case("Max: SUVbw", Field::MaxSuv, None)]
    #[case("Max:  SUVbw", Field::MaxSuv, None)]
    #[case("RECIST Long: cm", Field::RecistLong, None)]
    #[case("Max: 8.2", Field::MaxSuv, None)]
    #[case("Slice with Max: 141 #", Field::MaxSuv, None)]
    #[case("Slice with Max: #", Field::SliceWithMax, None)]
    fn test_capture_value(
        #[case] line: &str,
        #[case] field: Field,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(capture_value(line, field), expected);
    }

    #[test]
    fn test_numeric_conversion() {
        assert_eq!(get_f64_value("Mean: 2.2 SUVbw", Field::MeanSuv), Some(2.2));
        assert_eq!(get_u32_value("Slice with Max: 77 #", Field::SliceWithMax), Some(77));
        assert_eq!(
            get_u32_value("Slice with Max: 99999999999 #", Field::SliceWithMax),
            None
        );
    }

    #[test]
    fn test_finding_header_regex() {
        let caps = finding_header_regex()
            .captures("Finding 4 - 2D Measure 1")
            .unwrap();
        assert_eq!(&caps["number"], "4");
        assert_eq!(&caps["suffix"], " - 2D Measure 1");
        assert!(finding_header_regex().captures("Findings 4").is_none());
    }
}
