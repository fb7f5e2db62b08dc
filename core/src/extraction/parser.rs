use crate::types::{is_iso_date, DateKey, FindingId, FindingsTable};
use log::{debug, warn};

use super::fields::apply_measurement_line;
use super::header::{parse_finding_header, FindingHeader};

/// How a single line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `Finding <N>` header
    Header,
    /// Bare `YYYY-MM-DD` line
    Date,
    /// Line inside a finding; carries the number of fields captured
    Measurement(usize),
    /// Line seen before any header, or an unusable header
    Ignored,
}

/// Scan cursor: the finding and date that following lines belong to
#[derive(Debug, Default)]
struct ParserState {
    current_finding: Option<FindingId>,
    current_date: Option<DateKey>,
}

impl ParserState {
    /// Applies one trimmed, non-empty line
    fn step(&mut self, line: &str, table: &mut FindingsTable) -> LineKind {
        match parse_finding_header(line) {
            Ok(Some(header)) => {
                self.enter_finding(header, table);
                return LineKind::Header;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Ignoring header '{}': {}", line, e);
                return LineKind::Ignored;
            }
        }

        if is_iso_date(line) {
            debug!("Date context -> {}", line);
            self.current_date = Some(DateKey::Date(line.to_string()));
            return LineKind::Date;
        }

        let Some(finding) = self.current_finding else {
            return LineKind::Ignored;
        };

        let key = self.current_date.clone().unwrap_or(DateKey::NoDate);
        let bucket = table.bucket_mut(finding, key);
        LineKind::Measurement(apply_measurement_line(line, bucket))
    }

    /// Switches finding context
    ///
    /// Only the bare `Finding <N>` form clears the date, so sub-block
    /// headers under the same date keep filling the same bucket.
    fn enter_finding(&mut self, header: FindingHeader, table: &mut FindingsTable) {
        if self.current_finding != Some(header.id) || header.is_bare {
            debug!("Finding context -> {}", header.id);
            self.current_finding = Some(header.id);
            table.ensure_finding(header.id);
        }

        if header.is_bare {
            self.current_date = None;
        }
    }
}

/// Extracts the findings table from exported text
///
/// Lines are trimmed and blank lines skipped. Unrecognized lines are
/// ignored, so unknown export variants degrade to missing fields rather
/// than errors.
///
/// # Example
///
/// ```
/// use lesiontrack_core::{extract, DateKey, FindingId};
///
/// let table = extract(
///     "Finding 3\n  2025-06-13\n    Max: 8.2 SUVbw\n    Slice with Max: 141 #\n",
/// );
///
/// let m = table
///     .measurements(FindingId(3), &DateKey::date("2025-06-13").unwrap())
///     .unwrap();
/// assert_eq!(m.max_suv, Some(8.2));
/// assert_eq!(m.slice_with_max, Some(141));
/// ```
pub fn extract(text: &str) -> FindingsTable {
    let mut table = FindingsTable::new();
    let mut state = ParserState::default();
    let mut ignored = 0usize;
    let mut captured = 0usize;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match state.step(line, &mut table) {
            LineKind::Ignored => ignored += 1,
            LineKind::Measurement(n) => captured += n,
            LineKind::Header | LineKind::Date => {}
        }
    }

    debug!(
        "Extracted {} findings ({} values, {} lines ignored)",
        table.len(),
        captured,
        ignored
    );

    table
}
