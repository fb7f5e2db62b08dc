use crate::api::ReportKind;
use crate::types::FindingsTable;
use std::fmt;

/// Plain-text rendering of report lines, newline-joined
pub struct TextReport<'a> {
    lines: &'a [String],
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// JSON document: extracted table plus rendered lines
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct JsonReport<'a> {
    pub mode: ReportKind,
    pub findings: &'a FindingsTable,
    pub report: &'a [String],
}

impl<'a> JsonReport<'a> {
    /// Creates a new JSON report
    pub fn new(mode: ReportKind, findings: &'a FindingsTable, report: &'a [String]) -> Self {
        Self {
            mode,
            findings,
            report,
        }
    }

    /// Serializes to pretty-printed JSON
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
