use crate::error::Result;
use crate::extraction::extract;
use crate::report::{render_comparison_with_config, render_lymphoma_background_with_config};
use crate::types::{FindingsTable, ReportConfig};
use std::fmt;

/// Which report to render from a findings table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum ReportKind {
    /// Background summary plus per-finding comparison bullets
    #[default]
    Comparison,
    /// Blood pool and liver reference lines only
    LymphomaBackground,
}

impl ReportKind {
    /// Renders this report from an extracted table
    pub fn render(&self, table: &FindingsTable, config: &ReportConfig) -> Vec<String> {
        match self {
            ReportKind::Comparison => render_comparison_with_config(table, config),
            ReportKind::LymphomaBackground => render_lymphoma_background_with_config(table, config),
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ReportKind::Comparison => "comparison",
            ReportKind::LymphomaBackground => "lymphoma-background",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// Main entry point for turning exported findings text into a report
///
/// # Example
///
/// ```
/// use lesiontrack_core::{FindingsExtractor, ReportKind};
///
/// let text = "
/// Finding 1
///     2025-06-13
///         Mean: 1.8 SUVbw
/// Finding 2
///     2025-06-13
///         Mean: 2.2 SUVbw
///     2022-12-12
///         Mean: 2.69 SUVbw
/// ";
///
/// let lines = FindingsExtractor::report(text, ReportKind::Comparison);
///
/// assert_eq!(
///     lines,
///     vec![
///         "Blood pool obtained at the descending thoracic aorta: Mean SUV: 1.8.",
///         "Liver reference: Mean SUV: 2.2. Prior liver mean SUV: 2.7. Direct SUV comparison is reasonable.",
///     ]
/// );
/// ```
pub struct FindingsExtractor;

impl FindingsExtractor {
    /// Extracts the findings table from exported text
    pub fn extract(text: &str) -> FindingsTable {
        extract(text)
    }

    /// Extracts and renders a report with default options
    pub fn report(text: &str, kind: ReportKind) -> Vec<String> {
        kind.render(&extract(text), &ReportConfig::default())
    }

    /// Extracts and renders a report with explicit options
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn report_with_config(
        text: &str,
        kind: ReportKind,
        config: &ReportConfig,
    ) -> Result<Vec<String>> {
        config.validate()?;
        Ok(kind.render(&extract(text), config))
    }
}
