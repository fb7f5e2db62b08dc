use crate::error::{ReportError, Result};
use crate::selection::{SuvComparison, TimePoints};
use crate::types::{FindingId, FindingsTable, ReportConfig};

use super::comparison::{max_or_zero, mean_or_zero};
use super::rounding::round1;

/// Reference uptake values for a lymphoma (Deauville-style) background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LymphomaBackground {
    /// SUVmax of the mediastinal blood pool (finding 1), latest exam
    pub blood_pool_max: f64,
    /// SUVmax of the liver (finding 2), latest exam
    pub liver_max: f64,
    /// SUVmean of the liver, latest exam
    pub liver_mean: f64,
    /// Prior liver SUVmean and its comparison verdict, when a prior exam exists
    pub prior: Option<PriorLiver>,
}

/// Liver reference from the prior exam
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorLiver {
    pub mean: f64,
    pub comparison: SuvComparison,
}

impl LymphomaBackground {
    /// Reads the reference values from the table
    ///
    /// Missing SUV values count as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingReferenceFindings`] unless both
    /// finding 1 and finding 2 are present
    pub fn from_table(table: &FindingsTable, config: &ReportConfig) -> Result<Self> {
        let (Some(blood_pool), Some(liver)) = (
            table.get(FindingId::BLOOD_POOL),
            table.get(FindingId::LIVER),
        ) else {
            return Err(ReportError::MissingReferenceFindings);
        };

        let blood_pool = TimePoints::select(blood_pool);
        let liver = TimePoints::select(liver);
        let liver_mean = mean_or_zero(liver.latest());

        let prior = liver.prior().map(|prior| {
            let mean = mean_or_zero(Some(prior));
            PriorLiver {
                mean,
                comparison: SuvComparison::classify(liver_mean, mean, config.reasonable_threshold),
            }
        });

        Ok(Self {
            blood_pool_max: max_or_zero(blood_pool.latest()),
            liver_max: max_or_zero(liver.latest()),
            liver_mean,
            prior,
        })
    }

    /// Report lines: blood pool, then liver
    pub fn lines(&self) -> Vec<String> {
        let mut liver_line = format!(
            "Liver reference: Max SUV: {}, Mean SUV: {}.",
            round1(self.liver_max),
            round1(self.liver_mean)
        );
        if let Some(prior) = self.prior {
            liver_line.push_str(&format!(
                " Prior liver mean SUV: {}. Direct SUV comparison {}.",
                round1(prior.mean),
                prior.comparison
            ));
        }

        vec![
            format!(
                "Mediastinal blood pool reference: Max SUV: {}.",
                round1(self.blood_pool_max)
            ),
            liver_line,
        ]
    }
}

/// Renders the lymphoma background report
///
/// Without both reference findings the report is a single error line; this
/// is regular output, not a failure.
pub fn render_lymphoma_background(table: &FindingsTable) -> Vec<String> {
    render_lymphoma_background_with_config(table, &ReportConfig::default())
}

/// Renders the lymphoma background report with explicit options
pub fn render_lymphoma_background_with_config(
    table: &FindingsTable,
    config: &ReportConfig,
) -> Vec<String> {
    match LymphomaBackground::from_table(table, config) {
        Ok(background) => background.lines(),
        Err(e) => vec![format!("Error: {}", e)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::extract;

    const MISSING: &str = "Error: Lymphoma background requires findings 1 (mediastinal blood pool) and 2 (liver reference).";

    #[test]
    fn test_missing_blood_pool() {
        let table = extract("Finding 2\nMax: 3.1 SUVbw\nFinding 4\nMax: 9 SUVbw\n");
        assert_eq!(render_lymphoma_background(&table), vec![MISSING.to_string()]);
    }

    #[test]
    fn test_missing_liver() {
        let table = extract("Finding 1\nMax: 2.0 SUVbw\n");
        assert_eq!(render_lymphoma_background(&table), vec![MISSING.to_string()]);
        assert_eq!(
            render_lymphoma_background(&FindingsTable::new()),
            vec![MISSING.to_string()]
        );
    }

    #[test]
    fn test_with_prior_liver() {
        let table = extract(
            "Finding 1\n2025-06-13\nMax: 2.34 SUVbw\n2022-12-12\nMax: 1.0 SUVbw\n\
             Finding 2\n2025-06-13\nMax: 3.1 SUVbw\nMean: 2.2 SUVbw\n\
             2022-12-12\nMax: 3.6 SUVbw\nMean: 2.69 SUVbw\n",
        );
        assert_eq!(
            render_lymphoma_background(&table),
            vec![
                "Mediastinal blood pool reference: Max SUV: 2.3.".to_string(),
                "Liver reference: Max SUV: 3.1, Mean SUV: 2.2. Prior liver mean SUV: 2.7. Direct SUV comparison is reasonable."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_without_prior_liver() {
        let table = extract("Finding 1\nMax: 2.0 SUVbw\nFinding 2\nMax: 3.0 SUVbw\nMean: 2.5 SUVbw\n");
        assert_eq!(
            render_lymphoma_background(&table),
            vec![
                "Mediastinal blood pool reference: Max SUV: 2.0.".to_string(),
                "Liver reference: Max SUV: 3.0, Mean SUV: 2.5.".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_values_default_to_zero() {
        let table = extract(
            "Finding 1\nFinding 2\n2025-06-13\nMax: SUVbw\n2022-12-12\nMean: 1.0 SUVbw\n",
        );
        let background = LymphomaBackground::from_table(&table, &ReportConfig::default()).unwrap();
        assert_eq!(background.blood_pool_max, 0.0);
        assert_eq!(background.liver_mean, 0.0);
        assert_eq!(
            background.prior,
            Some(PriorLiver {
                mean: 1.0,
                comparison: SuvComparison::NotReasonable
            })
        );
    }

    #[test]
    fn test_threshold_from_config() {
        let table = extract(
            "Finding 1\nMax: 2.0 SUVbw\nFinding 2\n2025-06-13\nMean: 2.0 SUVbw\n2022-12-12\nMean: 3.0 SUVbw\n",
        );
        let config = ReportConfig::default().with_threshold(0.5);
        let lines = render_lymphoma_background_with_config(&table, &config);
        assert!(lines[1].ends_with("Direct SUV comparison is reasonable."));
        assert!(render_lymphoma_background(&table)[1]
            .ends_with("Direct SUV comparison may not be reasonable."));
    }
}
