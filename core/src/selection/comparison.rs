use std::fmt;

/// Relative difference between two SUVs: `|latest - prior| / max(latest, prior)`
///
/// When the larger value is zero the ratio is undefined: two zeros compare
/// as identical (`Some(0.0)`), anything else yields `None`.
pub fn relative_difference(latest: f64, prior: f64) -> Option<f64> {
    let max = latest.max(prior);
    if max == 0.0 {
        return if latest == 0.0 && prior == 0.0 {
            Some(0.0)
        } else {
            None
        };
    }
    Some((latest - prior).abs() / max)
}

/// Whether SUVs from two exams can be compared directly
///
/// Judged on the liver reference: a large shift in liver uptake between
/// exams means lesion SUVs are not directly comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum SuvComparison {
    Reasonable,
    NotReasonable,
}

impl SuvComparison {
    /// Classifies two reference SUVs against `threshold`
    ///
    /// A relative difference strictly below the threshold is reasonable;
    /// an undefined difference is not.
    pub fn classify(latest: f64, prior: f64, threshold: f64) -> Self {
        match relative_difference(latest, prior) {
            Some(r) if r < threshold => SuvComparison::Reasonable,
            _ => SuvComparison::NotReasonable,
        }
    }

    /// Wording used in the report sentence
    pub fn phrase(&self) -> &'static str {
        match self {
            SuvComparison::Reasonable => "is reasonable",
            SuvComparison::NotReasonable => "may not be reasonable",
        }
    }
}

impl fmt::Display for SuvComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}
