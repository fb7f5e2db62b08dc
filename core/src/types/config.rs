use crate::error::{ReportError, Result};

/// Relative difference below which two liver SUVs are considered comparable
pub const DEFAULT_REASONABLE_THRESHOLD: f64 = 0.20;

/// Configuration for report rendering
///
/// The defaults reproduce the standard report exactly.
///
/// # Example
///
/// ```
/// use lesiontrack_core::ReportConfig;
///
/// let config = ReportConfig::default()
///     .with_threshold(0.15)
///     .detail_reference_findings(false);
///
/// assert_eq!(config.reasonable_threshold, 0.15);
/// assert!(!config.detail_reference_findings);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportConfig {
    /// Maximum relative difference (exclusive) for a "reasonable" comparison
    pub reasonable_threshold: f64,

    /// Repeat findings 1 and 2 in the per-finding detail lines when other
    /// findings are present.
    ///
    /// Enabled by default: the reference findings then appear both in the
    /// background summary and as detail bullets.
    pub detail_reference_findings: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reasonable_threshold: DEFAULT_REASONABLE_THRESHOLD,
            detail_reference_findings: true,
        }
    }
}

impl ReportConfig {
    /// Builder: Set the comparison threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.reasonable_threshold = threshold;
        self
    }

    /// Builder: Include findings 1 and 2 in the detail lines
    ///
    /// # Example
    ///
    /// ```
    /// use lesiontrack_core::ReportConfig;
    ///
    /// let config = ReportConfig::default().detail_reference_findings(false);
    /// assert!(!config.detail_reference_findings);
    /// ```
    pub fn detail_reference_findings(mut self, include: bool) -> Self {
        self.detail_reference_findings = include;
        self
    }

    /// Checks that the threshold is a positive finite number
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidThreshold`] otherwise
    pub fn validate(&self) -> Result<()> {
        if self.reasonable_threshold.is_finite() && self.reasonable_threshold > 0.0 {
            Ok(())
        } else {
            Err(ReportError::InvalidThreshold(self.reasonable_threshold))
        }
    }
}
