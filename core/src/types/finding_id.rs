use crate::error::ReportError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a tracked finding
///
/// The number following the literal `Finding` token in the exported text.
/// Ordering is numeric, so `Finding 10` sorts after `Finding 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FindingId(pub u32);

impl FindingId {
    /// Mediastinal blood pool reference
    pub const BLOOD_POOL: FindingId = FindingId(1);

    /// Liver reference
    pub const LIVER: FindingId = FindingId(2);

    /// Creates a new FindingId
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the numeric value
    pub fn number(&self) -> u32 {
        self.0
    }

    /// Whether this is one of the two background reference findings
    pub fn is_reference(&self) -> bool {
        *self == Self::BLOOD_POOL || *self == Self::LIVER
    }
}

impl FromStr for FindingId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReportError::InvalidFindingId(s.to_string()));
        }
        trimmed
            .parse::<u32>()
            .map(FindingId)
            .map_err(|_| ReportError::InvalidFindingId(s.to_string()))
    }
}

impl fmt::Display for FindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for FindingId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
