use crate::error::Result;
use crate::types::FindingId;

use super::patterns::finding_header_regex;

/// A `Finding <N>` header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingHeader {
    pub id: FindingId,

    /// `true` for the bare form `Finding <N>` with nothing after the number.
    /// Sub-block headers (`- SUV Sphere`, `- 2D Measure 1`,
    /// `(Name Collision)`) are not bare.
    pub is_bare: bool,
}

/// Parses a trimmed line as a finding header
///
/// # Returns
///
/// - `Ok(None)` if the line is not a header
/// - `Ok(Some(header))` for a header
///
/// # Errors
///
/// Returns an error if the finding number does not fit a [`FindingId`]
pub fn parse_finding_header(line: &str) -> Result<Option<FindingHeader>> {
    let Some(caps) = finding_header_regex().captures(line) else {
        return Ok(None);
    };

    let id: FindingId = caps["number"].parse()?;
    let is_bare = caps["suffix"].trim().is_empty();

    Ok(Some(FindingHeader { id, is_bare }))
}
