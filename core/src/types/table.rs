use super::{DateKey, FindingId, MeasurementSet};
use std::collections::BTreeMap;

/// Measurements of one finding, keyed by exam date
pub type PerDate = BTreeMap<DateKey, MeasurementSet>;

/// Extracted findings table: finding -> exam date -> measurements
///
/// Built by [`crate::extraction::extract`] and read-only afterwards.
/// Findings iterate in ascending numeric order of their identifier.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct FindingsTable {
    findings: BTreeMap<FindingId, PerDate>,
}

impl FindingsTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the per-date measurements of a finding
    pub fn get(&self, id: FindingId) -> Option<&PerDate> {
        self.findings.get(&id)
    }

    /// Returns the measurements of a finding on one date
    pub fn measurements(&self, id: FindingId, date: &DateKey) -> Option<&MeasurementSet> {
        self.findings.get(&id).and_then(|per_date| per_date.get(date))
    }

    /// Whether the finding appeared in the text
    pub fn contains(&self, id: FindingId) -> bool {
        self.findings.contains_key(&id)
    }

    /// Finding identifiers in ascending numeric order
    pub fn finding_ids(&self) -> impl Iterator<Item = FindingId> + '_ {
        self.findings.keys().copied()
    }

    /// Iterates findings in ascending numeric order
    pub fn iter(&self) -> impl Iterator<Item = (FindingId, &PerDate)> {
        self.findings.iter().map(|(id, per_date)| (*id, per_date))
    }

    /// Number of findings
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Whether no finding was extracted
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Ensures an entry exists for `id`
    pub(crate) fn ensure_finding(&mut self, id: FindingId) {
        self.findings.entry(id).or_default();
    }

    /// Returns the bucket at `(id, date)`, creating it when missing
    pub(crate) fn bucket_mut(&mut self, id: FindingId, date: DateKey) -> &mut MeasurementSet {
        self.findings
            .entry(id)
            .or_default()
            .entry(date)
            .or_default()
    }
}

impl FromIterator<(FindingId, PerDate)> for FindingsTable {
    fn from_iter<I: IntoIterator<Item = (FindingId, PerDate)>>(iter: I) -> Self {
        Self {
            findings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_numeric() {
        let table: FindingsTable = [10, 2, 1, 9]
            .into_iter()
            .map(|n| (FindingId(n), PerDate::new()))
            .collect();
        let ids: Vec<u32> = table.finding_ids().map(|id| id.number()).collect();
        assert_eq!(ids, vec![1, 2, 9, 10]);
    }

    #[test]
    fn test_bucket_mut_creates_entries() {
        let mut table = FindingsTable::new();
        table.bucket_mut(FindingId(3), DateKey::NoDate).max_suv = Some(4.0);

        assert!(table.contains(FindingId(3)));
        assert_eq!(
            table
                .measurements(FindingId(3), &DateKey::NoDate)
                .and_then(|m| m.max_suv),
            Some(4.0)
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_ensure_finding_is_idempotent() {
        let mut table = FindingsTable::new();
        table.ensure_finding(FindingId(1));
        table.bucket_mut(FindingId(1), DateKey::NoDate);
        table.ensure_finding(FindingId(1));
        assert_eq!(table.get(FindingId(1)).map(|d| d.len()), Some(1));
    }
}
