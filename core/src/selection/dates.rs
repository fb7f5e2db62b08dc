use crate::types::{DateKey, MeasurementSet, PerDate};

/// Orders a finding's exam dates, most recent first
///
/// Only real `YYYY-MM-DD` keys take part; the `no-date` bucket is skipped.
/// When the finding has no dated bucket at all, the result is the single
/// sentinel `[DateKey::NoDate]`, so element 0 always exists.
///
/// Element 0 is the latest exam and element 1 (if any) the prior one.
/// Older dates are returned but not used by the reports.
pub fn sorted_dates(per_date: &PerDate) -> Vec<DateKey> {
    let mut dates: Vec<DateKey> = per_date.keys().filter(|k| k.is_date()).cloned().collect();

    if dates.is_empty() {
        return vec![DateKey::NoDate];
    }

    dates.sort_by(|a, b| b.cmp(a));
    dates
}

/// Latest and prior measurements of one finding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimePoints<'a> {
    /// No bucket exists at the latest key
    Empty,
    /// A single exam (or only the no-date bucket)
    Single(&'a MeasurementSet),
    /// The two most recent exams
    Pair {
        latest: &'a MeasurementSet,
        prior: &'a MeasurementSet,
    },
}

impl<'a> TimePoints<'a> {
    /// Selects the latest and prior buckets via [`sorted_dates`]
    pub fn select(per_date: &'a PerDate) -> Self {
        let dates = sorted_dates(per_date);
        match dates.as_slice() {
            [latest, prior, ..] => match (per_date.get(latest), per_date.get(prior)) {
                (Some(latest), Some(prior)) => TimePoints::Pair { latest, prior },
                _ => TimePoints::Empty,
            },
            [only] => per_date
                .get(only)
                .map(TimePoints::Single)
                .unwrap_or(TimePoints::Empty),
            [] => TimePoints::Empty,
        }
    }

    /// Latest measurements, if any
    pub fn latest(&self) -> Option<&'a MeasurementSet> {
        match self {
            TimePoints::Empty => None,
            TimePoints::Single(only) => Some(only),
            TimePoints::Pair { latest, .. } => Some(latest),
        }
    }

    /// Prior measurements, only when two dates exist
    pub fn prior(&self) -> Option<&'a MeasurementSet> {
        match self {
            TimePoints::Pair { prior, .. } => Some(prior),
            _ => None,
        }
    }
}
