use crate::selection::{SuvComparison, TimePoints};
use crate::types::{FindingId, FindingsTable, MeasurementSet, PerDate, ReportConfig};
use log::debug;

use super::rounding::{round1, round1_or_blank};

/// Prefix of each per-finding detail line
pub const BULLET: &str = "\t-";

/// Renders the general comparison report
///
/// # Algorithm
///
/// 1. If findings 1 (blood pool) and 2 (liver) are both present, emit the
///    two background lines.
/// 2. If those are the only two findings, stop.
/// 3. Otherwise emit one bullet per finding, ascending by number, for every
///    finding whose measurements support a line. Findings 1 and 2 are
///    included again unless [`ReportConfig::detail_reference_findings`] is off.
pub fn render_comparison(table: &FindingsTable) -> Vec<String> {
    render_comparison_with_config(table, &ReportConfig::default())
}

/// Renders the general comparison report with explicit options
pub fn render_comparison_with_config(table: &FindingsTable, config: &ReportConfig) -> Vec<String> {
    let mut lines = Vec::new();

    let background = background_lines(table, config);
    let has_background = background.is_some();
    if let Some(background) = background {
        lines.extend(background);
        if table.len() == 2 {
            return lines;
        }
    }

    for (id, per_date) in table.iter() {
        if has_background && id.is_reference() && !config.detail_reference_findings {
            continue;
        }
        match finding_line(id, per_date) {
            Some(line) => lines.push(format!("{}{}", BULLET, line)),
            None => debug!("Finding {}: no reportable measurements", id),
        }
    }

    lines
}

/// Blood pool and liver reference lines, when both findings exist
fn background_lines(table: &FindingsTable, config: &ReportConfig) -> Option<[String; 2]> {
    let blood_pool = TimePoints::select(table.get(FindingId::BLOOD_POOL)?);
    let liver = TimePoints::select(table.get(FindingId::LIVER)?);

    let blood_pool_line = format!(
        "Blood pool obtained at the descending thoracic aorta: Mean SUV: {}.",
        round1(mean_or_zero(blood_pool.latest()))
    );

    let latest_mean = mean_or_zero(liver.latest());
    let liver_line = match liver.prior() {
        Some(prior) => {
            let prior_mean = mean_or_zero(Some(prior));
            format!(
                "Liver reference: Mean SUV: {}. Prior liver mean SUV: {}. Direct SUV comparison {}.",
                round1(latest_mean),
                round1(prior_mean),
                SuvComparison::classify(latest_mean, prior_mean, config.reasonable_threshold)
            )
        }
        None => format!("Liver reference: Mean SUV: {}.", round1(latest_mean)),
    };

    Some([blood_pool_line, liver_line])
}

pub(crate) fn mean_or_zero(measurements: Option<&MeasurementSet>) -> f64 {
    measurements.and_then(|m| m.mean_suv).unwrap_or(0.0)
}

pub(crate) fn max_or_zero(measurements: Option<&MeasurementSet>) -> f64 {
    measurements.and_then(|m| m.max_suv).unwrap_or(0.0)
}

/// Detail line for one finding, without the bullet prefix
///
/// With two exams, RECIST sizes are compared when both exams have both
/// axes; otherwise SUVmax is compared when both exams have SUVmax and a
/// slice. A single exam is described the same way without the "from"
/// part. Findings with neither pair produce no line.
///
/// Missing values render as empty text inside the line: the axial image
/// slot of the two-exam RECIST form is always empty, and an absent SUVmax
/// there renders as `Max SUV  from .`.
pub fn finding_line(id: FindingId, per_date: &PerDate) -> Option<String> {
    match TimePoints::select(per_date) {
        TimePoints::Pair { latest, prior } => paired_line(id, latest, prior),
        TimePoints::Single(only) => single_line(id, only),
        TimePoints::Empty => None,
    }
}

fn paired_line(id: FindingId, latest: &MeasurementSet, prior: &MeasurementSet) -> Option<String> {
    if let (Some((latest_long, latest_short)), Some((prior_long, prior_short))) =
        (latest.recist(), prior.recist())
    {
        return Some(format!(
            "Finding {}. {} x {} cm (axial image ) from {} x {} cm. Max SUV {} from {}.",
            id,
            round1(latest_long),
            round1(latest_short),
            round1(prior_long),
            round1(prior_short),
            round1_or_blank(latest.max_suv),
            round1_or_blank(prior.max_suv)
        ));
    }

    if let (Some((latest_max, slice)), Some((prior_max, _))) =
        (latest.max_with_slice(), prior.max_with_slice())
    {
        return Some(format!(
            "Finding {} (axial image {}). Max SUV {} from {}.",
            id,
            slice,
            round1(latest_max),
            round1(prior_max)
        ));
    }

    None
}

fn single_line(id: FindingId, only: &MeasurementSet) -> Option<String> {
    if let Some((long, short)) = only.recist() {
        let slice = only
            .slice_with_max
            .map(|s| s.to_string())
            .unwrap_or_default();
        let max = only
            .max_suv
            .map(|m| format!(". Max SUV {}", round1(m)))
            .unwrap_or_default();
        return Some(format!(
            "Finding {}. {} x {} cm (axial image {}){}.",
            id,
            round1(long),
            round1(short),
            slice,
            max
        ));
    }

    only.max_with_slice().map(|(max, slice)| {
        format!("Finding {} (axial image {}). Max SUV {}.", id, slice, round1(max))
    })
}
