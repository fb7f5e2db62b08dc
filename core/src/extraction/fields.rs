use crate::types::MeasurementSet;
use log::trace;

use super::patterns::{get_f64_value, get_u32_value, Field};

/// Reads any recognized measurement on `line` into `measurements`
///
/// Only labels carrying a number set a field. A placeholder label with no
/// value leaves the existing field untouched.
///
/// # Returns
///
/// Number of fields set from this line
pub fn apply_measurement_line(line: &str, measurements: &mut MeasurementSet) -> usize {
    let mut captured = 0;

    for field in Field::ALL {
        let set = match field {
            Field::MaxSuv => assign(&mut measurements.max_suv, get_f64_value(line, field)),
            Field::MeanSuv => assign(&mut measurements.mean_suv, get_f64_value(line, field)),
            Field::SliceWithMax => {
                assign(&mut measurements.slice_with_max, get_u32_value(line, field))
            }
            Field::RecistLong => {
                assign(&mut measurements.recist_long, get_f64_value(line, field))
            }
            Field::RecistShort => {
                assign(&mut measurements.recist_short, get_f64_value(line, field))
            }
        };

        if set {
            trace!("Captured {:?} from '{}'", field, line);
            captured += 1;
        }
    }

    captured
}

fn assign<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_label_sets_its_field() {
        let mut m = MeasurementSet::new();
        for line in [
            "Max: 8.2 SUVbw",
            "Mean: 4.1 SUVbw",
            "Slice with Max: 141 #",
            "RECIST Long: 3.1 cm",
            "RECIST Short: 2.6 cm",
        ] {
            assert_eq!(apply_measurement_line(line, &mut m), 1);
        }

        assert_eq!(
            m,
            MeasurementSet {
                max_suv: Some(8.2),
                mean_suv: Some(4.1),
                slice_with_max: Some(141),
                recist_long: Some(3.1),
                recist_short: Some(2.6),
            }
        );
    }

    #[test]
    fn test_placeholder_labels_leave_fields_absent() {
        let mut m = MeasurementSet::new();
        for line in [
            "Max: SUVbw",
            "Mean: SUVbw",
            "Slice with Max: #",
            "RECIST Long: cm",
            "RECIST Short: cm",
        ] {
            assert_eq!(apply_measurement_line(line, &mut m), 0);
        }
        assert!(m.is_empty());
    }

    #[test]
    fn test_placeholder_does_not_clear_previous_value() {
        let mut m = MeasurementSet::new();
        apply_measurement_line("Max: 5.0 SUVbw", &mut m);
        apply_measurement_line("Max: SUVbw", &mut m);
        assert_eq!(m.max_suv, Some(5.0));
    }

    #[test]
    fn test_later_value_overwrites() {
        let mut m = MeasurementSet::new();
        apply_measurement_line("Max: 5.0 SUVbw", &mut m);
        apply_measurement_line("Max: 6.5 SUVbw", &mut m);
        assert_eq!(m.max_suv, Some(6.5));
    }

    #[test]
    fn test_unrelated_line() {
        let mut m = MeasurementSet::new();
        assert_eq!(apply_measurement_line("Volume: 12.4 ml", &mut m), 0);
        assert!(m.is_empty());
    }
}
