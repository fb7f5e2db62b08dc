//! Exam date selection and SUV comparison
//!
//! Picks the latest and prior exams of a finding and judges whether SUVs
//! from the two exams can be compared.

mod comparison;
mod dates;

pub use comparison::{relative_difference, SuvComparison};
pub use dates::{sorted_dates, TimePoints};
