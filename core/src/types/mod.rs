//! Core type definitions for finding extraction and reporting
//!
//! This module provides the fundamental types used throughout the lesiontrack library:
//! - [`FindingId`]: Numbered lesion or reference structure
//! - [`DateKey`]: Exam date bucket (`YYYY-MM-DD` or the `no-date` sentinel)
//! - [`MeasurementSet`]: Optional SUV and RECIST values for one finding on one date
//! - [`FindingsTable`]: Finding -> date -> measurements
//! - [`ReportConfig`]: Options for report rendering

mod config;
mod date_key;
mod finding_id;
mod measurement;
mod table;

pub use config::{ReportConfig, DEFAULT_REASONABLE_THRESHOLD};
pub use date_key::{is_iso_date, DateKey, NO_DATE};
pub use finding_id::FindingId;
pub use measurement::MeasurementSet;
pub use table::{FindingsTable, PerDate};
