pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod report;
pub mod selection;
pub mod types;

pub use api::{FindingsExtractor, ReportKind};
pub use cli::report::{JsonReport, TextReport};
pub use error::{ReportError, Result};
pub use extraction::extract;
pub use report::{
    render_comparison, render_comparison_with_config, render_lymphoma_background,
    render_lymphoma_background_with_config, round1, round1_or_blank,
};
pub use selection::{sorted_dates, SuvComparison};
pub use types::*;
