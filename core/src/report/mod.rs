//! Report rendering
//!
//! Two independent report shapes over the same [`crate::FindingsTable`]:
//! - [`render_comparison`]: background summary plus one bullet per finding
//! - [`render_lymphoma_background`]: blood pool and liver reference lines

mod comparison;
mod lymphoma;
mod rounding;

pub use comparison::{finding_line, render_comparison, render_comparison_with_config, BULLET};
pub use lymphoma::{
    render_lymphoma_background, render_lymphoma_background_with_config, LymphomaBackground,
    PriorLiver,
};
pub use rounding::{round1, round1_or_blank};
