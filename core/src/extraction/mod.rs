pub mod fields;
pub mod header;
pub mod parser;
pub mod patterns;

pub use fields::apply_measurement_line;
pub use header::{parse_finding_header, FindingHeader};
pub use parser::{extract, LineKind};
pub use patterns::Field;
