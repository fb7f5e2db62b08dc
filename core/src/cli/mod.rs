pub mod report;

use crate::api::ReportKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for lesiontrack
#[derive(Parser, Debug)]
#[command(name = "lesiontrack")]
#[command(about = "Compare PET/CT finding measurements across exam dates")]
#[command(version)]
pub struct Cli {
    /// Exported findings text ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Report to generate
    #[arg(short, long, default_value = "comparison")]
    pub mode: ReportMode,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Relative liver SUV difference below which exams are directly comparable
    #[arg(short, long, default_value_t = crate::types::DEFAULT_REASONABLE_THRESHOLD)]
    pub threshold: f64,

    /// Leave findings 1 and 2 out of the per-finding lines
    #[arg(long)]
    pub skip_reference_details: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report mode options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportMode {
    /// Background summary and per-finding comparison
    Comparison,
    /// Blood pool and liver reference lines only
    Lymphoma,
}

impl From<ReportMode> for ReportKind {
    fn from(mode: ReportMode) -> Self {
        match mode {
            ReportMode::Comparison => ReportKind::Comparison,
            ReportMode::Lymphoma => ReportKind::LymphomaBackground,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Report lines as plain text
    Text,
    /// Findings table and report lines as JSON
    Json,
}
