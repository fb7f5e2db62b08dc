use clap::Parser;
use lesiontrack_core::cli::{Cli, OutputFormat};
use lesiontrack_core::{
    FindingsExtractor, FindingsTable, ReportConfig, ReportKind, Result, TextReport,
};
use log::{error, info};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ReportConfig::default()
        .with_threshold(cli.threshold)
        .detail_reference_findings(!cli.skip_reference_details);
    config.validate()?;

    let text = read_input(cli.file.as_deref())?;
    let kind: ReportKind = cli.mode.into();
    info!("Generating {} report", kind);

    let table = FindingsExtractor::extract(&text);
    info!("Extracted {} findings", table.len());
    if table.is_empty() {
        info!("No findings recognized in input");
    }

    let lines = kind.render(&table, &config);
    let output = render_output(cli, kind, &table, &lines)?;

    write_output(cli.output.as_ref(), &output)
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Reads the export from a file, or stdin when no file (or "-") is given
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            info!("Reading {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            info!("Reading from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn render_output(
    cli: &Cli,
    kind: ReportKind,
    table: &FindingsTable,
    lines: &[String],
) -> Result<String> {
    match cli.format {
        OutputFormat::Text => Ok(TextReport::new(lines).to_string()),
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                lesiontrack_core::JsonReport::new(kind, table, lines).to_json()
            }
            #[cfg(not(feature = "json"))]
            {
                let _ = (kind, table);
                Err("JSON output requires the 'json' feature (rebuild with: cargo build --features json)".into())
            }
        }
    }
}

fn write_output(path: Option<&PathBuf>, output: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", output))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EXPORT: &str = "Finding 1\nMean: 1.8 SUVbw\nFinding 2\nMean: 2.2 SUVbw\n";

    #[test]
    fn test_read_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.txt");
        fs::write(&path, EXPORT).unwrap();

        assert_eq!(read_input(Some(path.as_path())).unwrap(), EXPORT);
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");
        assert!(read_input(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_run_writes_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("export.txt");
        let output = temp_dir.path().join("report.txt");
        fs::write(&input, EXPORT).unwrap();

        let cli = Cli::parse_from([
            "lesiontrack",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        run(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Blood pool obtained at the descending thoracic aorta: Mean SUV: 1.8.\n\
             Liver reference: Mean SUV: 2.2.\n"
        );
    }

    #[test]
    fn test_run_lymphoma_error_line_is_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("export.txt");
        let output = temp_dir.path().join("report.txt");
        fs::write(&input, "Finding 2\nMax: 3.0 SUVbw\n").unwrap();

        let cli = Cli::parse_from([
            "lesiontrack",
            input.to_str().unwrap(),
            "-m",
            "lymphoma",
            "-o",
            output.to_str().unwrap(),
        ]);
        run(&cli).unwrap();

        assert!(fs::read_to_string(&output)
            .unwrap()
            .starts_with("Error: Lymphoma background requires findings 1"));
    }

    #[test]
    fn test_run_rejects_invalid_threshold() {
        let cli = Cli::parse_from(["lesiontrack", "-", "--threshold", "0"]);
        assert!(run(&cli).is_err());
    }
}
