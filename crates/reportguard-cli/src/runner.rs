use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reportguard_core::readers::{PdfTextStrategy, discover_reports, extract_pdf_text};
use reportguard_core::{ReferenceDataset, ReportFormat, RuleConfig, Validator};
use reportguard_reports::{HtmlFormatter, JsonFormatter, Reporter, StdOutFormatter};
use tracing::{error, info};

use crate::{Args, OutputFormat, writer::resolve_file_path};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub validated: usize,
    pub failed: usize,
    /// Files that could not be extracted
    pub errors: usize,
}

pub fn run(args: Args) -> Result<RunSummary> {
    let config = RuleConfig::from_path(&args.config)
        .with_context(|| format!("Failed to load config file: {}", args.config))?;
    let files = discover_reports(&args.reports)
        .with_context(|| format!("Failed to read reports directory: {}", args.reports))?;
    info!(directory = %args.reports, files = files.len(), "reports discovered");

    let validator = build_validator(&config, &files, &args)?;
    let output_path = resolve_file_path(&args.output, args.format.extension())?;

    let version = env!("CARGO_PKG_VERSION");
    let mut console = StdOutFormatter::new(version.to_string());

    let (summary, rendered) = match args.format {
        OutputFormat::Html => {
            let mut formatter = HtmlFormatter::new(version.to_string());
            let mut reporters: [&mut dyn Reporter; 2] = [&mut console, &mut formatter];
            let summary = validate_files(&validator, &files, &args.reports, &mut reporters);
            (summary, formatter.to_html())
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version.to_string());
            let mut reporters: [&mut dyn Reporter; 2] = [&mut console, &mut formatter];
            let summary = validate_files(&validator, &files, &args.reports, &mut reporters);
            let json = formatter
                .to_json()
                .context("Failed to serialize the JSON report")?;
            (summary, json)
        }
    };

    fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
    println!("Results written to {}", output_path.display());

    Ok(summary)
}

/// Reference data is only loaded for the kinds of files actually present.
fn build_validator(config: &RuleConfig, files: &[PathBuf], args: &Args) -> Result<Validator> {
    let has_format =
        |format: ReportFormat| files.iter().any(|f| ReportFormat::from_path(f) == Some(format));

    let mut validator = Validator::new(config);
    if has_format(ReportFormat::Csv) {
        let reference = ReferenceDataset::load(&args.expected_csv, args.key_field.clone())
            .with_context(|| format!("Failed to load expected CSV: {}", args.expected_csv))?;
        validator = validator.with_reference_csv(reference);
    }
    if has_format(ReportFormat::Pdf) {
        let text = extract_pdf_text(&args.expected_pdf, PdfTextStrategy::AllPages)
            .with_context(|| format!("Failed to load expected PDF: {}", args.expected_pdf))?;
        validator = validator.with_reference_pdf_text(text);
    }
    Ok(validator)
}

/// Validate each file in turn. A file that cannot be extracted is logged and skipped.
fn validate_files(
    validator: &Validator,
    files: &[PathBuf],
    directory: &str,
    reporters: &mut [&mut dyn Reporter],
) -> RunSummary {
    let names: Vec<String> = files.iter().map(|f| display_name(f)).collect();
    for reporter in reporters.iter() {
        reporter.on_start();
        reporter.on_discovered(directory, &names);
    }

    let mut summary = RunSummary::default();
    for (i, (path, name)) in files.iter().zip(&names).enumerate() {
        for reporter in reporters.iter() {
            reporter.on_file_start(i + 1, files.len(), name);
        }
        match validator.validate_file(path) {
            Ok(result) => {
                summary.validated += 1;
                if !result.is_passed() {
                    summary.failed += 1;
                }
                for reporter in reporters.iter_mut() {
                    reporter.on_file_result(&result);
                }
            }
            Err(e) => {
                error!(file = %path.display(), error = %e, "failed to process report file");
                summary.errors += 1;
                let message = e.to_string();
                for reporter in reporters.iter_mut() {
                    reporter.on_file_error(name, &message);
                }
            }
        }
    }

    for reporter in reporters.iter() {
        reporter.on_complete();
    }
    summary
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
