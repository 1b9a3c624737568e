mod runner;
mod writer;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Output format of the written report
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Single HTML page
    Html,
    /// JSON document
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "reportguard",
    version,
    about = "ReportGuard CLI - Validate CSV and PDF reports against rules and golden files",
    long_about = "ReportGuard validates every CSV and PDF report of a directory. CSV files are \
                  checked for required fields, formats, lengths and allowed values, then compared \
                  row by row with an expected CSV. PDF files are compared line by line with an \
                  expected PDF.\n\n\
                  Example usage:\n  \
                  reportguard --config config/config.yaml --reports data/reports"
)]
struct Args {
    /// Path to the YAML configuration file that defines validation rules
    #[arg(short, long, value_name = "FILE", default_value = "config/config.yaml")]
    config: String,

    /// Directory containing the CSV and PDF reports to validate
    #[arg(short, long, value_name = "DIR", default_value = "data/reports")]
    reports: String,

    /// Expected CSV file, rows are matched on the key field
    #[arg(long, value_name = "FILE", default_value = "data/expected/etalon_file.csv")]
    expected_csv: String,

    /// Expected PDF file
    #[arg(long, value_name = "FILE", default_value = "data/expected/etalon_file.pdf")]
    expected_pdf: String,

    /// Field used to match report rows with expected rows
    #[arg(long, default_value = "Barcode")]
    key_field: String,

    /// Report file or directory [default: outputs/validation_report.<format>]
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Format of the written report
    #[arg(short, long, value_enum, default_value = "html")]
    format: OutputFormat,

    /// Enable debug mode with debug logs and detailed error chains
    #[arg(short, long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    let debug = args.debug;
    init_tracing(debug);

    match runner::run(args) {
        Ok(summary) => {
            tracing::info!(
                validated = summary.validated,
                failed = summary.failed,
                errors = summary.errors,
                "run complete"
            );
        }
        Err(err) => {
            if debug {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed error output");
            }
            std::process::exit(1);
        }
    }
}
