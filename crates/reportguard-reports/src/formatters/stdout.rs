use prettytable::{Cell, Row, Table};
use reportguard_core::{FileResult, ReportFormat};

use crate::{Reporter, status_label};

struct SummaryLine {
    file: String,
    status: &'static str,
    violations: usize,
}

/// Console trace of a run: every check of every file, then a summary table.
pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
    summary: Vec<SummaryLine>,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("ReportGuard v{} - Validation Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
            summary: Vec::new(),
        }
    }

    pub fn print_discovered(&self, directory: &str, files: &[String]) {
        println!("Report directory: {}", directory);
        let (csv, pdf): (Vec<&String>, Vec<&String>) = files
            .iter()
            .partition(|f| f.to_lowercase().ends_with(".csv"));
        println!("CSV files: {}", join(&csv));
        println!("PDF files: {}", join(&pdf));
    }

    pub fn print_file_start(&self, current: usize, total: usize, name: &str) {
        println!("\n[{}/{}] Processing file: {}", current, total, name);
    }

    pub fn print_file_result(&self, result: &FileResult) {
        let unit = match result.format {
            ReportFormat::Csv => "rows",
            ReportFormat::Pdf => "lines",
        };
        println!(
            "{} ({} {}) - {}",
            result.file_name,
            result.total_records,
            unit,
            status_label(result.is_passed())
        );

        for category in result.categories() {
            let violations = result.report.get(*category);
            if violations.is_empty() {
                println!(
                    "  {} validation: PASSED - {}",
                    category.label(),
                    category.pass_message()
                );
            } else {
                println!(
                    "  {} validation: FAILED ({} errors)",
                    category.label(),
                    violations.len()
                );
                for violation in violations {
                    println!("    - {}", violation);
                }
            }
        }
    }

    pub fn print_file_error(&self, name: &str, error: &str) {
        println!("An error occurred while processing {}: {}", name, error);
    }

    pub fn summary_table(&self) -> String {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("File"),
            Cell::new("Status"),
            Cell::new("Violations"),
        ]));
        for line in &self.summary {
            table.add_row(Row::new(vec![
                Cell::new(&line.file),
                Cell::new(line.status),
                Cell::new(&line.violations.to_string()),
            ]));
        }
        table.to_string()
    }

    pub fn print_summary(&self) {
        let passed = self.summary.iter().filter(|l| l.status == "PASSED").count();
        let failed = self.summary.len() - passed;

        println!("\n{}", "=".repeat(self.intro_len));
        print!("{}", self.summary_table());
        println!("Result: {} failed, {} passed", failed, passed);
    }
}

fn join(files: &[&String]) -> String {
    if files.is_empty() {
        return "-".to_string();
    }
    files
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_discovered(&self, directory: &str, files: &[String]) {
        self.print_discovered(directory, files);
    }

    fn on_file_start(&self, current: usize, total: usize, name: &str) {
        self.print_file_start(current, total, name);
    }

    fn on_file_result(&mut self, result: &FileResult) {
        self.print_file_result(result);
        self.summary.push(SummaryLine {
            file: result.file_name.clone(),
            status: status_label(result.is_passed()),
            violations: result.report.total(),
        });
    }

    fn on_file_error(&mut self, name: &str, error: &str) {
        self.print_file_error(name, error);
        self.summary.push(SummaryLine {
            file: name.to_string(),
            status: "ERROR",
            violations: 0,
        });
    }

    fn on_complete(&self) {
        self.print_summary();
    }
}
