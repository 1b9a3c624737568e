use std::fmt::Write;

use chrono::Local;
use reportguard_core::FileResult;

use crate::{Reporter, status_label, utils::escape::escape_html};

const STYLE: &str = "body{font-family:sans-serif;margin:2em;color:#222}\
table{border-collapse:collapse;width:100%;margin-bottom:2em}\
th,td{border:1px solid #ccc;padding:6px 10px;text-align:left;vertical-align:top}\
th{background:#f0f0f0}\
.passed{color:#1a7f37;font-weight:bold}\
.failed{color:#cf222e;font-weight:bold}\
ul{margin:0;padding-left:1.2em}";

/// Single HTML page with the status and violations of every validated file.
pub struct HtmlFormatter {
    version: String,
    timestamp: String,
    files: Vec<FileResult>,
}

impl HtmlFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            files: Vec::new(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>Validation Report</title>")?;
        writeln!(out, "<style>{}</style>", STYLE)?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>Validation Report</h1>")?;
        writeln!(
            out,
            "<p>Generated {} by ReportGuard v{}</p>",
            escape_html(&self.timestamp),
            escape_html(&self.version)
        )?;

        if self.files.is_empty() {
            writeln!(out, "<p>No report file was validated.</p>")?;
        }

        for file in &self.files {
            let class = css_class(file.is_passed());
            writeln!(
                out,
                "<h2>{} <span class=\"{}\">{}</span></h2>",
                escape_html(&file.file_name),
                class,
                status_label(file.is_passed())
            )?;
            writeln!(out, "<table>")?;
            writeln!(
                out,
                "<tr><th>Validation</th><th>Status</th><th>Errors</th></tr>"
            )?;
            for category in file.categories() {
                let violations = file.report.get(*category);
                let passed = violations.is_empty();
                write!(
                    out,
                    "<tr><td>{}</td><td class=\"{}\">{}</td><td>",
                    category.label(),
                    css_class(passed),
                    status_label(passed)
                )?;
                if !passed {
                    write!(out, "<ul>")?;
                    for violation in violations {
                        write!(out, "<li>{}</li>", escape_html(violation))?;
                    }
                    write!(out, "</ul>")?;
                }
                writeln!(out, "</td></tr>")?;
            }
            writeln!(out, "</table>")?;
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

fn css_class(passed: bool) -> &'static str {
    if passed { "passed" } else { "failed" }
}

impl Reporter for HtmlFormatter {
    fn on_start(&self) {}

    fn on_discovered(&self, _directory: &str, _files: &[String]) {}

    fn on_file_start(&self, _current: usize, _total: usize, _name: &str) {}

    fn on_file_result(&mut self, result: &FileResult) {
        self.files.push(result.clone());
    }

    fn on_file_error(&mut self, _name: &str, _error: &str) {}

    fn on_complete(&self) {}
}
