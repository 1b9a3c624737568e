use chrono::Local;
use reportguard_core::{FileResult, ReportFormat};
use serde::Serialize;
use serde_json::Error;

use crate::{Reporter, status_label};

#[derive(Serialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    files: Vec<FileFormatter>,
    errors: Vec<FileErrorFormatter>,
}

#[derive(Serialize)]
struct FileFormatter {
    name: String,
    format: String,
    records: usize,
    pass: bool,
    categories: Vec<CategoryFormatter>,
}

#[derive(Serialize)]
struct CategoryFormatter {
    name: String,
    status: String,
    errors: Vec<String>,
}

#[derive(Serialize)]
struct FileErrorFormatter {
    name: String,
    error: String,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            files: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_discovered(&self, _directory: &str, _files: &[String]) {}

    fn on_file_start(&self, _current: usize, _total: usize, _name: &str) {}

    fn on_file_result(&mut self, result: &FileResult) {
        let categories: Vec<CategoryFormatter> = result
            .categories()
            .iter()
            .map(|c| {
                let errors = result.report.get(*c).to_vec();
                CategoryFormatter {
                    name: c.key().to_string(),
                    status: status_label(errors.is_empty()).to_string(),
                    errors,
                }
            })
            .collect();
        let format = match result.format {
            ReportFormat::Csv => "csv",
            ReportFormat::Pdf => "pdf",
        };
        self.files.push(FileFormatter {
            name: result.file_name.clone(),
            format: format.to_string(),
            records: result.total_records,
            pass: result.is_passed(),
            categories,
        });
    }

    fn on_file_error(&mut self, name: &str, error: &str) {
        self.errors.push(FileErrorFormatter {
            name: name.to_string(),
            error: error.to_string(),
        });
    }

    fn on_complete(&self) {}
}

#[cfg(test)]
mod test {
    use super::*;
    use reportguard_core::Category;
    use serde_json::Value;

    #[test]
    fn test_json_structure() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        let mut csv = FileResult::new("report.csv".to_string(), ReportFormat::Csv, 4);
        csv.report
            .record(Category::Presence, vec!["Field 'A' is missing in row 1.".to_string()]);
        formatter.on_file_result(&csv);
        formatter.on_file_error("broken.pdf", "PDF parsing error");

        let json: Value = serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        let file = &json["files"][0];
        assert_eq!(file["name"], "report.csv");
        assert_eq!(file["format"], "csv");
        assert_eq!(file["records"], 4);
        assert_eq!(file["pass"], false);
        assert_eq!(file["categories"].as_array().unwrap().len(), 5);
        assert_eq!(file["categories"][0]["name"], "presence_errors");
        assert_eq!(file["categories"][0]["status"], "FAILED");
        assert_eq!(file["categories"][1]["status"], "PASSED");
        assert_eq!(json["errors"][0]["name"], "broken.pdf");
    }
}
