pub mod csv_reader;
pub mod pdf_reader;

use std::path::{Path, PathBuf};

pub use csv_reader::read_csv;
pub use pdf_reader::{PdfTextStrategy, extract_pdf_text};

use crate::errors::ExtractionError;

/// Report file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Pdf,
}

impl ReportFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" => Some(ReportFormat::Csv),
            "pdf" => Some(ReportFormat::Pdf),
            _ => None,
        }
    }
}

/// List the CSV and PDF reports directly inside `dir`, sorted by file name.
pub fn discover_reports(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ExtractionError> {
    let mut reports = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && ReportFormat::from_path(&path).is_some() {
            reports.push(path);
        }
    }
    reports.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ReportFormat::from_path(Path::new("data/a.csv")),
            Some(ReportFormat::Csv)
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("REPORT.PDF")),
            Some(ReportFormat::Pdf)
        );
        assert_eq!(ReportFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(ReportFormat::from_path(Path::new("csv")), None);
    }

    #[test]
    fn test_discover_reports_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.pdf", "a.csv", "c.txt", "A.CSV"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let found = discover_reports(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["A.CSV", "a.csv", "b.pdf"]);
    }

    #[test]
    fn test_discover_missing_dir() {
        assert!(discover_reports("no/such/dir").is_err());
    }
}
