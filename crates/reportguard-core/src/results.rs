use std::fmt;

use crate::readers::ReportFormat;

/// The six violation categories a report is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Presence,
    Format,
    Length,
    Lookup,
    ExactValue,
    Pdf,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Presence,
        Category::Format,
        Category::Length,
        Category::Lookup,
        Category::ExactValue,
        Category::Pdf,
    ];

    /// Stable key used in serialized reports.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Presence => "presence_errors",
            Category::Format => "format_errors",
            Category::Length => "length_errors",
            Category::Lookup => "lookup_errors",
            Category::ExactValue => "exact_value_errors",
            Category::Pdf => "pdf_errors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Presence => "Presence",
            Category::Format => "Format",
            Category::Length => "Length",
            Category::Lookup => "Lookup",
            Category::ExactValue => "Exact value",
            Category::Pdf => "PDF content",
        }
    }

    /// Console line printed when the category has no violation.
    pub fn pass_message(&self) -> &'static str {
        match self {
            Category::Presence => "All required fields are present.",
            Category::Format => "All data types are valid.",
            Category::Length => "All string lengths are within specified limits.",
            Category::Lookup => "All lookup values are valid.",
            Category::ExactValue => "All values match the expected values.",
            Category::Pdf => "All lines were found in the expected PDF.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

const CSV_CATEGORIES: [Category; 5] = [
    Category::Presence,
    Category::Format,
    Category::Length,
    Category::Lookup,
    Category::ExactValue,
];

/// Violations of one file, grouped by category. An empty list means the category passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationReport {
    presence: Vec<String>,
    format: Vec<String>,
    length: Vec<String>,
    lookup: Vec<String>,
    exact_value: Vec<String>,
    pdf: Vec<String>,
}

impl ViolationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category, violations: Vec<String>) {
        self.get_mut(category).extend(violations);
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Presence => &self.presence,
            Category::Format => &self.format,
            Category::Length => &self.length,
            Category::Lookup => &self.lookup,
            Category::ExactValue => &self.exact_value,
            Category::Pdf => &self.pdf,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Presence => &mut self.presence,
            Category::Format => &mut self.format,
            Category::Length => &mut self.length,
            Category::Lookup => &mut self.lookup,
            Category::ExactValue => &mut self.exact_value,
            Category::Pdf => &mut self.pdf,
        }
    }

    pub fn is_category_passed(&self, category: Category) -> bool {
        self.get(category).is_empty()
    }

    pub fn is_passed(&self) -> bool {
        Category::ALL.iter().all(|c| self.is_category_passed(*c))
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// Outcome of validating a single report file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub file_name: String,
    pub format: ReportFormat,
    /// Rows for a CSV file, lines for a PDF file
    pub total_records: usize,
    pub report: ViolationReport,
}

impl FileResult {
    pub fn new(file_name: String, format: ReportFormat, total_records: usize) -> Self {
        Self {
            file_name,
            format,
            total_records,
            report: ViolationReport::new(),
        }
    }

    /// Categories checked for this kind of file.
    pub fn categories(&self) -> &'static [Category] {
        match self.format {
            ReportFormat::Csv => &CSV_CATEGORIES,
            ReportFormat::Pdf => &[Category::Pdf],
        }
    }

    pub fn is_passed(&self) -> bool {
        self.report.is_passed()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_report_passes() {
        let report = ViolationReport::new();
        assert!(report.is_passed());
        assert_eq!(report.total(), 0);
        for category in Category::ALL {
            assert!(report.is_category_passed(category));
        }
    }

    #[test]
    fn test_record_keeps_categories_apart() {
        let mut report = ViolationReport::new();
        report.record(Category::Length, vec!["too long".to_string()]);
        report.record(Category::Length, vec!["too short".to_string()]);

        assert!(!report.is_passed());
        assert!(report.is_category_passed(Category::Presence));
        assert_eq!(report.get(Category::Length), ["too long", "too short"]);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn test_categories_per_format() {
        let csv = FileResult::new("a.csv".to_string(), ReportFormat::Csv, 3);
        let pdf = FileResult::new("a.pdf".to_string(), ReportFormat::Pdf, 10);

        assert_eq!(csv.categories().len(), 5);
        assert!(!csv.categories().contains(&Category::Pdf));
        assert_eq!(pdf.categories(), [Category::Pdf]);
    }

    #[test]
    fn test_category_keys() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec![
                "presence_errors",
                "format_errors",
                "length_errors",
                "lookup_errors",
                "exact_value_errors",
                "pdf_errors"
            ]
        );
    }
}
