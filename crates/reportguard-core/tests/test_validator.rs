use reportguard_core::{
    Category, Dataset, ReferenceDataset, ReportFormat, Row, RuleConfig, Validator, Value,
    rules::check_exact_value,
};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

const CONFIG: &str = r#"
validations:
  required_fields: [Barcode, Name, Status]
  formats:
    Name: string
    Created: date
  length_constraints:
    Name: { min: 2, max: 10 }
lookups:
  Status: [Active, Inactive]
"#;

fn write_csv(path: &Path, lines: &[&str]) {
    let mut file = File::create(path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
}

#[test]
fn test_validate_clean_file() {
    let dir = tempdir().unwrap();
    let expected = dir.path().join("expected.csv");
    let report = dir.path().join("report.csv");
    let lines = [
        "Barcode,Name,Status,Created",
        "1001,Tea,Active,2024-01-01 10:00:00",
        "1002,Coffee,Inactive,2024-01-02 11:30:00",
    ];
    write_csv(&expected, &lines);
    write_csv(&report, &lines);

    let config = RuleConfig::from_yaml_str(CONFIG).unwrap();
    let reference = ReferenceDataset::load(&expected, "Barcode").unwrap();
    let validator = Validator::new(&config).with_reference_csv(reference);

    let result = validator.validate_file(&report).unwrap();
    assert_eq!(result.file_name, "report.csv");
    assert_eq!(result.format, ReportFormat::Csv);
    assert_eq!(result.total_records, 2);
    assert!(result.is_passed(), "{:?}", result.report);
}

#[test]
fn test_validate_file_with_violations() {
    let dir = tempdir().unwrap();
    let expected = dir.path().join("expected.csv");
    let report = dir.path().join("report.csv");
    write_csv(
        &expected,
        &[
            "Barcode,Name,Status,Created",
            "1001,Tea,Active,2024-01-01 10:00:00",
        ],
    );
    write_csv(
        &report,
        &[
            "Barcode,Name,Status,Created",
            "1001,T,Paused,2024-01-01",
            "1003,Water,Active,2024-01-03 09:00:00",
        ],
    );

    let config = RuleConfig::from_yaml_str(CONFIG).unwrap();
    let reference = ReferenceDataset::load(&expected, "Barcode").unwrap();
    let validator = Validator::new(&config).with_reference_csv(reference);
    let result = validator.validate_file(&report).unwrap();
    let report = &result.report;

    assert!(report.is_category_passed(Category::Presence));
    assert_eq!(
        report.get(Category::Format),
        ["Field 'Created' contains wrong format date 2024-01-01 in row 1."]
    );
    assert_eq!(
        report.get(Category::Length),
        ["Field 'Name' is too short (min 2 characters) in row 1."]
    );
    assert_eq!(report.get(Category::Lookup).len(), 1);
    assert!(report.get(Category::Lookup)[0].contains("'Paused'"));
    assert_eq!(
        report.get(Category::ExactValue),
        [
            "Field 'Name' does not match expected value in row 1. Expected 'Tea', found 'T'.",
            "Field 'Status' does not match expected value in row 1. Expected 'Active', found 'Paused'.",
            "Field 'Created' does not match expected value in row 1. Expected '2024-01-01 10:00:00', found '2024-01-01'.",
            "No expected value found for Barcode '1003' in row 2.",
        ]
    );
    assert!(report.is_category_passed(Category::Pdf));
}

#[test]
fn test_reports_do_not_accumulate_across_files() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("a.csv");
    let good = dir.path().join("b.csv");
    write_csv(&bad, &["Barcode,Name,Status", "1,,Active"]);
    write_csv(&good, &["Barcode,Name,Status", "2,Tea,Active"]);

    let config = RuleConfig::from_yaml_str(CONFIG).unwrap();
    let validator = Validator::new(&config);

    let first = validator.validate_file(&bad).unwrap();
    let second = validator.validate_file(&good).unwrap();
    assert!(!first.is_passed());
    assert!(second.is_passed(), "{:?}", second.report);
}

#[test]
fn test_without_reference_exact_check_is_skipped() {
    let config = RuleConfig::from_yaml_str(CONFIG).unwrap();
    let validator = Validator::new(&config);
    assert_eq!(
        validator.rule_names(),
        vec!["PresenceCheck", "TypeCheck", "LengthCheck", "LookupCheck"]
    );
    assert!(validator.validate_dataset(&Vec::new()).is_passed());
}

#[test]
fn test_validate_pdf_text() {
    let config = RuleConfig::from_yaml_str(CONFIG).unwrap();
    let validator = Validator::new(&config)
        .with_reference_pdf_text("Invoice\nTotal: 5 units\n".to_string());

    let report = validator.validate_pdf_text("Invoice\nTotal: 6");
    assert_eq!(
        report.get(Category::Pdf),
        ["Line 'Total: 6' not found in expected data from PDF (line 2)."]
    );
    assert!(report.is_category_passed(Category::Presence));
}

#[test]
fn test_unsupported_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "hello").unwrap();

    let config = RuleConfig::from_yaml_str(CONFIG).unwrap();
    assert!(Validator::new(&config).validate_file(&path).is_err());
}

#[test]
fn test_corrupt_pdf_is_an_extraction_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    fs::write(&path, "definitely not a pdf").unwrap();

    let config = RuleConfig::from_yaml_str(CONFIG).unwrap();
    assert!(Validator::new(&config).validate_file(&path).is_err());
}

#[test]
fn test_check_exact_value_from_path() {
    let dir = tempdir().unwrap();
    let expected = dir.path().join("expected.csv");
    write_csv(&expected, &["Barcode,Name", "123,Alice"]);

    let mut row = Row::new();
    row.insert("Barcode".to_string(), Value::Integer(123));
    row.insert("Name".to_string(), Value::from("Bob"));
    let dataset: Dataset = vec![row];
    let errors = check_exact_value(&dataset, &expected).unwrap();
    assert_eq!(
        errors,
        vec!["Field 'Name' does not match expected value in row 1. Expected 'Alice', found 'Bob'."]
    );
    assert!(check_exact_value(&dataset, dir.path().join("missing.csv")).is_err());
}
