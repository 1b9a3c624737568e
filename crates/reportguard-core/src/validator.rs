//! Per-file validation.
//!
//! A [`Validator`] is built once per run from the rule configuration and the reference
//! data, then applied to each report file in turn. Every file gets a fresh
//! [`ViolationReport`].

use std::path::Path;

use tracing::debug;

use crate::config::RuleConfig;
use crate::errors::ExtractionError;
use crate::readers::{PdfTextStrategy, ReportFormat, extract_pdf_text, read_csv};
use crate::results::{Category, FileResult, ViolationReport};
use crate::rules::{
    DatasetRule, ExactValueCheck, LengthCheck, LookupCheck, PresenceCheck, ReferenceDataset,
    TypeCheck, compare_pdf_text,
};
use crate::types::Dataset;

pub struct Validator {
    rules: Vec<Box<dyn DatasetRule>>,
    reference_pdf_text: Option<String>,
}

impl Validator {
    /// Create a validator running the presence, type, length and lookup checks.
    ///
    /// Exact comparisons are only run once reference data is attached.
    pub fn new(config: &RuleConfig) -> Self {
        let validations = &config.validations;
        let rules: Vec<Box<dyn DatasetRule>> = vec![
            Box::new(PresenceCheck::new(validations.required_fields.clone())),
            Box::new(TypeCheck::new(validations.formats.clone())),
            Box::new(LengthCheck::new(validations.length_constraints.clone())),
            Box::new(LookupCheck::new(config.lookups.clone())),
        ];
        Self {
            rules,
            reference_pdf_text: None,
        }
    }

    /// Compare CSV rows with the given golden rows.
    pub fn with_reference_csv(mut self, reference: ReferenceDataset) -> Self {
        self.rules.push(Box::new(ExactValueCheck::new(reference)));
        self
    }

    /// Compare PDF text with the given golden text.
    pub fn with_reference_pdf_text(mut self, text: String) -> Self {
        self.reference_pdf_text = Some(text);
        self
    }

    /// Get a summary of configured rules
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate_dataset(&self, dataset: &Dataset) -> ViolationReport {
        let mut report = ViolationReport::new();
        for rule in &self.rules {
            let violations = rule.validate(dataset);
            debug!(
                rule = rule.name(),
                violations = violations.len(),
                "rule applied"
            );
            report.record(rule.category(), violations);
        }
        report
    }

    pub fn validate_pdf_text(&self, text: &str) -> ViolationReport {
        let mut report = ViolationReport::new();
        if let Some(expected) = &self.reference_pdf_text {
            report.record(Category::Pdf, compare_pdf_text(text, expected));
        }
        report
    }

    /// Extract a report file and validate it.
    ///
    /// Extraction failures are returned as errors, validation findings are not.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<FileResult, ExtractionError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let format = ReportFormat::from_path(path)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(path.display().to_string()))?;

        let result = match format {
            ReportFormat::Csv => {
                let dataset = read_csv(path)?;
                let mut result = FileResult::new(file_name, format, dataset.len());
                result.report = self.validate_dataset(&dataset);
                result
            }
            ReportFormat::Pdf => {
                let text = extract_pdf_text(path, PdfTextStrategy::LastPage)?;
                let mut result = FileResult::new(file_name, format, text.lines().count());
                result.report = self.validate_pdf_text(&text);
                result
            }
        };

        debug!(
            file = %result.file_name,
            violations = result.report.total(),
            "file validated"
        );
        Ok(result)
    }
}
