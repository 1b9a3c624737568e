use std::path::Path;

use crate::errors::ExtractionError;
use crate::readers::{PdfTextStrategy, extract_pdf_text};

/// Every trimmed line of `actual_text` must be contained in some line of `expected_text`.
///
/// Containment rather than equality: `"Total: 5"` matches `"Total: 5 units"`. An empty
/// line is contained in any line, so it always passes when the reference has text.
pub fn compare_pdf_text(actual_text: &str, expected_text: &str) -> Vec<String> {
    let expected_lines: Vec<&str> = expected_text.lines().collect();

    actual_text
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            let found = expected_lines.iter().any(|expected| expected.contains(line));
            (!found).then(|| {
                format!(
                    "Line '{}' not found in expected data from PDF (line {}).",
                    line,
                    index + 1
                )
            })
        })
        .collect()
}

/// Compares report text with the text of every page of the reference PDF.
pub fn check_exact_pdf(
    actual_text: &str,
    reference_pdf_path: impl AsRef<Path>,
) -> Result<Vec<String>, ExtractionError> {
    let expected_text = extract_pdf_text(reference_pdf_path, PdfTextStrategy::AllPages)?;
    Ok(compare_pdf_text(actual_text, &expected_text))
}
