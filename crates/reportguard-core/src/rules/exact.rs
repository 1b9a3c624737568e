//! Exact comparison of CSV rows against a golden reference file.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::ExtractionError;
use crate::readers::read_csv;
use crate::results::Category;
use crate::rules::DatasetRule;
use crate::types::{Dataset, Row};

pub const DEFAULT_KEY_FIELD: &str = "Barcode";

/// Golden rows indexed by their key field.
///
/// The index is built once. When several rows share a key the first one wins.
pub struct ReferenceDataset {
    key_field: String,
    rows: Dataset,
    index: HashMap<String, usize>,
}

impl ReferenceDataset {
    pub fn new(rows: Dataset, key_field: impl Into<String>) -> Self {
        let key_field = key_field.into();
        let mut index = HashMap::with_capacity(rows.len());

        for (position, row) in rows.iter().enumerate() {
            let Some(key) = row.get(&key_field).and_then(|v| v.index_key()) else {
                continue;
            };
            if index.contains_key(&key) {
                warn!(
                    key_field = %key_field,
                    value = %row[&key_field],
                    row = position + 1,
                    "duplicate key in reference data, keeping the first row"
                );
                continue;
            }
            index.insert(key, position);
        }

        Self {
            key_field,
            rows,
            index,
        }
    }

    pub fn load(path: impl AsRef<Path>, key_field: impl Into<String>) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let rows = read_csv(path)?;
        let reference = Self::new(rows, key_field);
        debug!(
            path = %path.display(),
            rows = reference.len(),
            keys = reference.index.len(),
            "reference dataset loaded"
        );
        Ok(reference)
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reference row whose key equals the key of `row`.
    pub fn find(&self, row: &Row) -> Option<&Row> {
        let key = row.get(&self.key_field)?.index_key()?;
        self.index.get(&key).map(|position| &self.rows[*position])
    }

    /// Compares every row of `dataset` with its reference row.
    ///
    /// Fields are taken from the reference row. A field missing from the actual row is
    /// reported and the remaining fields are still compared. Two missing values are equal.
    pub fn compare(&self, dataset: &Dataset) -> Vec<String> {
        let mut errors = Vec::new();

        for (index, row) in dataset.iter().enumerate() {
            let row_number = index + 1;

            let Some(key_value) = row.get(&self.key_field) else {
                errors.push(format!(
                    "Field '{}' is missing in row {}, no expected value can be matched.",
                    self.key_field, row_number
                ));
                continue;
            };

            let Some(expected_row) = self.find(row) else {
                errors.push(format!(
                    "No expected value found for {} '{}' in row {}.",
                    self.key_field, key_value, row_number
                ));
                continue;
            };

            for (field, expected) in expected_row {
                let Some(actual) = row.get(field) else {
                    errors.push(format!(
                        "Field '{}' is missing in row {}. Expected '{}'.",
                        field, row_number, expected
                    ));
                    continue;
                };
                if actual.is_missing() && expected.is_missing() {
                    continue;
                }
                if !actual.equals(expected) {
                    errors.push(format!(
                        "Field '{}' does not match expected value in row {}. Expected '{}', found '{}'.",
                        field, row_number, expected, actual
                    ));
                }
            }
        }

        errors
    }
}

/// Loads the reference CSV at `reference_path` and compares `dataset` with it,
/// keyed on `Barcode`.
pub fn check_exact_value(
    dataset: &Dataset,
    reference_path: impl AsRef<Path>,
) -> Result<Vec<String>, ExtractionError> {
    let reference = ReferenceDataset::load(reference_path, DEFAULT_KEY_FIELD)?;
    Ok(reference.compare(dataset))
}

pub struct ExactValueCheck {
    reference: ReferenceDataset,
}

impl ExactValueCheck {
    pub fn new(reference: ReferenceDataset) -> Self {
        Self { reference }
    }
}

impl DatasetRule for ExactValueCheck {
    fn name(&self) -> &'static str {
        "ExactValueCheck"
    }

    fn category(&self) -> Category {
        Category::ExactValue
    }

    fn validate(&self, dataset: &Dataset) -> Vec<String> {
        self.reference.compare(dataset)
    }
}
