use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::config::TypeKind;
use crate::results::Category;
use crate::rules::DatasetRule;
use crate::types::{Dataset, Value};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Checks the kind of every configured field that is present in a row.
pub fn check_data_type(dataset: &Dataset, formats: &IndexMap<String, TypeKind>) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, row) in dataset.iter().enumerate() {
        let row_number = index + 1;
        for (field, kind) in formats {
            let Some(value) = row.get(field) else {
                continue;
            };
            if value.is_empty_text() {
                errors.push(format!("Field '{}' is empty in row {}.", field, row_number));
                continue;
            }
            match kind {
                TypeKind::String => {
                    if value.as_text().is_none() {
                        errors.push(format!(
                            "Field '{}' should be of type string in row {}.",
                            field, row_number
                        ));
                    }
                }
                TypeKind::Date => {
                    if !is_valid_date(value) {
                        errors.push(format!(
                            "Field '{}' contains wrong format date {} in row {}.",
                            field, value, row_number
                        ));
                    }
                }
            }
        }
    }

    errors
}

/// chrono lets a format space match any run of whitespace and skips padding before
/// numbers, so the parsed value must also format back to the same text.
fn is_valid_date(value: &Value) -> bool {
    value.as_text().is_some_and(|s| {
        NaiveDateTime::parse_from_str(s, DATE_FORMAT)
            .is_ok_and(|dt| dt.format(DATE_FORMAT).to_string() == s)
    })
}

pub struct TypeCheck {
    formats: IndexMap<String, TypeKind>,
}

impl TypeCheck {
    pub fn new(formats: IndexMap<String, TypeKind>) -> Self {
        Self { formats }
    }
}

impl DatasetRule for TypeCheck {
    fn name(&self) -> &'static str {
        "TypeCheck"
    }

    fn category(&self) -> Category {
        Category::Format
    }

    fn validate(&self, dataset: &Dataset) -> Vec<String> {
        check_data_type(dataset, &self.formats)
    }
}
