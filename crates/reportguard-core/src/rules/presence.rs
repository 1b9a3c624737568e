use crate::results::Category;
use crate::rules::DatasetRule;
use crate::types::Dataset;

/// Every required field must exist and must not be an empty string.
///
/// Missing values (NaN) are not considered empty.
pub fn check_presence(dataset: &Dataset, required_fields: &[String]) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, row) in dataset.iter().enumerate() {
        let row_number = index + 1;
        for field in required_fields {
            match row.get(field) {
                None => errors.push(format!(
                    "Field '{}' is missing in row {}.",
                    field, row_number
                )),
                Some(value) if value.is_empty_text() => errors.push(format!(
                    "Field '{}' is empty in row {}.",
                    field, row_number
                )),
                Some(_) => {}
            }
        }
    }

    errors
}

pub struct PresenceCheck {
    required_fields: Vec<String>,
}

impl PresenceCheck {
    pub fn new(required_fields: Vec<String>) -> Self {
        Self { required_fields }
    }
}

impl DatasetRule for PresenceCheck {
    fn name(&self) -> &'static str {
        "PresenceCheck"
    }

    fn category(&self) -> Category {
        Category::Presence
    }

    fn validate(&self, dataset: &Dataset) -> Vec<String> {
        check_presence(dataset, &self.required_fields)
    }
}
