use indexmap::IndexMap;

use crate::config::LengthConstraint;
use crate::results::Category;
use crate::rules::DatasetRule;
use crate::types::Dataset;

/// Checks string lengths against inclusive bounds, counted in characters.
///
/// A non-string value is reported once and its length is not checked.
pub fn check_length(
    dataset: &Dataset,
    constraints: &IndexMap<String, LengthConstraint>,
) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, row) in dataset.iter().enumerate() {
        let row_number = index + 1;
        for (field, constraint) in constraints {
            let Some(value) = row.get(field) else {
                continue;
            };
            let Some(text) = value.as_text() else {
                errors.push(format!(
                    "Field '{}' is expected to be a string but got {} in row {}.",
                    field,
                    value.type_name(),
                    row_number
                ));
                continue;
            };

            let length = text.chars().count();
            if length < constraint.min {
                errors.push(format!(
                    "Field '{}' is too short (min {} characters) in row {}.",
                    field, constraint.min, row_number
                ));
            } else if length > constraint.max {
                errors.push(format!(
                    "Field '{}' is too long (max {} characters) in row {}.",
                    field, constraint.max, row_number
                ));
            }
        }
    }

    errors
}

pub struct LengthCheck {
    constraints: IndexMap<String, LengthConstraint>,
}

impl LengthCheck {
    pub fn new(constraints: IndexMap<String, LengthConstraint>) -> Self {
        Self { constraints }
    }
}

impl DatasetRule for LengthCheck {
    fn name(&self) -> &'static str {
        "LengthCheck"
    }

    fn category(&self) -> Category {
        Category::Length
    }

    fn validate(&self, dataset: &Dataset) -> Vec<String> {
        check_length(dataset, &self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Row, Value};

    fn code_rows(values: &[Value]) -> Dataset {
        values
            .iter()
            .map(|v| {
                let mut row = Row::new();
                row.insert("Code".to_string(), v.clone());
                row
            })
            .collect()
    }

    fn two_to_four() -> IndexMap<String, LengthConstraint> {
        IndexMap::from([("Code".to_string(), LengthConstraint { min: 2, max: 4 })])
    }

    #[test]
    fn test_length_boundaries() {
        let dataset = code_rows(&[
            Value::from("ab"),
            Value::from("abcd"),
            Value::from("a"),
            Value::from("abcde"),
        ]);
        let errors = check_length(&dataset, &two_to_four());
        assert_eq!(
            errors,
            vec![
                "Field 'Code' is too short (min 2 characters) in row 3.",
                "Field 'Code' is too long (max 4 characters) in row 4.",
            ]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let dataset = code_rows(&[Value::from("éèêë")]);
        assert!(check_length(&dataset, &two_to_four()).is_empty());
    }

    #[test]
    fn test_non_string_value() {
        let dataset = code_rows(&[Value::Integer(12), Value::Missing]);
        let errors = check_length(&dataset, &two_to_four());
        assert_eq!(
            errors,
            vec![
                "Field 'Code' is expected to be a string but got integer in row 1.",
                "Field 'Code' is expected to be a string but got missing in row 2.",
            ]
        );
    }

    #[test]
    fn test_single_message_per_violation() {
        let constraints =
            IndexMap::from([("Code".to_string(), LengthConstraint { min: 3, max: 3 })]);
        let dataset = code_rows(&[Value::from("")]);
        assert_eq!(check_length(&dataset, &constraints).len(), 1);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(check_length(&Vec::new(), &two_to_four()).is_empty());
    }
}
