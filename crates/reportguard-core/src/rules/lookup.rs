use std::collections::HashSet;

use indexmap::IndexMap;

use crate::results::Category;
use crate::rules::DatasetRule;
use crate::types::Dataset;

/// Values of a lookup field must be one of its allowed strings.
///
/// Membership is exact: no case folding, and a number never matches.
pub fn check_lookup(dataset: &Dataset, lookups: &IndexMap<String, Vec<String>>) -> Vec<String> {
    let members: Vec<(&String, &Vec<String>, HashSet<&str>)> = lookups
        .iter()
        .map(|(field, allowed)| (field, allowed, allowed.iter().map(String::as_str).collect()))
        .collect();

    let mut errors = Vec::new();

    for (index, row) in dataset.iter().enumerate() {
        for (field, allowed, set) in &members {
            let Some(value) = row.get(*field) else {
                continue;
            };
            let is_member = value.as_text().is_some_and(|s| set.contains(s));
            if !is_member {
                errors.push(format!(
                    "Field '{}' contains an invalid value '{}' in row {}. Expected values: {:?}.",
                    field,
                    value,
                    index + 1,
                    allowed
                ));
            }
        }
    }

    errors
}

pub struct LookupCheck {
    lookups: IndexMap<String, Vec<String>>,
}

impl LookupCheck {
    pub fn new(lookups: IndexMap<String, Vec<String>>) -> Self {
        Self { lookups }
    }
}

impl DatasetRule for LookupCheck {
    fn name(&self) -> &'static str {
        "LookupCheck"
    }

    fn category(&self) -> Category {
        Category::Lookup
    }

    fn validate(&self, dataset: &Dataset) -> Vec<String> {
        check_lookup(dataset, &self.lookups)
    }
}
