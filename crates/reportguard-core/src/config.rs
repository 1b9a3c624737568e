//! Rule configuration.
//!
//! The rules are read from a YAML document shaped like:
//!
//! ```yaml
//! validations:
//!   required_fields: [Barcode, Name]
//!   formats:
//!     Name: string
//!     Created: date
//!   length_constraints:
//!     Name: { min: 2, max: 40 }
//! lookups:
//!   Status: [Active, Inactive]
//! ```
//!
//! Every key is mandatory and mapping order is kept, so checks report fields in the
//! order they were configured.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::errors::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub validations: Validations,
    pub lookups: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Validations {
    pub required_fields: Vec<String>,
    pub formats: IndexMap<String, TypeKind>,
    pub length_constraints: IndexMap<String, LengthConstraint>,
}

/// Expected kind of a field. Unknown kinds fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[serde(alias = "str")]
    String,
    /// `YYYY-MM-DD HH:MM:SS`
    Date,
}

/// Inclusive bounds on a string's character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LengthConstraint {
    pub min: usize,
    pub max: usize,
}

impl RuleConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RuleConfig = serde_yaml::from_str(content)?;
        config.check_bounds()?;
        Ok(config)
    }

    fn check_bounds(&self) -> Result<(), ConfigError> {
        for (field, constraint) in &self.validations.length_constraints {
            if constraint.min > constraint.max {
                return Err(ConfigError::InvalidLengthBounds {
                    field: field.clone(),
                    min: constraint.min,
                    max: constraint.max,
                });
            }
        }
        Ok(())
    }
}
