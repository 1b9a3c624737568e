pub mod exact;
pub mod format;
pub mod length;
pub mod lookup;
pub mod pdf;
pub mod presence;

pub use exact::{ExactValueCheck, ReferenceDataset, check_exact_value};
pub use format::{TypeCheck, check_data_type};
pub use length::{LengthCheck, check_length};
pub use lookup::{LookupCheck, check_lookup};
pub use pdf::{check_exact_pdf, compare_pdf_text};
pub use presence::{PresenceCheck, check_presence};

use crate::results::Category;
use crate::types::Dataset;

/// A check run against every row of a CSV dataset.
pub trait DatasetRule: Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    /// Category the violations are reported under.
    fn category(&self) -> Category;
    /// Validates a dataset. Never fails: findings are returned as messages.
    fn validate(&self, dataset: &Dataset) -> Vec<String>;
}
