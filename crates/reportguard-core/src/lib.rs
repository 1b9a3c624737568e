pub mod config;
pub mod errors;
pub mod readers;
pub mod results;
pub mod rules;
pub mod types;
pub mod validator;

pub use config::{LengthConstraint, RuleConfig, TypeKind, Validations};
pub use errors::{ConfigError, ExtractionError};
pub use readers::{PdfTextStrategy, ReportFormat};
pub use results::{Category, FileResult, ViolationReport};
pub use rules::exact::ReferenceDataset;
pub use types::{Dataset, Row, Value};
pub use validator::Validator;
