use thiserror::Error;

/// Problems with the rule configuration. These are fatal for a run.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML, a missing key or an unknown type kind
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Length constraint for field '{field}' has min {min} greater than max {max}")]
    InvalidLengthBounds {
        field: String,
        min: usize,
        max: usize,
    },
}

/// Failure to turn a report file (or a reference file) into data.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// CSV reading or IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The Arrow CSV reader rejected the file
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] arrow::error::ArrowError),

    #[error("PDF parsing error: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("CSV file '{0}' is empty")]
    EmptyCsv(String),

    /// Column not read as UTF-8 text
    #[error("Column '{0}' could not be read as text")]
    ColumnNotText(String),

    #[error("Unsupported report file '{0}', expected a .csv or .pdf file")]
    UnsupportedFormat(String),
}
