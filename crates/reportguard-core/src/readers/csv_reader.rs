//! CSV extraction.
//!
//! The file is read with the Arrow CSV reader using an all-UTF-8 schema, then turned
//! into rows. A column whose every non-missing cell parses as a number is read as
//! numeric (integer when possible), anything else stays text. Empty cells, cells absent
//! from a short row and the usual NA markers become [`Value::Missing`], as do numbers
//! that parse as NaN or infinity.

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, StringArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};
use indexmap::IndexMap;

use crate::errors::ExtractionError;
use crate::types::{Dataset, Value};

const BATCH_SIZE: usize = 8_192;

/// Cell contents read as missing values.
const NA_MARKERS: [&str; 8] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "#N/A"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

struct RawColumn {
    name: String,
    cells: Vec<Option<String>>,
}

/// Read a CSV file with a header line into a [`Dataset`].
pub fn read_csv(path: impl AsRef<Path>) -> Result<Dataset, ExtractionError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let schema = utf8_schema(&mut file)?;
    if schema.fields().is_empty() {
        return Err(ExtractionError::EmptyCsv(path.display().to_string()));
    }
    file.seek(SeekFrom::Start(0))?;

    let mut columns: Vec<RawColumn> = schema
        .fields()
        .iter()
        .map(|f| RawColumn {
            name: f.name().clone(),
            cells: Vec::new(),
        })
        .collect();

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .with_truncated_rows(true)
        .build(BufReader::new(file))?;

    for batch in reader {
        let batch = batch?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let array = batch
                .column(idx)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| ExtractionError::ColumnNotText(column.name.clone()))?;
            column
                .cells
                .extend(array.iter().map(|cell| cell.map(str::to_string)));
        }
    }

    Ok(into_rows(columns))
}

/// Header names with every column typed as nullable UTF-8.
fn utf8_schema(file: &mut File) -> Result<Schema, ExtractionError> {
    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(BufReader::new(file), Some(0))?;
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name().trim(), DataType::Utf8, true))
        .collect();
    Ok(Schema::new(fields))
}

fn into_rows(columns: Vec<RawColumn>) -> Dataset {
    let n_rows = columns.first().map(|c| c.cells.len()).unwrap_or(0);
    let kinds: Vec<ColumnKind> = columns.iter().map(|c| column_kind(&c.cells)).collect();

    (0..n_rows)
        .map(|row_idx| {
            let mut row = IndexMap::with_capacity(columns.len());
            for (column, kind) in columns.iter().zip(&kinds) {
                let cell = column.cells[row_idx].as_deref();
                row.insert(column.name.clone(), parse_cell(cell, *kind));
            }
            row
        })
        .collect()
}

fn is_na(cell: Option<&str>) -> bool {
    cell.is_none_or(|s| NA_MARKERS.contains(&s))
}

fn column_kind(cells: &[Option<String>]) -> ColumnKind {
    let mut kind = ColumnKind::Integer;
    for cell in cells.iter().map(|c| c.as_deref()) {
        if is_na(cell) {
            continue;
        }
        let cell = cell.unwrap_or_default();
        if kind == ColumnKind::Integer && cell.parse::<i64>().is_ok() {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(number) if number.is_finite() => kind = ColumnKind::Float,
            // "NAN", "inf" and friends count as missing
            Ok(_) => {}
            Err(_) => return ColumnKind::Text,
        }
    }
    kind
}

fn parse_cell(cell: Option<&str>, kind: ColumnKind) -> Value {
    let raw = match cell {
        Some(raw) if !is_na(cell) => raw,
        _ => return Value::Missing,
    };
    match kind {
        ColumnKind::Integer => raw.parse().map(Value::Integer).unwrap_or(Value::Missing),
        ColumnKind::Float => match raw.parse::<f64>() {
            Ok(number) if number.is_finite() => Value::Float(number),
            _ => Value::Missing,
        },
        ColumnKind::Text => Value::Text(raw.to_string()),
    }
}
