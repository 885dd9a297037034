//! CSV import pipeline
//!
//! Reads agency spreadsheets exported as CSV, turns each record into a JSON
//! row keyed by header, then rewrites the enum columns to canonical tokens.
//! The result is an [`ImportReport`] that carries the cleaned rows together
//! with a per-row list of values that could not be matched.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use super::mappings::{client_enum_mappings, property_enum_mappings};
use super::{normalize_row, EnumMapping};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Which schema an import targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Property,
    Client,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Property => "property",
            EntityKind::Client => "client",
        }
    }

    pub fn mappings(&self) -> &'static [(&'static str, &'static EnumMapping)] {
        match self {
            EntityKind::Property => property_enum_mappings(),
            EntityKind::Client => client_enum_mappings(),
        }
    }
}

/// One row that had at least one unmatched enum value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowReport {
    /// 1-based data row number, header excluded
    pub row: usize,
    pub unmatched: Vec<String>,
}

/// Outcome of normalizing a batch of import rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub report_id: String,
    pub entity: EntityKind,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub flagged_count: usize,
    pub flagged: Vec<RowReport>,
    pub rows: Vec<Map<String, Value>>,
}

/// Parses CSV into JSON rows keyed by the header line.
///
/// Cells are trimmed by the reader. Empty cells become `null`, numeric cells
/// become JSON numbers, everything else stays a string. Records shorter than
/// the header simply omit the trailing keys.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Map<String, Value>>, ImportError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let mut row = Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            if header.is_empty() {
                continue;
            }
            row.insert(header.to_string(), cell_value(cell));
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Zero-padded cells (postcodes, phone numbers) must survive as strings,
/// so only unambiguous numerals are coerced.
fn cell_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    let zero_padded = raw.len() > 1 && raw.starts_with('0') && !raw.starts_with("0.");
    if !zero_padded && !raw.starts_with('+') {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Number(n.into());
        }
        if let Ok(f) = raw.parse::<f64>() {
            if let Some(n) = serde_json::Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }
    Value::String(raw.to_string())
}

/// Rewrites the enum columns of already-parsed rows and builds the report.
pub fn normalize_rows(entity: EntityKind, mut rows: Vec<Map<String, Value>>) -> ImportReport {
    let mut flagged = Vec::new();

    for (index, row) in rows.iter_mut().enumerate() {
        let unmatched = normalize_row(row, entity.mappings());
        if !unmatched.is_empty() {
            flagged.push(RowReport {
                row: index + 1,
                unmatched,
            });
        }
    }

    tracing::info!(
        entity = entity.as_str(),
        total = rows.len(),
        flagged = flagged.len(),
        "Normalized import rows"
    );

    ImportReport {
        report_id: Uuid::new_v4().to_string(),
        entity,
        generated_at: Utc::now(),
        total: rows.len(),
        flagged_count: flagged.len(),
        flagged,
        rows,
    }
}

/// End-to-end CSV import: parse, normalize, report.
pub fn import_csv<R: Read>(entity: EntityKind, reader: R) -> Result<ImportReport, ImportError> {
    let rows = read_rows(reader)?;
    Ok(normalize_rows(entity, rows))
}

pub fn import_csv_path(entity: EntityKind, path: &Path) -> Result<ImportReport, ImportError> {
    let file = File::open(path)?;
    import_csv(entity, file)
}
