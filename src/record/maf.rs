use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::{Locatable, Record, CHROMOSOME, END_POSITION, START_POSITION};

/// Separator between columns of a data line.
pub const COLUMN_SEPARATOR: char = '\t';

/// Errors raised while building a [`MafRecord`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The number of values differs from the number of columns.
    #[error("Expected {expected} columns but found {found}")]
    ColumnCountMismatch {
        /// Number of declared columns
        expected: usize,
        /// Number of values supplied
        found: usize,
    },

    /// A coordinate column holds something other than an integer.
    #[error("Invalid value '{value}' for column {column}")]
    InvalidCoordinate {
        /// Column name
        column: &'static str,
        /// Offending value
        value: String,
    },
}

/// A single annotation row with values addressed by column name.
///
/// Column names are shared between the records of one file, and cells are
/// shared between clones of a record. Empty cells are stored as `None`, and a
/// record without a `Chromosome` value has a null chromosome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MafRecord {
    columns: Arc<[String]>,
    values: Arc<[Option<String>]>,
    chromosome: Option<usize>,
    start: Option<i64>,
    end: Option<i64>,
}

impl MafRecord {
    /// Build a record from column names and matching values.
    pub fn new(columns: Arc<[String]>, values: Vec<Option<String>>) -> Result<Self, RecordError> {
        if columns.len() != values.len() {
            return Err(RecordError::ColumnCountMismatch {
                expected: columns.len(),
                found: values.len(),
            });
        }

        let position = |name: &str| columns.iter().position(|column| column == name);
        let chromosome = position(CHROMOSOME);
        let start = parse_coordinate(START_POSITION, position(START_POSITION), &values)?;
        let end = parse_coordinate(END_POSITION, position(END_POSITION), &values)?;

        Ok(Self {
            columns,
            values: values.into(),
            chromosome,
            start,
            end,
        })
    }

    /// Parse one tab-delimited data line against the given columns.
    pub fn from_line(columns: Arc<[String]>, line: &str) -> Result<Self, RecordError> {
        let values = line
            .trim_end_matches(['\r', '\n'])
            .split(COLUMN_SEPARATOR)
            .map(|value| (!value.is_empty()).then(|| value.to_string()))
            .collect();
        Self::new(columns, values)
    }

    /// Column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values, in column order.
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_coordinate(
    column: &'static str,
    idx: Option<usize>,
    values: &[Option<String>],
) -> Result<Option<i64>, RecordError> {
    let Some(value) = idx.and_then(|idx| values[idx].as_deref()) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| RecordError::InvalidCoordinate {
            column,
            value: value.to_string(),
        })
}

impl Locatable for MafRecord {
    fn chromosome(&self) -> Option<&str> {
        self.chromosome.and_then(|idx| self.values[idx].as_deref())
    }

    fn start(&self) -> Option<i64> {
        self.start
    }

    fn end(&self) -> Option<i64> {
        self.end
    }
}

impl Record for MafRecord {
    fn value(&self, field: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|column| column == field)
            .and_then(|idx| self.values[idx].as_deref())
    }

    fn as_locatable(&self) -> Option<&dyn Locatable> {
        Some(self)
    }
}

impl fmt::Display for MafRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, "{COLUMN_SEPARATOR}")?;
            }
            f.write_str(value.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }
}
