//! Line codec for the `|`-delimited record files.
//!
//! # Responsibility
//! - Encode one record as one line and decode it back.
//! - Reject lines that are too short to hold a record.
//!
//! # Invariants
//! - Encoding is a pure transform with a fixed field order per entity.
//! - Decoding checks field count, ids and dates only; other content is
//!   accepted as-is (unparsable experience becomes 0).
//! - Fields are not escaped. A value containing `|` will not round-trip.

mod records;

use crate::model::entity::EntityKind;
use chrono::{NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use records::parse_date;

pub const FIELD_DELIMITER: char = '|';
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why one line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    TooFewFields { expected: usize, found: usize },
    InvalidId(String),
    InvalidDate(String),
}

impl DecodeError {
    /// Stable error code for logs. Carries no field content.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooFewFields { .. } => "too_few_fields",
            Self::InvalidId(_) => "invalid_id",
            Self::InvalidDate(_) => "invalid_date",
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewFields { expected, found } => {
                write!(f, "expected at least {expected} fields, found {found}")
            }
            Self::InvalidId(value) => write!(f, "invalid identifier `{value}`"),
            Self::InvalidDate(value) => write!(f, "invalid date `{value}`"),
        }
    }
}

impl Error for DecodeError {}

/// A skipped line reported by a store load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub entity: EntityKind,
    /// 1-based line number in the backing file.
    pub line_number: usize,
    pub error: DecodeError,
}

impl Display for ParseFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} line {}: {}",
            self.entity.file_name(),
            self.line_number,
            self.error
        )
    }
}

impl Error for ParseFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

/// Conversion between a record and its persisted line.
pub trait LineCodec: Sized {
    /// Entity family this record belongs to.
    const KIND: EntityKind;
    /// Minimum number of fields a decodable line must have.
    const MIN_FIELDS: usize;

    /// Field values in file order, before joining.
    fn to_fields(&self) -> Vec<String>;

    /// Builds a record from a field slice already checked against
    /// `MIN_FIELDS`.
    fn from_fields(fields: &[&str]) -> Result<Self, DecodeError>;

    fn encode_line(&self) -> String {
        self.to_fields().join(FIELD_DELIMITER.to_string().as_str())
    }

    fn decode_line(line: &str) -> Result<Self, DecodeError> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() < Self::MIN_FIELDS {
            return Err(DecodeError::TooFewFields {
                expected: Self::MIN_FIELDS,
                found: fields.len(),
            });
        }
        Self::from_fields(&fields)
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date_text(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    // Older files carried a time component; keep the date part.
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
}
