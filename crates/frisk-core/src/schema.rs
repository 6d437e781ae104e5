//! Fixed layout of a stop-and-frisk data row.
//!
//! Every data line is split on [`DELIMITER`] and the seven consumed fields are
//! read from the zero-indexed positions in [`columns`]. None of these values
//! are configurable.

use crate::error::{FriskError, Result};
use crate::models::Record;

/// Field separator for every line, header included.
pub const DELIMITER: char = ',';

/// Raw value that marks the arrested / frisked flags as set.
pub const FLAG_TOKEN: &str = "Y";

/// Zero-indexed positions of the consumed fields.
pub mod columns {
    pub const YEAR: usize = 0;
    pub const DESCRIPTION: usize = 2;
    pub const ARRESTED: usize = 13;
    pub const FRISKED: usize = 16;
    pub const GENDER: usize = 52;
    pub const RACE: usize = 66;
    pub const LOCATION: usize = 71;
}

/// Minimum number of fields a data row must split into.
pub const MIN_FIELDS: usize = columns::LOCATION + 1;

/// A data row reduced to its year and the [`Record`] it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub year: i32,
    pub record: Record,
}

// ── RowParser ─────────────────────────────────────────────────────────────────

/// Turns one delimited data line into a [`ParsedRow`].
pub struct RowParser;

impl RowParser {
    /// Parse `line`, which sits at 1-based physical line `line_no`.
    ///
    /// Fails with [`FriskError::MalformedRow`] when the line splits into fewer
    /// than [`MIN_FIELDS`] fields or the year field is not an integer.
    pub fn parse(line: &str, line_no: usize) -> Result<ParsedRow> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() < MIN_FIELDS {
            return Err(FriskError::MalformedRow {
                line: line_no,
                reason: format!(
                    "expected at least {} fields, found {}",
                    MIN_FIELDS,
                    fields.len()
                ),
            });
        }

        let raw_year = fields[columns::YEAR];
        let year = raw_year
            .parse::<i32>()
            .map_err(|e| FriskError::MalformedRow {
                line: line_no,
                reason: format!("invalid year {:?}: {}", raw_year, e),
            })?;

        let record = Record::new(
            fields[columns::DESCRIPTION],
            Self::parse_flag(fields[columns::ARRESTED]),
            Self::parse_flag(fields[columns::FRISKED]),
            fields[columns::GENDER],
            fields[columns::RACE],
            fields[columns::LOCATION],
        );

        Ok(ParsedRow { year, record })
    }

    /// `true` only for an exact [`FLAG_TOKEN`]; anything else, including an
    /// empty field, is `false`.
    pub fn parse_flag(raw: &str) -> bool {
        raw == FLAG_TOKEN
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
