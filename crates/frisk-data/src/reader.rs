//! Stop-and-frisk CSV loading.
//!
//! Opens the source file, discards the header line and turns every remaining
//! line into a [`ParsedRow`]. Any row that cannot be parsed aborts the read;
//! nothing is skipped.

use std::io::BufRead;
use std::path::Path;

use frisk_core::error::{FriskError, Result};
use frisk_core::schema::{ParsedRow, RowParser};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every data row of the file at `path`, in file order.
///
/// Fails with [`FriskError::FileNotFound`] when `path` does not exist,
/// [`FriskError::FileRead`] on any other I/O failure and
/// [`FriskError::MalformedRow`] for the first row that does not parse.
pub fn read_rows(path: &Path) -> Result<Vec<ParsedRow>> {
    let file = std::fs::File::open(path).map_err(|e| open_error(path, e))?;
    let reader = std::io::BufReader::new(file);

    let mut rows: Vec<ParsedRow> = Vec::new();
    let mut lines = reader.lines();

    // Header line; an empty file simply has no rows.
    if let Some(header) = lines.next() {
        header.map_err(|e| read_error(path, e))?;
    }

    for (idx, line_result) in lines.enumerate() {
        let line = line_result.map_err(|e| read_error(path, e))?;
        // +2: enumerate starts at 0 and the header was line 1.
        rows.push(RowParser::parse(&line, idx + 2)?);
    }

    debug!("Read {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn open_error(path: &Path, source: std::io::Error) -> FriskError {
    if source.kind() == std::io::ErrorKind::NotFound {
        FriskError::FileNotFound(path.to_path_buf())
    } else {
        read_error(path, source)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> FriskError {
    FriskError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
