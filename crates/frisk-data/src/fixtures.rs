//! Fixture CSV builders shared by the unit tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use frisk_core::schema::{columns, MIN_FIELDS};

pub(crate) const HEADER: &str = "year,pct,crimsusp,...";

/// A full-width data line with only the consumed fields set.
pub(crate) fn data_line(
    year: &str,
    description: &str,
    arrested: bool,
    frisked: bool,
    gender: &str,
    race: &str,
    location: &str,
) -> String {
    let mut fields = vec![""; MIN_FIELDS];
    fields[columns::YEAR] = year;
    fields[columns::DESCRIPTION] = description;
    fields[columns::ARRESTED] = if arrested { "Y" } else { "N" };
    fields[columns::FRISKED] = if frisked { "Y" } else { "N" };
    fields[columns::GENDER] = gender;
    fields[columns::RACE] = race;
    fields[columns::LOCATION] = location;
    fields.join(",")
}

/// Shorthand for a row where only race, gender and location matter.
pub(crate) fn person(year: &str, gender: &str, race: &str, location: &str) -> String {
    data_line(year, "ROBBERY", false, false, gender, race, location)
}

/// Write `HEADER` followed by `lines` to `dir/name`.
pub(crate) fn write_csv(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
