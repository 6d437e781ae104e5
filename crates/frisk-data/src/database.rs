//! Year-bucketed store of stop-and-frisk records.

use std::collections::HashMap;
use std::path::Path;

use frisk_core::error::{FriskError, Result};
use frisk_core::models::{Record, YearBucket};
use frisk_core::schema::ParsedRow;
use tracing::{debug, info, warn};

use crate::reader::read_rows;

/// All loaded records, grouped into one [`YearBucket`] per distinct year.
///
/// Populated by [`Database::load`] and read-only afterwards; every query takes
/// `&self`, so a loaded database can be shared freely between readers.
#[derive(Debug, Clone, Default)]
pub struct Database {
    years: HashMap<i32, YearBucket>,
}

impl Database {
    /// An empty database with no years.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database and [`load`](Self::load) `path` into it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut db = Self::new();
        db.load(path)?;
        Ok(db)
    }

    /// Load every data row of the CSV at `path`.
    ///
    /// The load is all-or-nothing: rows are grouped into a fresh set of
    /// buckets which replaces the current contents only once the whole file
    /// has parsed. On error the database is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let rows = match read_rows(path) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Load of {} rejected: {}", path.display(), e);
                return Err(e);
            }
        };

        let row_count = rows.len();
        let mut staged = Database::new();
        for ParsedRow { year, record } in rows {
            staged.insert(year, record);
        }

        debug!(
            "Grouped {} rows into {} year buckets",
            row_count,
            staged.years.len()
        );

        *self = staged;

        info!(
            "Loaded {} records for years {:?} from {}",
            self.total_records(),
            self.years(),
            path.display()
        );

        Ok(())
    }

    /// Append `record` to the bucket for `year`, creating the bucket the first
    /// time the year is seen.
    pub fn insert(&mut self, year: i32, record: Record) {
        self.years
            .entry(year)
            .or_insert_with(|| YearBucket::new(year))
            .add_record(record);
    }

    /// The bucket for `year`, if any record for that year was loaded.
    pub fn bucket(&self, year: i32) -> Option<&YearBucket> {
        self.years.get(&year)
    }

    /// Like [`bucket`](Self::bucket) but fails with
    /// [`FriskError::YearNotFound`] when the year is absent.
    pub fn require_bucket(&self, year: i32) -> Result<&YearBucket> {
        self.bucket(year).ok_or(FriskError::YearNotFound(year))
    }

    /// Loaded years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.years.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// All buckets, in ascending year order.
    pub fn buckets(&self) -> Vec<&YearBucket> {
        let mut buckets: Vec<&YearBucket> = self.years.values().collect();
        buckets.sort_unstable_by_key(|b| b.year());
        buckets
    }

    pub fn total_records(&self) -> usize {
        self.years.values().map(YearBucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{data_line, person, write_csv};
    use tempfile::TempDir;

    fn sample_lines() -> Vec<String> {
        vec![
            person("2012", "M", "B", "BROOKLYN"),
            person("2011", "F", "W", "QUEENS"),
            person("2012", "F", "B", "BRONX"),
            person("2010", "M", "Q", "MANHATTAN"),
            person("2012", "M", "W", "BROOKLYN"),
        ]
    }

    // ── load ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_record_counts_sum_to_data_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "sqf.csv", &sample_lines());

        let db = Database::from_path(&path).unwrap();
        assert_eq!(db.total_records(), 5);
        assert_eq!(
            db.buckets().iter().map(|b| b.len()).sum::<usize>(),
            sample_lines().len()
        );
    }

    #[test]
    fn test_load_one_bucket_per_year() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "sqf.csv", &sample_lines());

        let db = Database::from_path(&path).unwrap();
        assert_eq!(db.years(), vec![2010, 2011, 2012]);
        assert_eq!(db.bucket(2012).unwrap().len(), 3);
        assert_eq!(db.bucket(2011).unwrap().len(), 1);
        assert!(db
            .buckets()
            .iter()
            .all(|b| db.bucket(b.year()).map(YearBucket::year) == Some(b.year())));
    }

    #[test]
    fn test_load_bucket_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "sqf.csv", &sample_lines());

        let db = Database::from_path(&path).unwrap();
        let locations: Vec<&str> = db
            .bucket(2012)
            .unwrap()
            .records()
            .iter()
            .map(|r| r.location.as_str())
            .collect();
        assert_eq!(locations, vec!["BROOKLYN", "BRONX", "BROOKLYN"]);
    }

    #[test]
    fn test_load_missing_file() {
        let mut db = Database::new();
        let err = db.load("/tmp/does-not-exist-frisk-db-xyz.csv").unwrap_err();
        assert!(matches!(err, FriskError::FileNotFound(_)));
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_malformed_row_leaves_database_untouched() {
        let dir = TempDir::new().unwrap();
        let good = write_csv(dir.path(), "good.csv", &sample_lines());
        let bad = write_csv(
            dir.path(),
            "bad.csv",
            &[
                person("2013", "M", "B", "QUEENS"),
                data_line("twenty", "ROBBERY", false, false, "M", "B", "QUEENS"),
            ],
        );

        let mut db = Database::from_path(&good).unwrap();
        let err = db.load(&bad).unwrap_err();

        assert!(matches!(err, FriskError::MalformedRow { line: 3, .. }));
        assert_eq!(db.years(), vec![2010, 2011, 2012]);
        assert!(db.bucket(2013).is_none());
    }

    #[test]
    fn test_load_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let first = write_csv(dir.path(), "first.csv", &sample_lines());
        let second = write_csv(
            dir.path(),
            "second.csv",
            &[person("2013", "F", "W", "QUEENS")],
        );

        let mut db = Database::from_path(&first).unwrap();
        db.load(&second).unwrap();

        assert_eq!(db.years(), vec![2013]);
        assert_eq!(db.total_records(), 1);
    }

    #[test]
    fn test_load_header_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "empty.csv", &[]);

        let db = Database::from_path(&path).unwrap();
        assert!(db.is_empty());
        assert_eq!(db.total_records(), 0);
    }

    // ── insert / lookup ───────────────────────────────────────────────────────

    #[test]
    fn test_insert_creates_bucket_lazily() {
        let mut db = Database::new();
        assert!(db.bucket(2012).is_none());

        db.insert(2012, Record::new("ROBBERY", false, true, "M", "B", "QUEENS"));
        db.insert(2012, Record::new("ASSAULT", true, true, "F", "W", "BRONX"));

        let bucket = db.bucket(2012).unwrap();
        assert_eq!(bucket.year(), 2012);
        assert_eq!(bucket.len(), 2);
        assert_eq!(db.years(), vec![2012]);
    }

    #[test]
    fn test_require_bucket_missing_year() {
        let db = Database::new();
        let err = db.require_bucket(1999).unwrap_err();
        assert!(matches!(err, FriskError::YearNotFound(1999)));
    }
}
