//! Serialisable report bundles built from the query layer.
//!
//! Each report pairs query results with enough context (year, filter values,
//! generation time) to be printed or emitted as JSON by a caller.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use frisk_core::error::Result;
use frisk_core::models::{Borough, Record};

use crate::database::Database;
use crate::queries::{FriskArrestRates, GenderBias};

// ── Public types ──────────────────────────────────────────────────────────────

/// Number of stops recorded in one borough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoroughCount {
    pub borough: Borough,
    pub stops: usize,
}

/// Number of records loaded for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub records: usize,
}

/// Every per-year query bundled together.
#[derive(Debug, Clone, Serialize)]
pub struct YearReport {
    pub year: i32,
    pub records: usize,
    pub rates: FriskArrestRates,
    pub gender_bias: GenderBias,
    pub borough_counts: Vec<BoroughCount>,
    pub most_common_borough: Borough,
    /// Stop count per race code, keyed in code order.
    pub stops_by_race: BTreeMap<String, usize>,
    /// RFC 3339 timestamp when this report was generated.
    pub generated_at: String,
}

/// Share of stops describing one crime in two years, and the change between.
#[derive(Debug, Clone, Serialize)]
pub struct CrimeTrend {
    pub description: String,
    pub from_year: i32,
    pub to_year: i32,
    pub from_percent: f64,
    pub to_percent: f64,
    /// Percentage-point change from `from_year` to `to_year`.
    pub change_points: f64,
}

/// Stops of one race code in one year.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationReport<'a> {
    pub year: i32,
    pub race: String,
    pub count: usize,
    pub records: Vec<&'a Record>,
}

// ── Builders ──────────────────────────────────────────────────────────────────

impl YearReport {
    /// Run every per-year query for `year`.
    pub fn build(db: &Database, year: i32) -> Result<Self> {
        let bucket = db.require_bucket(year)?;

        let mut stops_by_race: BTreeMap<String, usize> = BTreeMap::new();
        for record in bucket.records() {
            *stops_by_race.entry(record.race.clone()).or_default() += 1;
        }

        let borough_counts = db
            .borough_counts(year)?
            .into_iter()
            .map(|(borough, stops)| BoroughCount { borough, stops })
            .collect();

        Ok(Self {
            year,
            records: bucket.len(),
            rates: db.frisked_vs_arrested(year)?,
            gender_bias: db.gender_bias(year)?,
            borough_counts,
            most_common_borough: db.most_common_borough(year)?,
            stops_by_race,
            generated_at: Utc::now().to_rfc3339(),
        })
    }
}

impl CrimeTrend {
    pub fn build(db: &Database, description: &str, from_year: i32, to_year: i32) -> Result<Self> {
        Ok(Self {
            description: description.to_string(),
            from_year,
            to_year,
            from_percent: db.crime_share(description, from_year)?,
            to_percent: db.crime_share(description, to_year)?,
            change_points: db.crime_increase(description, from_year, to_year)?,
        })
    }
}

impl<'a> PopulationReport<'a> {
    pub fn build(db: &'a Database, year: i32, race: &str) -> Self {
        let records = db.population_stopped(year, race);
        Self {
            year,
            race: race.to_string(),
            count: records.len(),
            records,
        }
    }
}

/// Record count per loaded year, ascending.
pub fn year_counts(db: &Database) -> Vec<YearCount> {
    db.buckets()
        .into_iter()
        .map(|b| YearCount {
            year: b.year(),
            records: b.len(),
        })
        .collect()
}

/// Pretty-printed JSON for any report.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
