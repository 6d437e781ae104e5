//! Analytical queries over a loaded [`Database`].
//!
//! Every query is a read-only function of one or two year buckets. Queries
//! over a year with no bucket fail with [`FriskError::YearNotFound`], except
//! [`Database::population_stopped`] which yields an empty list.

use serde::{Deserialize, Serialize};

use frisk_core::error::{FriskError, Result};
use frisk_core::models::{codes, Borough, Record, YearBucket};

use crate::database::Database;

/// Each race's female/male split is scaled to at most this many points, so
/// the four base cells of a [`GenderBias`] table sum to at most 100.
pub const BIAS_WEIGHT: f64 = 50.0;

// ── Result types ──────────────────────────────────────────────────────────────

/// Share of a year's stops that involved a frisk and an arrest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FriskArrestRates {
    /// Percent of records with the frisked flag set, in `[0, 100]`.
    pub frisked_percent: f64,
    /// Percent of records with the arrested flag set, in `[0, 100]`.
    pub arrested_percent: f64,
}

/// Weighted gender split of Black and White stops for one year.
///
/// Each row is `[black, white, black + white]`. A race with no stops in the
/// year has no defined split; its column is `NaN`, and so is the row total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderBias {
    pub female: [f64; 3],
    pub male: [f64; 3],
}

impl GenderBias {
    pub const BLACK: usize = 0;
    pub const WHITE: usize = 1;
    pub const TOTAL: usize = 2;

    /// The table as `[female_row, male_row]`.
    pub fn rows(&self) -> [[f64; 3]; 2] {
        [self.female, self.male]
    }
}

#[derive(Debug, Default)]
struct RaceGenderTally {
    black: usize,
    black_female: usize,
    black_male: usize,
    white: usize,
    white_female: usize,
    white_male: usize,
}

impl RaceGenderTally {
    fn from_bucket(bucket: &YearBucket) -> Self {
        let mut tally = Self::default();
        for record in bucket.records() {
            let (total, female, male) = match record.race.as_str() {
                codes::BLACK => (
                    &mut tally.black,
                    &mut tally.black_female,
                    &mut tally.black_male,
                ),
                codes::WHITE => (
                    &mut tally.white,
                    &mut tally.white_female,
                    &mut tally.white_male,
                ),
                _ => continue,
            };
            *total += 1;
            match record.gender.as_str() {
                codes::FEMALE => *female += 1,
                codes::MALE => *male += 1,
                _ => {}
            }
        }
        tally
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl Database {
    /// Records for `year` whose race code equals `race` exactly, in file
    /// order. Empty when the year is absent or nothing matches.
    pub fn population_stopped(&self, year: i32, race: &str) -> Vec<&Record> {
        self.bucket(year)
            .map(|bucket| bucket.records().iter().filter(|r| r.race == race).collect())
            .unwrap_or_default()
    }

    /// Percent of `year`'s stops that were frisked and that ended in arrest.
    pub fn frisked_vs_arrested(&self, year: i32) -> Result<FriskArrestRates> {
        let bucket = self.require_bucket(year)?;
        Ok(FriskArrestRates {
            frisked_percent: percent_of(bucket, |r| r.frisked)?,
            arrested_percent: percent_of(bucket, |r| r.arrested)?,
        })
    }

    /// Gender split of Black and White stops in `year`, weighted by
    /// [`BIAS_WEIGHT`]. Records of any other race or gender code are ignored.
    pub fn gender_bias(&self, year: i32) -> Result<GenderBias> {
        let tally = RaceGenderTally::from_bucket(self.require_bucket(year)?);

        let black_female = weighted(tally.black_female, tally.black);
        let white_female = weighted(tally.white_female, tally.white);
        let black_male = weighted(tally.black_male, tally.black);
        let white_male = weighted(tally.white_male, tally.white);

        Ok(GenderBias {
            female: [black_female, white_female, black_female + white_female],
            male: [black_male, white_male, black_male + white_male],
        })
    }

    /// Percent of `year`'s stops whose description contains `description`.
    pub fn crime_share(&self, description: &str, year: i32) -> Result<f64> {
        percent_of(self.require_bucket(year)?, |r| r.describes(description))
    }

    /// Change in the share of stops describing `description` from `year1` to
    /// `year2`, in percentage points. Positive means the share grew.
    pub fn crime_increase(&self, description: &str, year1: i32, year2: i32) -> Result<f64> {
        let first = self.crime_share(description, year1)?;
        let second = self.crime_share(description, year2)?;

        let delta = (second - first).abs();
        Ok(if first > second { -delta } else { delta })
    }

    /// Stop count per borough for `year`, in [`Borough::ALL`] order.
    pub fn borough_counts(&self, year: i32) -> Result<[(Borough, usize); 5]> {
        let bucket = self.require_bucket(year)?;
        Ok(Borough::ALL.map(|b| (b, bucket.count_where(|r| b.matches(&r.location)))))
    }

    /// The borough with the most stops in `year`. Ties go to the earlier
    /// borough in [`Borough::ALL`], so a year with no borough matches at all
    /// yields [`Borough::Brooklyn`].
    pub fn most_common_borough(&self, year: i32) -> Result<Borough> {
        let counts = self.borough_counts(year)?;

        let (mut best, mut best_count) = counts[0];
        for &(borough, count) in &counts[1..] {
            if count > best_count {
                best = borough;
                best_count = count;
            }
        }
        Ok(best)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Percent of `bucket`'s records matching `pred`.
fn percent_of(bucket: &YearBucket, pred: impl Fn(&Record) -> bool) -> Result<f64> {
    if bucket.is_empty() {
        return Err(FriskError::DivisionUndefined(format!(
            "no records for year {}",
            bucket.year()
        )));
    }
    Ok(bucket.count_where(pred) as f64 / bucket.len() as f64 * 100.0)
}

/// `part / whole` scaled by [`BIAS_WEIGHT`]; `NaN` when `whole` is zero.
fn weighted(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * BIAS_WEIGHT
}

// ── Tests ─────────────────────────────────────────────────────────────────────
