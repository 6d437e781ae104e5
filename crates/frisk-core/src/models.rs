use serde::{Deserialize, Serialize};
use std::fmt;

/// Race and gender codes consumed by the queries.
///
/// The source uses single-character codes; any other code is carried through
/// on the [`Record`] but ignored by the bias tallies.
pub mod codes {
    pub const BLACK: &str = "B";
    pub const WHITE: &str = "W";
    pub const FEMALE: &str = "F";
    pub const MALE: &str = "M";
}

/// One stop-and-frisk incident read from a data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Free-text description of the suspected crime.
    pub description: String,
    /// Whether the stop ended in an arrest.
    pub arrested: bool,
    /// Whether the person stopped was frisked.
    pub frisked: bool,
    /// Single-character gender code (`"M"`, `"F"`, ...).
    pub gender: String,
    /// Single-character race code (`"B"`, `"W"`, ...).
    pub race: String,
    /// Free-text location, expected to hold a borough name.
    pub location: String,
}

impl Record {
    pub fn new(
        description: impl Into<String>,
        arrested: bool,
        frisked: bool,
        gender: impl Into<String>,
        race: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            arrested,
            frisked,
            gender: gender.into(),
            race: race.into(),
            location: location.into(),
        }
    }

    /// Whether `description` contains `needle` (case-sensitive, unanchored).
    pub fn describes(&self, needle: &str) -> bool {
        self.description.contains(needle)
    }

    /// Borough this record's location names, if any.
    pub fn borough(&self) -> Option<Borough> {
        Borough::ALL.into_iter().find(|b| b.matches(&self.location))
    }
}

/// All records for a single year, kept in file order.
///
/// Records can only be appended; a bucket never shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBucket {
    year: i32,
    records: Vec<Record>,
}

impl YearBucket {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            records: Vec::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records satisfying `pred`.
    pub fn count_where(&self, pred: impl Fn(&Record) -> bool) -> usize {
        self.records.iter().filter(|r| pred(r)).count()
    }
}

/// The five New York City boroughs used for location tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Borough {
    Brooklyn,
    Manhattan,
    Bronx,
    Queens,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// Fixed enumeration order. Ties in the borough tally resolve to the
    /// earliest entry.
    pub const ALL: [Borough; 5] = [
        Borough::Brooklyn,
        Borough::Manhattan,
        Borough::Bronx,
        Borough::Queens,
        Borough::StatenIsland,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Borough::Brooklyn => "Brooklyn",
            Borough::Manhattan => "Manhattan",
            Borough::Bronx => "Bronx",
            Borough::Queens => "Queens",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /// Case-insensitive whole-string match against a location field.
    pub fn matches(self, location: &str) -> bool {
        location.eq_ignore_ascii_case(self.name())
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
