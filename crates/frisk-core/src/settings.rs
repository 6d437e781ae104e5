use clap::Parser;
use std::path::PathBuf;

use crate::error::{FriskError, Result};
use crate::models::codes;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Yearly analysis of NYPD stop-and-frisk records
#[derive(Parser, Debug, Clone)]
#[command(
    name = "stop-frisk",
    about = "Yearly analysis of NYPD stop-and-frisk records",
    version
)]
pub struct Settings {
    /// Stop-and-frisk CSV file (first line is a header)
    pub file: PathBuf,

    /// Report to produce
    #[arg(long, default_value = "summary", value_parser = ["summary", "population", "frisked", "gender", "crime", "borough", "years"])]
    pub report: String,

    /// Year to report on (defaults to the earliest year in the file)
    #[arg(long)]
    pub year: Option<i32>,

    /// Race code for the population report
    #[arg(long, default_value = codes::BLACK)]
    pub race: String,

    /// Crime description substring for the crime report
    #[arg(long)]
    pub crime: Option<String>,

    /// Second year for the crime report (defaults to --year)
    #[arg(long)]
    pub compare_year: Option<i32>,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let settings = Settings::parse_from(args);
        settings.validate()?;
        Ok(settings.resolve())
    }

    /// `--debug` overrides the log level.
    fn resolve(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.report == "crime" && self.crime.as_deref().map_or(true, str::is_empty) {
            return Err(FriskError::Config(
                "the crime report requires a non-empty --crime".to_string(),
            ));
        }
        Ok(())
    }

    pub fn wants_json(&self) -> bool {
        self.format == "json"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::load_from_args(["stop-frisk", "sqf.csv"]).unwrap();

        assert_eq!(settings.file, PathBuf::from("sqf.csv"));
        assert_eq!(settings.report, "summary");
        assert!(settings.year.is_none());
        assert_eq!(settings.race, "B");
        assert!(settings.crime.is_none());
        assert!(settings.compare_year.is_none());
        assert_eq!(settings.format, "text");
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
        assert!(!settings.wants_json());
    }

    #[test]
    fn test_settings_cli_crime_report() {
        let settings = Settings::load_from_args([
            "stop-frisk",
            "sqf.csv",
            "--report",
            "crime",
            "--crime",
            "ROBBERY",
            "--year",
            "2011",
            "--compare-year",
            "2012",
        ])
        .unwrap();

        assert_eq!(settings.report, "crime");
        assert_eq!(settings.crime.as_deref(), Some("ROBBERY"));
        assert_eq!(settings.year, Some(2011));
        assert_eq!(settings.compare_year, Some(2012));
    }

    #[test]
    fn test_settings_crime_report_requires_description() {
        let err = Settings::load_from_args(["stop-frisk", "sqf.csv", "--report", "crime"])
            .unwrap_err();
        assert!(matches!(err, FriskError::Config(_)));

        let err = Settings::load_from_args([
            "stop-frisk",
            "sqf.csv",
            "--report",
            "crime",
            "--crime",
            "",
        ])
        .unwrap_err();
        assert!(matches!(err, FriskError::Config(_)));
    }

    #[test]
    fn test_settings_debug_overrides_log_level() {
        let settings =
            Settings::load_from_args(["stop-frisk", "sqf.csv", "--log-level", "ERROR", "--debug"])
                .unwrap();
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_settings_json_format() {
        let settings =
            Settings::load_from_args(["stop-frisk", "sqf.csv", "--format", "json"]).unwrap();
        assert!(settings.wants_json());
    }

    #[test]
    fn test_settings_rejects_unknown_report() {
        let result = Settings::try_parse_from(["stop-frisk", "sqf.csv", "--report", "weekly"]);
        assert!(result.is_err());
    }
}
