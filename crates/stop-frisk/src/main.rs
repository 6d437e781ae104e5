mod bootstrap;
mod render;

use anyhow::{Context, Result};
use frisk_core::formatting::format_percent;
use frisk_core::settings::Settings;
use frisk_data::report::{self, CrimeTrend, PopulationReport, YearReport};
use frisk_data::Database;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("stop-frisk v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Report: {}, format: {}", settings.report, settings.format);

    let db = Database::from_path(&settings.file)
        .with_context(|| format!("loading {}", settings.file.display()))?;

    let output = match settings.report.as_str() {
        "years" => {
            let counts = report::year_counts(&db);
            if settings.wants_json() {
                report::to_json(&counts)?
            } else {
                render::year_counts(&counts)
            }
        }

        "population" => {
            let year = bootstrap::resolve_year(settings.year, &db)?;
            let population = PopulationReport::build(&db, year, &settings.race);
            if settings.wants_json() {
                report::to_json(&population)?
            } else {
                render::population(&population)
            }
        }

        "frisked" => {
            let year = bootstrap::resolve_year(settings.year, &db)?;
            let rates = db.frisked_vs_arrested(year)?;
            if settings.wants_json() {
                report::to_json(&rates)?
            } else {
                format!(
                    "Year {}: frisked {}, arrested {}\n",
                    year,
                    format_percent(rates.frisked_percent, 2),
                    format_percent(rates.arrested_percent, 2),
                )
            }
        }

        "gender" => {
            let year = bootstrap::resolve_year(settings.year, &db)?;
            let bias = db.gender_bias(year)?;
            if settings.wants_json() {
                report::to_json(&bias)?
            } else {
                format!("Year {}\n{}", year, render::gender_bias(&bias))
            }
        }

        "crime" => {
            let from_year = bootstrap::resolve_year(settings.year, &db)?;
            let to_year = settings.compare_year.unwrap_or(from_year);
            // Settings validation guarantees a non-empty description here.
            let description = settings.crime.as_deref().unwrap_or_default();
            let trend = CrimeTrend::build(&db, description, from_year, to_year)?;
            if settings.wants_json() {
                report::to_json(&trend)?
            } else {
                render::crime_trend(&trend)
            }
        }

        "borough" => {
            let year = bootstrap::resolve_year(settings.year, &db)?;
            let borough = db.most_common_borough(year)?;
            if settings.wants_json() {
                report::to_json(&serde_json::json!({ "year": year, "borough": borough }))?
            } else {
                format!("Year {}: {}\n", year, borough)
            }
        }

        // "summary"
        _ => {
            let year = bootstrap::resolve_year(settings.year, &db)?;
            let summary = YearReport::build(&db, year)?;
            if settings.wants_json() {
                report::to_json(&summary)?
            } else {
                render::year_report(&summary)
            }
        }
    };

    print!("{}", output);
    if settings.wants_json() {
        println!();
    }

    Ok(())
}
