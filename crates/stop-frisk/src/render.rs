//! Plain-text rendering of reports for the terminal.

use std::fmt::Write;

use frisk_core::formatting::{format_count, format_percent, format_point_delta};
use frisk_data::queries::GenderBias;
use frisk_data::report::{CrimeTrend, PopulationReport, YearCount, YearReport};

const DECIMALS: u32 = 2;

pub fn year_report(report: &YearReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Year {}: {} stops", report.year, format_count(report.records));
    let _ = writeln!(
        out,
        "  Frisked:  {}",
        format_percent(report.rates.frisked_percent, DECIMALS)
    );
    let _ = writeln!(
        out,
        "  Arrested: {}",
        format_percent(report.rates.arrested_percent, DECIMALS)
    );
    let _ = writeln!(out, "  Most common borough: {}", report.most_common_borough);
    for count in &report.borough_counts {
        let _ = writeln!(out, "    {:<14}{:>10}", count.borough.name(), format_count(count.stops));
    }
    let _ = writeln!(out, "  Stops by race:");
    for (race, stops) in &report.stops_by_race {
        let label = if race.is_empty() { "(blank)" } else { race.as_str() };
        let _ = writeln!(out, "    {:<14}{:>10}", label, format_count(*stops));
    }
    out.push_str(&gender_bias(&report.gender_bias));
    out
}

pub fn gender_bias(bias: &GenderBias) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Gender bias:  {:>10}{:>10}{:>10}", "Black", "White", "Total");
    for (label, row) in [("Female", bias.female), ("Male", bias.male)] {
        let _ = writeln!(
            out,
            "    {:<10}{:>10}{:>10}{:>10}",
            label,
            format_percent(row[GenderBias::BLACK], DECIMALS),
            format_percent(row[GenderBias::WHITE], DECIMALS),
            format_percent(row[GenderBias::TOTAL], DECIMALS),
        );
    }
    out
}

pub fn crime_trend(trend: &CrimeTrend) -> String {
    format!(
        "\"{}\": {} in {} -> {} in {} ({})\n",
        trend.description,
        format_percent(trend.from_percent, DECIMALS),
        trend.from_year,
        format_percent(trend.to_percent, DECIMALS),
        trend.to_year,
        format_point_delta(trend.change_points, DECIMALS),
    )
}

pub fn population(report: &PopulationReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Year {}, race {}: {} stops",
        report.year,
        report.race,
        format_count(report.count)
    );
    for record in &report.records {
        let _ = writeln!(
            out,
            "  {:<30} {:<1} {:<14} frisked={} arrested={}",
            record.description, record.gender, record.location, record.frisked, record.arrested
        );
    }
    out
}

pub fn year_counts(counts: &[YearCount]) -> String {
    let mut out = String::new();
    for count in counts {
        let _ = writeln!(out, "{}  {:>10}", count.year, format_count(count.records));
    }
    out
}
