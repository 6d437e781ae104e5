use anyhow::{bail, Result};
use frisk_data::Database;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name onto a `tracing` filter directive.
///
/// Unrecognised names are passed through unchanged and may still fail to
/// parse, in which case [`setup_logging`] falls back to `"info"`.
pub fn filter_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber, writing to stderr so report
/// output on stdout stays clean.
pub fn setup_logging(log_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Year selection ─────────────────────────────────────────────────────────────

/// The year a report should cover: the requested one, or else the earliest
/// loaded year.
pub fn resolve_year(requested: Option<i32>, db: &Database) -> Result<i32> {
    if let Some(year) = requested {
        return Ok(year);
    }
    match db.years().first() {
        Some(&year) => Ok(year),
        None => bail!("no records loaded; pass --year explicitly"),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
