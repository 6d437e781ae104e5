//! Data layer for stop-and-frisk analysis.
//!
//! Reads the CSV source, groups records into year buckets and answers the
//! per-year analytical queries, optionally bundled into reports.

pub mod database;
pub mod queries;
pub mod reader;
pub mod report;

#[cfg(test)]
mod fixtures;

pub use database::Database;
pub use frisk_core as core;
