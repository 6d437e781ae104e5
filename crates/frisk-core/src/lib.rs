//! Core types for stop-and-frisk analysis.
//!
//! Holds the record and year-bucket models, the fixed row layout, the error
//! taxonomy, number formatting and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod schema;
pub mod settings;

pub use error::{FriskError, Result};
