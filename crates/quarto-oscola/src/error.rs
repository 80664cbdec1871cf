//! Error types for citation label formatting.
//!
//! Copyright (c) 2025 Posit, PBC

use thiserror::Error;

/// Errors that abort formatting of a single entry.
///
/// Absent fields are never errors; they render as placeholder sentinels.
#[derive(Debug, Error)]
pub enum OscolaError {
    /// A date field did not match `YYYY-MM-DD`.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// A month code is not one of the twelve three-letter abbreviations.
    #[error("Unknown month '{label}'")]
    UnknownMonth { label: String },

    /// A numeric field (day, edition) is not a whole number.
    #[error("Field '{field}' is not a whole number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// The entry matches none of the citation shapes its formatter knows.
    #[error("No citation shape for {entry_type} entry: {reason}")]
    UnsupportedCitationShape {
        entry_type: String,
        reason: String,
    },

    /// A formatter or label referenced a field missing from the format entry.
    #[error("Field '{field}' is not defined")]
    MissingField { field: String },

    /// Formatter options could not be parsed.
    #[error("Invalid formatter configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for citation formatting.
pub type Result<T> = std::result::Result<T, OscolaError>;
