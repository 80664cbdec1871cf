//! Read-only lookup tables shared by every formatter.
//!
//! Copyright (c) 2025 Posit, PBC

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Journal names with a house abbreviation.
///
/// Names missing from this table are printed as given.
pub static JOURNAL_ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Crime, Law and Social Change", "CL&SC"),
        ("New York Law School Law Review", "N.Y.U. L. Rev."),
        ("Utrecht Law Review", "Utrecht L Rev"),
    ])
});

/// BibTeX month macros, keyed by their uppercase spelling.
pub static MONTH_CODES: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("JAN", 1),
        ("FEB", 2),
        ("MAR", 3),
        ("APR", 4),
        ("MAY", 5),
        ("JUN", 6),
        ("JUL", 7),
        ("AUG", 8),
        ("SEP", 9),
        ("OCT", 10),
        ("NOV", 11),
        ("DEC", 12),
    ])
});

/// Last-digit suffixes that differ from "th".
pub const ORDINAL_SUFFIXES: [(i64, &str); 3] = [(1, "st"), (2, "nd"), (3, "rd")];

/// Suffix for every digit not in [`ORDINAL_SUFFIXES`].
pub const DEFAULT_ORDINAL_SUFFIX: &str = "th";
