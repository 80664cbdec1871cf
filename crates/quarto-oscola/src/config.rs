//! Formatter options.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The defaults reproduce the established output byte for byte, including
//! its known quirks. Each quirk has a switch so callers can opt into the
//! corrected behaviour without the default output changing underneath them.
//!
//! ```toml
//! book-first-page = "format-entry"
//! ordinal-rule = "english"
//! failure-policy = "abort"
//!
//! [abbreviations]
//! "Modern Law Review" = "MLR"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::tables::JOURNAL_ABBREVIATIONS;

/// Where the book formatter reads `pages` from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookFirstPageSource {
    /// The raw entry. A book with `pages = "12-30"` is cited at page 12.
    #[default]
    SourceEntry,
    /// The seeded format entry, which has no `pages` key, so no page is printed.
    FormatEntry,
}

/// How ordinal suffixes are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrdinalRule {
    /// Last decimal digit only: 1st, 2nd, 3rd, 11st, 12nd, 13rd.
    #[default]
    LastDigit,
    /// English usage: 11th, 12th and 13th (and 111th, ...) take "th".
    English,
}

/// What the batch driver does after an entry fails to format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Record the failure and move on to the next entry.
    #[default]
    Continue,
    /// Stop and return the error.
    Abort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormatterOptions {
    pub book_first_page: BookFirstPageSource,
    pub ordinal_rule: OrdinalRule,
    pub failure_policy: FailurePolicy,
    /// Journal abbreviations consulted before the built-in table.
    pub abbreviations: BTreeMap<String, String>,
}

impl FormatterOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_abbreviation(
        mut self,
        journal: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        self.abbreviations
            .insert(journal.into(), abbreviation.into());
        self
    }

    /// Abbreviated form of `journal`, if one is known.
    pub fn journal_abbreviation(&self, journal: &str) -> Option<&str> {
        self.abbreviations
            .get(journal)
            .map(String::as_str)
            .or_else(|| JOURNAL_ABBREVIATIONS.get(journal).copied())
    }
}
