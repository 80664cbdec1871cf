/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Dispatch from entry type tags to formatters.
//!
//! [`FormatterRegistry`] maps lowercase type tags to [`EntryFormatter`]s.
//! Entries whose type has no formatter are reported as unsupported rather
//! than failing, so a batch keeps going past them.
//!
//! # Example
//!
//! ```
//! use quarto_oscola::{Entry, EntryOutcome, FormatterRegistry};
//!
//! let registry = FormatterRegistry::default();
//! let entries = vec![
//!     Entry::new("Book")
//!         .with_field("author", "Doe")
//!         .with_field("title", "A Book")
//!         .with_field("publisher", "Acme")
//!         .with_field("year", "2019"),
//!     Entry::new("misc"),
//! ];
//!
//! let outcomes = registry.format_all(&entries).unwrap();
//! assert_eq!(outcomes[0].to_string(), r"Doe, \textit{A Book} (<EDITION>, Acme, 2019).");
//! assert!(matches!(outcomes[1], EntryOutcome::Unsupported { .. }));
//! ```

use std::fmt;

use crate::config::{FailurePolicy, FormatterOptions};
use crate::entry::Entry;
use crate::error::{OscolaError, Result};
use crate::formatters::{ArticleFormatter, BookFormatter, EntryFormatter, NewsArticleFormatter};

/// Result of formatting one entry in a batch.
#[derive(Debug)]
pub enum EntryOutcome {
    Formatted {
        key: Option<String>,
        label: String,
    },
    /// No formatter is registered for the entry's type.
    Unsupported {
        key: Option<String>,
        entry_type: String,
    },
    /// The formatter rejected the entry.
    Failed {
        key: Option<String>,
        error: OscolaError,
    },
}

impl EntryOutcome {
    pub fn key(&self) -> Option<&str> {
        match self {
            EntryOutcome::Formatted { key, .. }
            | EntryOutcome::Unsupported { key, .. }
            | EntryOutcome::Failed { key, .. } => key.as_deref(),
        }
    }

    /// The citation, if the entry was formatted.
    pub fn label(&self) -> Option<&str> {
        match self {
            EntryOutcome::Formatted { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    pub fn is_formatted(&self) -> bool {
        matches!(self, EntryOutcome::Formatted { .. })
    }
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryOutcome::Formatted { label, .. } => write!(f, "{}", label),
            EntryOutcome::Unsupported { entry_type, .. } => {
                write!(f, "Unsupported entry type {}", entry_type)
            }
            EntryOutcome::Failed { key, error } => match key {
                Some(key) => write!(f, "Failed to format '{}': {}", key, error),
                None => write!(f, "Failed to format entry: {}", error),
            },
        }
    }
}

/// Formatters keyed by entry type, plus the options they run with.
pub struct FormatterRegistry {
    formatters: Vec<Box<dyn EntryFormatter>>,
    options: FormatterOptions,
}

impl FormatterRegistry {
    /// Create a registry with no formatters.
    pub fn new(options: FormatterOptions) -> Self {
        Self {
            formatters: Vec::new(),
            options,
        }
    }

    /// Create a registry with the book, article and news article formatters.
    pub fn standard(options: FormatterOptions) -> Self {
        let mut registry = Self::new(options);
        registry.register(Box::new(BookFormatter));
        registry.register(Box::new(ArticleFormatter));
        registry.register(Box::new(NewsArticleFormatter));
        registry
    }

    /// Add a formatter, replacing any existing one for the same type.
    pub fn register(&mut self, formatter: Box<dyn EntryFormatter>) {
        match self
            .formatters
            .iter()
            .position(|f| f.entry_type() == formatter.entry_type())
        {
            Some(index) => self.formatters[index] = formatter,
            None => self.formatters.push(formatter),
        }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Registered type tags in registration order.
    pub fn entry_types(&self) -> Vec<&str> {
        self.formatters.iter().map(|f| f.entry_type()).collect()
    }

    /// Look up the formatter for a type tag, ignoring case.
    pub fn formatter_for(&self, entry_type: &str) -> Option<&dyn EntryFormatter> {
        let entry_type = entry_type.to_lowercase();
        self.formatters
            .iter()
            .find(|f| f.entry_type() == entry_type)
            .map(|f| &**f)
    }

    /// Format one entry.
    ///
    /// Returns `Ok(None)` when the entry's type is not supported.
    pub fn format_entry(&self, entry: &Entry) -> Result<Option<String>> {
        match self.formatter_for(&entry.entry_type) {
            Some(formatter) => formatter.format(entry, &self.options).map(Some),
            None => Ok(None),
        }
    }

    /// Format entries in order, one outcome per entry.
    ///
    /// Unsupported types never stop the batch. A formatting error stops it
    /// only under [`FailurePolicy::Abort`].
    pub fn format_all(&self, entries: &[Entry]) -> Result<Vec<EntryOutcome>> {
        let mut outcomes = Vec::with_capacity(entries.len());

        for entry in entries {
            let key = entry.key.clone();
            let entry_type = entry.normalized_type();
            tracing::debug!(entry_type = %entry_type, key = ?key, "Formatting entry");

            let Some(formatter) = self.formatter_for(&entry_type) else {
                tracing::warn!(entry_type = %entry_type, key = ?key, "Unsupported entry type");
                outcomes.push(EntryOutcome::Unsupported { key, entry_type });
                continue;
            };

            match formatter.format(entry, &self.options) {
                Ok(label) => outcomes.push(EntryOutcome::Formatted { key, label }),
                Err(error) => {
                    if self.options.failure_policy == FailurePolicy::Abort {
                        return Err(error);
                    }
                    tracing::warn!(entry_type = %entry_type, key = ?key, error = %error, "Failed to format entry");
                    outcomes.push(EntryOutcome::Failed { key, error });
                }
            }
        }

        Ok(outcomes)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::standard(FormatterOptions::default())
    }
}
