//! OSCOLA-style citation labels for bibliography entries.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate turns already-parsed bibliography entries (books, journal
//! articles and news articles) into citation strings in the house legal
//! style. Missing fields render as placeholder sentinels such as
//! `<AUTHOR>`; malformed dates, unknown month codes and articles with no
//! citable shape are errors.
//!
//! ```
//! use quarto_oscola::{Entry, FormatterRegistry};
//!
//! let entry = Entry::new("article")
//!     .with_field("author", "Smith")
//!     .with_field("title", "On X")
//!     .with_field("journal", "Utrecht Law Review")
//!     .with_field("volume", "10")
//!     .with_field("number", "2")
//!     .with_field("year", "2021")
//!     .with_field("pages", "45-60");
//!
//! let label = FormatterRegistry::default().format_entry(&entry).unwrap();
//! assert_eq!(label.as_deref(), Some("Smith, 'On X' (2021) 10/2, Utrecht L Rev 45."));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod formatters;
pub mod labels;
pub mod registry;
pub mod tables;

pub use config::{BookFirstPageSource, FailurePolicy, FormatterOptions, OrdinalRule};
pub use entry::{Entry, FieldSource, FieldSpec, FieldValue, FormatEntry};
pub use error::{OscolaError, Result};
pub use formatters::{
    ArticleFormatter, BookFormatter, EntryFormatter, NewsArticleFormatter, append_first_page,
    format_article_entry, format_book_entry, format_news_article_entry,
};
pub use registry::{EntryOutcome, FormatterRegistry};
