/*
 * formatters.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-entry-type citation formatters.
//!
//! Every formatter follows the same three steps:
//!
//! 1. Seed a [`FormatEntry`] with the type's placeholder fields and
//!    overwrite them with the values the entry supplies.
//! 2. Add derived labels (dates, page, journal abbreviation, ...).
//! 3. Format the type's citation and append the first page and final period.
//!
//! Where a derived label is read from (the raw entry or the seeded copy)
//! differs between formatters and is part of the output contract. The news
//! article reads `pages` from the seeded copy, which never has that key, so
//! news citations never carry a page.

use crate::config::{BookFirstPageSource, FormatterOptions};
use crate::entry::{Entry, FieldSource, FieldSpec, FieldValue, FormatEntry};
use crate::error::{OscolaError, Result};
use crate::labels::{
    ACCESS_DATE_LABEL, EDITION, FIRST_PAGE, WRITTEN_DATE_LABEL, get_access_date_label,
    get_first_page_label, get_journal_label, get_ordinal_field_label, get_volume_issue_label,
    get_written_date_label,
};

pub const NEWS_ARTICLE_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("author", "<AUTHOR>"),
    FieldSpec::new("title", "<TITLE>"),
    FieldSpec::new("url", "<URL>"),
    FieldSpec::new("journal", "<JOURNAL>"),
    FieldSpec::new("place", "<PLACE>"),
    FieldSpec::new("year", "<YEAR>"),
];

pub const ARTICLE_FIELDS: [FieldSpec; 8] = [
    FieldSpec::new("author", "<AUTHOR>"),
    FieldSpec::new("title", "<TITLE>"),
    FieldSpec::new("volume", "<VOLUME>"),
    FieldSpec::new("issue", "<ISSUE>"),
    FieldSpec::new("documenttype", "<DOCUMENT TYPE>"),
    FieldSpec::new("url", "<URL>"),
    FieldSpec::new("journal", "<JOURNAL>"),
    FieldSpec::new("year", "<YEAR>"),
];

pub const BOOK_FIELDS: [FieldSpec; 4] = [
    FieldSpec::new("author", "<AUTHOR>"),
    FieldSpec::new("title", "<TITLE>"),
    FieldSpec::new("publisher", "<PUBLISHER>"),
    FieldSpec::new("year", "<YEAR>"),
];

/// A citation formatter for one entry type.
pub trait EntryFormatter: Send + Sync {
    /// Lowercase entry type tag this formatter handles.
    fn entry_type(&self) -> &str;

    fn format(&self, entry: &Entry, options: &FormatterOptions) -> Result<String>;
}

/// Append the first page, when known, and the closing period.
pub fn append_first_page(mut label: String, entry: &FormatEntry) -> String {
    if let Some(first_page) = entry.supplied(FIRST_PAGE.name) {
        label.push(' ');
        label.push_str(first_page);
    }
    label.push('.');
    label
}

pub fn format_news_article_entry(entry: &Entry, options: &FormatterOptions) -> Result<String> {
    let mut format_entry = FormatEntry::seeded(&NEWS_ARTICLE_FIELDS, entry);

    let first_page = get_first_page_label(&format_entry, FIRST_PAGE.placeholder);
    format_entry.set_derived(FIRST_PAGE, first_page);
    format_entry.set_derived(
        WRITTEN_DATE_LABEL,
        get_written_date_label(entry, WRITTEN_DATE_LABEL.placeholder, options.ordinal_rule)?,
    );

    let label = format!(
        r"{author}, '{title}' \textit{{{journal}}} ({place}, {written_date})",
        author = format_entry.require("author")?,
        title = format_entry.require("title")?,
        journal = format_entry.require("journal")?,
        place = format_entry.require("place")?,
        written_date = format_entry.require(WRITTEN_DATE_LABEL.name)?,
    );
    Ok(append_first_page(label, &format_entry))
}

/// Format a journal article.
///
/// An article with a journal is cited as published. Otherwise an article
/// with a `url` is cited as an online document. Anything else is
/// [`OscolaError::UnsupportedCitationShape`].
pub fn format_article_entry(entry: &Entry, options: &FormatterOptions) -> Result<String> {
    let rule = options.ordinal_rule;
    let mut format_entry = FormatEntry::seeded(&ARTICLE_FIELDS, entry);

    if let Some(number) = entry.field("number") {
        format_entry.set("issue", FieldValue::Present(number.to_string()));
    }
    format_entry.set_derived(
        FIRST_PAGE,
        get_first_page_label(entry, FIRST_PAGE.placeholder),
    );
    let journal_label = get_journal_label(&format_entry, options)?;
    format_entry.set("journal-label", FieldValue::Present(journal_label));
    let volume_issue_label = get_volume_issue_label(&format_entry)?;
    format_entry.set("volume-issue-label", FieldValue::Present(volume_issue_label));
    format_entry.set_derived(
        WRITTEN_DATE_LABEL,
        get_written_date_label(entry, WRITTEN_DATE_LABEL.placeholder, rule)?,
    );
    // Computed even for published articles, so a bad urldate always fails the entry.
    format_entry.set_derived(
        ACCESS_DATE_LABEL,
        get_access_date_label(entry, ACCESS_DATE_LABEL.placeholder, rule)?,
    );

    let is_published = format_entry.supplied("journal").is_some();
    let is_online = entry.has_field("url");

    if is_published {
        let label = format!(
            "{author}, '{title}' ({year}) {volume_issue}, {journal}",
            author = format_entry.require("author")?,
            title = format_entry.require("title")?,
            year = format_entry.require("year")?,
            volume_issue = format_entry.require("volume-issue-label")?,
            journal = format_entry.require("journal-label")?,
        );
        Ok(append_first_page(label, &format_entry))
    } else if is_online {
        Ok(format!(
            "{author}, '{title}' ({document_type}, {written_date}) <{url}> accessed {access_date}.",
            author = format_entry.require("author")?,
            title = format_entry.require("title")?,
            document_type = format_entry.require("documenttype")?,
            written_date = format_entry.require(WRITTEN_DATE_LABEL.name)?,
            url = format_entry.require("url")?,
            access_date = format_entry.require(ACCESS_DATE_LABEL.name)?,
        ))
    } else {
        Err(OscolaError::UnsupportedCitationShape {
            entry_type: "article".to_string(),
            reason: "neither a journal nor a url is given".to_string(),
        })
    }
}

pub fn format_book_entry(entry: &Entry, options: &FormatterOptions) -> Result<String> {
    let mut format_entry = FormatEntry::seeded(&BOOK_FIELDS, entry);

    format_entry.set_derived(
        EDITION,
        get_ordinal_field_label(entry, "edition", EDITION.placeholder, options.ordinal_rule)?,
    );
    let first_page = match options.book_first_page {
        BookFirstPageSource::SourceEntry => get_first_page_label(entry, FIRST_PAGE.placeholder),
        BookFirstPageSource::FormatEntry => {
            get_first_page_label(&format_entry, FIRST_PAGE.placeholder)
        }
    };
    format_entry.set_derived(FIRST_PAGE, first_page);

    let label = format!(
        r"{author}, \textit{{{title}}} ({edition}, {publisher}, {year})",
        author = format_entry.require("author")?,
        title = format_entry.require("title")?,
        edition = format_entry.require(EDITION.name)?,
        publisher = format_entry.require("publisher")?,
        year = format_entry.require("year")?,
    );
    Ok(append_first_page(label, &format_entry))
}

pub struct NewsArticleFormatter;

impl EntryFormatter for NewsArticleFormatter {
    fn entry_type(&self) -> &str {
        "newsarticle"
    }

    fn format(&self, entry: &Entry, options: &FormatterOptions) -> Result<String> {
        format_news_article_entry(entry, options)
    }
}

pub struct ArticleFormatter;

impl EntryFormatter for ArticleFormatter {
    fn entry_type(&self) -> &str {
        "article"
    }

    fn format(&self, entry: &Entry, options: &FormatterOptions) -> Result<String> {
        format_article_entry(entry, options)
    }
}

pub struct BookFormatter;

impl EntryFormatter for BookFormatter {
    fn entry_type(&self) -> &str {
        "book"
    }

    fn format(&self, entry: &Entry, options: &FormatterOptions) -> Result<String> {
        format_book_entry(entry, options)
    }
}
