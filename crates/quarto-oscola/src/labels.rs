//! Derived display values computed from entry fields.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Helpers that can fall back take the fallback text explicitly; callers
//! pass the placeholder of the derived field so an underivable value still
//! renders as a sentinel. Helpers that parse (dates, months, numbers)
//! return errors instead of falling back.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{FormatterOptions, OrdinalRule};
use crate::entry::{FieldSource, FieldSpec, FormatEntry};
use crate::error::{OscolaError, Result};
use crate::tables::{DEFAULT_ORDINAL_SUFFIX, MONTH_CODES, ORDINAL_SUFFIXES};

pub const FIRST_PAGE: FieldSpec = FieldSpec::new("first-page", "<FIRST PAGE>");
pub const WRITTEN_DATE_LABEL: FieldSpec = FieldSpec::new("written-date-label", "<WRITTEN DATE>");
pub const ACCESS_DATE_LABEL: FieldSpec = FieldSpec::new("access-date-label", "<ACCESS DATE>");
pub const EDITION: FieldSpec = FieldSpec::new("edition", "<EDITION>");

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A page range at the start of the field, e.g. `45-60`. Trailing text is ignored.
static PAGE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<first>\d+)-(?P<last>\d+)").unwrap());

/// Four-digit year, then one- or two-digit month and day. No sign, no padding.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").unwrap());

/// Integer text as `int()` reads it: optional sign, digits with single
/// underscores between them, surrounding whitespace allowed.
static WHOLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?P<sign>[+-]?)(?P<digits>[0-9]+(?:_[0-9]+)*)\s*$").unwrap());

/// An integer of any size, kept as normalized decimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WholeNumber {
    text: String,
    /// The value modulo 100, always in `0..100`.
    rem_100: i64,
}

impl WholeNumber {
    pub fn parse(text: &str) -> Option<Self> {
        let captures = WHOLE_NUMBER.captures(text)?;
        let digits: String = captures["digits"].chars().filter(|c| *c != '_').collect();
        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let negative = &captures["sign"] == "-" && digits != "0";

        let tail = &digits[digits.len().saturating_sub(2)..];
        let magnitude_rem: i64 = tail.parse().ok()?;
        let rem_100 = if negative {
            (100 - magnitude_rem).rem_euclid(100)
        } else {
            magnitude_rem
        };
        let text = if negative {
            format!("-{}", digits)
        } else {
            digits.to_string()
        };
        Some(Self { text, rem_100 })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<i64> for WholeNumber {
    fn from(number: i64) -> Self {
        Self {
            text: number.to_string(),
            rem_100: number.rem_euclid(100),
        }
    }
}

impl OrdinalRule {
    pub fn suffix(self, number: i64) -> &'static str {
        self.suffix_for_remainder(number.rem_euclid(100))
    }

    pub fn label(self, number: i64) -> String {
        self.label_whole(&WholeNumber::from(number))
    }

    pub fn label_whole(self, number: &WholeNumber) -> String {
        format!("{}{}", number.as_str(), self.suffix_for_remainder(number.rem_100))
    }

    fn suffix_for_remainder(self, rem_100: i64) -> &'static str {
        if self == OrdinalRule::English && (11..=13).contains(&rem_100) {
            return DEFAULT_ORDINAL_SUFFIX;
        }
        let last_digit = rem_100 % 10;
        ORDINAL_SUFFIXES
            .iter()
            .find(|(digit, _)| *digit == last_digit)
            .map_or(DEFAULT_ORDINAL_SUFFIX, |(_, suffix)| *suffix)
    }
}

/// Ordinal suffix chosen from the last decimal digit alone.
pub fn get_suffix(number: i64) -> &'static str {
    OrdinalRule::LastDigit.suffix(number)
}

/// `number` followed by its last-digit suffix, e.g. `"2nd"`.
pub fn get_number_order_label(number: i64) -> String {
    OrdinalRule::LastDigit.label(number)
}

/// First page of a `first-last` page range, or `default`.
pub fn get_first_page_label(entry: &impl FieldSource, default: &str) -> String {
    entry
        .field("pages")
        .and_then(|pages| PAGE_RANGE.captures(pages))
        .and_then(|captures| captures.name("first"))
        .map_or_else(|| default.to_string(), |first| first.as_str().to_string())
}

/// `volume/issue`, or just the volume while the issue is unset or empty.
pub fn get_volume_issue_label(entry: &FormatEntry) -> Result<String> {
    let volume = entry.require("volume")?;
    entry.require("issue")?;

    match entry.supplied("issue").filter(|issue| !issue.is_empty()) {
        Some(issue) => Ok(format!("{}/{}", volume, issue)),
        None => Ok(volume.to_string()),
    }
}

/// Parse a strict `YYYY-MM-DD` date. Month and day may drop the leading zero.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    // chrono alone accepts short years, a leading sign and leading spaces.
    if !DATE_SHAPE.is_match(text) {
        return Err(OscolaError::InvalidDate {
            value: text.to_string(),
            source: None,
        });
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|source| OscolaError::InvalidDate {
        value: text.to_string(),
        source: Some(source),
    })
}

/// Month index (1-12) of a BibTeX month macro such as `jan`, in any case.
pub fn latex_month_label_to_index(label: &str) -> Result<u32> {
    MONTH_CODES
        .get(label.to_uppercase().as_str())
        .copied()
        .ok_or_else(|| OscolaError::UnknownMonth {
            label: label.to_string(),
        })
}

/// Full English name of a month index.
fn month_name(index: u32) -> Result<String> {
    NaiveDate::from_ymd_opt(2000, index, 1)
        .map(|date| date.format("%B").to_string())
        .ok_or_else(|| OscolaError::UnknownMonth {
            label: index.to_string(),
        })
}

/// `"3rd January 2020"`.
pub fn get_date_label(date: NaiveDate, rule: OrdinalRule) -> String {
    format!(
        "{} {} {}",
        rule.label(i64::from(date.day())),
        date.format("%B"),
        date.year()
    )
}

fn parse_number(field: &str, value: &str) -> Result<WholeNumber> {
    WholeNumber::parse(value).ok_or_else(|| OscolaError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Ordinal of an integer-valued field, e.g. `edition = "2"` gives `"2nd"`.
pub fn get_ordinal_field_label(
    entry: &impl FieldSource,
    field: &str,
    default: &str,
    rule: OrdinalRule,
) -> Result<String> {
    match entry.field(field) {
        Some(value) => Ok(rule.label_whole(&parse_number(field, value)?)),
        None => Ok(default.to_string()),
    }
}

/// Publication date as day, month and year, leaving out the parts the entry lacks.
///
/// Without a `year` field the date is unknown and `default` is returned,
/// even when `day` or `month` are set.
pub fn get_written_date_label(
    entry: &impl FieldSource,
    default: &str,
    rule: OrdinalRule,
) -> Result<String> {
    let Some(year) = entry.field("year") else {
        return Ok(default.to_string());
    };

    let mut components = Vec::with_capacity(3);
    if let Some(day) = entry.field("day") {
        components.push(rule.label_whole(&parse_number("day", day)?));
    }
    if let Some(month) = entry.field("month") {
        components.push(month_name(latex_month_label_to_index(month)?)?);
    }
    if !year.is_empty() {
        components.push(year.to_string());
    }

    if components.is_empty() {
        return Ok(default.to_string());
    }
    Ok(components.join(" "))
}

/// The `urldate` field written out as a date, or `default`.
pub fn get_access_date_label(
    entry: &impl FieldSource,
    default: &str,
    rule: OrdinalRule,
) -> Result<String> {
    match entry.field("urldate") {
        Some(urldate) => Ok(get_date_label(parse_date(urldate)?, rule)),
        None => Ok(default.to_string()),
    }
}

/// The journal's abbreviation, or its name unchanged.
pub fn get_journal_label(entry: &FormatEntry, options: &FormatterOptions) -> Result<String> {
    let journal = entry.require("journal")?;
    Ok(options
        .journal_abbreviation(journal)
        .unwrap_or(journal)
        .to_string())
}
