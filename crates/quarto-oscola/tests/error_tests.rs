//! Tests for error Display output.

use quarto_oscola::OscolaError;
use quarto_oscola::labels::parse_date;

#[test]
fn test_invalid_date_display() {
    let err = parse_date("2020/01/01").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid date '2020/01/01': expected YYYY-MM-DD"
    );
    assert!(std::error::Error::source(&err).is_none());

    // Well shaped but not a calendar date: chrono's error is kept as the source.
    let err = parse_date("2021-02-30").unwrap_err();
    assert!(err.to_string().starts_with("Invalid date '2021-02-30'"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_unknown_month_display() {
    let err = OscolaError::UnknownMonth {
        label: "xyz".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown month 'xyz'");
}

#[test]
fn test_invalid_number_display() {
    let err = OscolaError::InvalidNumber {
        field: "edition".to_string(),
        value: "second".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Field 'edition' is not a whole number: 'second'"
    );
}

#[test]
fn test_unsupported_citation_shape_display() {
    let err = OscolaError::UnsupportedCitationShape {
        entry_type: "article".to_string(),
        reason: "neither a journal nor a url is given".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No citation shape for article entry: neither a journal nor a url is given"
    );
}

#[test]
fn test_missing_field_display() {
    let err = OscolaError::MissingField {
        field: "journal".to_string(),
    };
    assert_eq!(err.to_string(), "Field 'journal' is not defined");
}
