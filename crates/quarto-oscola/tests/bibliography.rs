//! End-to-end tests over a small bibliography.
//!
//! Entries are given in the JSON record shape produced by BibTeX parsers and
//! pushed through the standard registry the way a driver would.

use insta::assert_snapshot;
use quarto_oscola::{
    BookFirstPageSource, Entry, EntryOutcome, FailurePolicy, FormatterOptions, FormatterRegistry,
    OscolaError,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn bibliography() -> Vec<Entry> {
    serde_json::from_value(json!([
        {
            "ENTRYTYPE": "article",
            "ID": "smith2021",
            "author": "Smith",
            "title": "On X",
            "journal": "Utrecht Law Review",
            "volume": "10",
            "number": "2",
            "year": "2021",
            "pages": "45-60"
        },
        {
            "ENTRYTYPE": "misc",
            "ID": "note1",
            "title": "A note"
        },
        {
            "ENTRYTYPE": "Book",
            "ID": "doe2019",
            "author": "Doe",
            "title": "A Book",
            "publisher": "Acme",
            "year": "2019",
            "edition": "2"
        },
        {
            "ENTRYTYPE": "article",
            "ID": "broken",
            "author": "Nobody",
            "year": "2000"
        },
        {
            "ENTRYTYPE": "NewsArticle",
            "ID": "green2018",
            "author": "Green",
            "title": "Court Rules on X",
            "journal": "The Guardian",
            "place": "London",
            "year": "2018",
            "month": "oct",
            "day": "2"
        },
        {
            "ENTRYTYPE": "article",
            "ID": "brown2019",
            "author": "Brown",
            "title": "Online Courts",
            "documenttype": "Working Paper",
            "url": "https://example.org/paper",
            "year": "2019",
            "urldate": "2020-04-21"
        }
    ]))
    .unwrap()
}

#[test]
fn test_batch_continues_past_unsupported_and_failed_entries() {
    init_tracing();
    let outcomes = FormatterRegistry::default()
        .format_all(&bibliography())
        .unwrap();

    assert_eq!(outcomes.len(), 6);
    assert!(matches!(
        &outcomes[1],
        EntryOutcome::Unsupported { entry_type, .. } if entry_type == "misc"
    ));
    assert!(matches!(
        &outcomes[3],
        EntryOutcome::Failed {
            error: OscolaError::UnsupportedCitationShape { .. },
            ..
        }
    ));
    assert_eq!(
        outcomes.iter().map(EntryOutcome::key).collect::<Vec<_>>(),
        vec![
            Some("smith2021"),
            Some("note1"),
            Some("doe2019"),
            Some("broken"),
            Some("green2018"),
            Some("brown2019"),
        ]
    );

    let printed = outcomes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(printed, @r"
    Smith, 'On X' (2021) 10/2, Utrecht L Rev 45.
    Unsupported entry type misc
    Doe, \textit{A Book} (2nd, Acme, 2019).
    Failed to format 'broken': No citation shape for article entry: neither a journal nor a url is given
    Green, 'Court Rules on X' \textit{The Guardian} (London, 2nd October 2018).
    Brown, 'Online Courts' (Working Paper, 2019) <https://example.org/paper> accessed 21st April 2020.
    ");
}

#[test]
fn test_abort_policy_stops_at_first_failure() {
    init_tracing();
    let options = FormatterOptions {
        failure_policy: FailurePolicy::Abort,
        ..FormatterOptions::default()
    };
    let err = FormatterRegistry::standard(options)
        .format_all(&bibliography())
        .unwrap_err();
    assert!(matches!(err, OscolaError::UnsupportedCitationShape { .. }));
}

#[test]
fn test_abort_policy_ignores_unsupported_types() {
    let options = FormatterOptions {
        failure_policy: FailurePolicy::Abort,
        ..FormatterOptions::default()
    };
    let entries = vec![Entry::new("misc"), Entry::new("unpublished")];
    let outcomes = FormatterRegistry::standard(options)
        .format_all(&entries)
        .unwrap();
    assert!(outcomes.iter().all(|o| !o.is_formatted()));
}

#[test]
fn test_date_errors_fail_only_their_entry() {
    let entries = vec![
        Entry::new("newsarticle")
            .with_key("bad-month")
            .with_field("year", "2018")
            .with_field("month", "Octobre"),
        Entry::new("article")
            .with_key("bad-urldate")
            .with_field("url", "https://example.org")
            .with_field("urldate", "2020/04/21"),
        Entry::new("book").with_key("fine").with_field("year", "1999"),
    ];
    let outcomes = FormatterRegistry::default().format_all(&entries).unwrap();

    assert!(matches!(
        &outcomes[0],
        EntryOutcome::Failed { error: OscolaError::UnknownMonth { label }, .. } if label == "Octobre"
    ));
    assert!(matches!(
        &outcomes[1],
        EntryOutcome::Failed { error: OscolaError::InvalidDate { .. }, .. }
    ));
    assert_eq!(
        outcomes[2].label(),
        Some(r"<AUTHOR>, \textit{<TITLE>} (<EDITION>, <PUBLISHER>, 1999).")
    );
}

#[test]
fn test_options_from_toml_drive_the_registry() {
    let options = FormatterOptions::from_toml_str(
        r#"
book-first-page = "format-entry"
ordinal-rule = "english"

[abbreviations]
"Cambridge Law Journal" = "CLJ"
"#,
    )
    .unwrap();
    assert_eq!(options.book_first_page, BookFirstPageSource::FormatEntry);
    let registry = FormatterRegistry::standard(options);

    let article = Entry::new("article")
        .with_field("author", "White")
        .with_field("title", "Trusts")
        .with_field("journal", "Cambridge Law Journal")
        .with_field("volume", "71")
        .with_field("year", "2012")
        .with_field("pages", "101-130");
    assert_eq!(
        registry.format_entry(&article).unwrap().as_deref(),
        Some("White, 'Trusts' (2012) 71, CLJ 101.")
    );

    let book = Entry::new("book")
        .with_field("author", "Doe")
        .with_field("title", "A Book")
        .with_field("publisher", "Acme")
        .with_field("year", "2019")
        .with_field("edition", "11")
        .with_field("pages", "3-9");
    assert_eq!(
        registry.format_entry(&book).unwrap().as_deref(),
        Some(r"Doe, \textit{A Book} (11th, Acme, 2019).")
    );
}

#[test]
fn test_default_options_keep_last_digit_ordinals_and_book_pages() {
    let book = Entry::new("book")
        .with_field("author", "Doe")
        .with_field("title", "A Book")
        .with_field("publisher", "Acme")
        .with_field("year", "2019")
        .with_field("edition", "11")
        .with_field("pages", "3-9");
    assert_eq!(
        FormatterRegistry::default()
            .format_entry(&book)
            .unwrap()
            .as_deref(),
        Some(r"Doe, \textit{A Book} (11st, Acme, 2019) 3.")
    );
}
