//! Bibliography entries and the working copies formatters build from them.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! An [`Entry`] is an immutable, already-parsed record: a type tag plus a
//! string-to-string field map. Formatters never touch it directly. Instead
//! they seed a [`FormatEntry`] with placeholder sentinels such as `<AUTHOR>`,
//! overwrite the placeholders with whatever the entry supplies, and then add
//! derived labels. Every seeded key is therefore always present when the
//! citation is formatted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{OscolaError, Result};

/// A parsed bibliography record.
///
/// The serde shape matches what BibTeX parsers commonly emit: the type tag
/// under `ENTRYTYPE` (or `type`), the citation key under `ID` (or `key`),
/// and every other field at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry type tag (e.g. "book", "article", "newsarticle").
    #[serde(rename = "ENTRYTYPE", alias = "type")]
    pub entry_type: String,

    /// Citation key, when the source provides one.
    #[serde(
        rename = "ID",
        alias = "key",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub key: Option<String>,

    /// Raw field values keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Entry {
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            key: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The type tag as used for dispatch.
    pub fn normalized_type(&self) -> String {
        self.entry_type.to_lowercase()
    }
}

/// Read access to named fields, shared by raw and format entries.
///
/// Label helpers are written against this trait because some of them read
/// the raw entry and others the seeded copy.
pub trait FieldSource {
    /// The text stored under `name`, if the key exists at all.
    fn field(&self, name: &str) -> Option<&str>;

    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl FieldSource for Entry {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A default placeholder for one field of a format entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, placeholder: &'static str) -> Self {
        Self { name, placeholder }
    }
}

/// Value of a format entry field.
///
/// Output keeps the literal sentinel text, so `Default` still renders as
/// `<AUTHOR>` and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Supplied by the entry or computed from it.
    Present(String),
    /// Not supplied; renders as the sentinel.
    Default(&'static str),
}

impl FieldValue {
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Present(value) => value.as_str(),
            FieldValue::Default(placeholder) => *placeholder,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, FieldValue::Default(_))
    }
}

/// Working copy of an [`Entry`] used to render one citation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatEntry {
    values: BTreeMap<&'static str, FieldValue>,
    placeholders: BTreeMap<&'static str, &'static str>,
}

impl FormatEntry {
    /// Seed every spec with its placeholder, then overwrite the ones `source` supplies.
    pub fn seeded(specs: &[FieldSpec], source: &Entry) -> Self {
        let mut format_entry = Self::default();
        for spec in specs {
            format_entry.set_default(*spec);
        }
        format_entry.overwrite_from(source);
        format_entry
    }

    /// Overwrite already-seeded keys with values from `source`.
    ///
    /// Keys the format entry does not know are ignored.
    pub fn overwrite_from(&mut self, source: &Entry) {
        for (name, value) in self.values.iter_mut() {
            if let Some(raw) = source.field(name) {
                *value = FieldValue::Present(raw.to_string());
            }
        }
    }

    /// Register `spec` and set its value to the placeholder.
    pub fn set_default(&mut self, spec: FieldSpec) {
        self.placeholders.insert(spec.name, spec.placeholder);
        self.values
            .insert(spec.name, FieldValue::Default(spec.placeholder));
    }

    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    /// Set a derived value that falls back to `spec.placeholder`.
    pub fn set_derived(&mut self, spec: FieldSpec, value: String) {
        self.placeholders.insert(spec.name, spec.placeholder);
        let value = if value == spec.placeholder {
            FieldValue::Default(spec.placeholder)
        } else {
            FieldValue::Present(value)
        };
        self.values.insert(spec.name, value);
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of `name`, or [`OscolaError::MissingField`] if it was never seeded.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.field(name).ok_or_else(|| OscolaError::MissingField {
            field: name.to_string(),
        })
    }

    /// The supplied text of `name`, or `None` while it still reads as its sentinel.
    ///
    /// A raw value spelled exactly like the sentinel counts as not supplied.
    pub fn supplied(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            FieldValue::Present(value) => {
                if self
                    .placeholders
                    .get(name)
                    .is_some_and(|placeholder| *placeholder == value.as_str())
                {
                    None
                } else {
                    Some(value.as_str())
                }
            }
            FieldValue::Default(_) => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

impl FieldSource for FormatEntry {
    fn field(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(FieldValue::as_str)
    }
}
