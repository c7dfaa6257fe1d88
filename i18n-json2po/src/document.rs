// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The JSON document written by the extraction step.
//!
//! A document looks like this:
//!
//! ```json
//! {
//!   "items": [
//!     { "type": "single", "entry": "Hello", "comments": ["Greeting"] },
//!     { "type": "plural", "entry": ["%d file", "%d files"] }
//!   ],
//!   "meta": { "projectIdVersion": "demo 1.0", "pluralForms": "nplurals=2; plural=(n != 1)" }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// A list of translatable strings plus optional PO metadata.
///
/// When `meta` is present, the document comes from an existing PO file
/// and its translations are carried over into the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslationDocument {
    pub items: Vec<TranslationItem>,
    #[serde(default)]
    pub meta: Option<TranslationMetadata>,
}

impl TranslationDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns `true` if at least one item has plural forms.
    pub fn has_plural_forms(&self) -> bool {
        self.items.iter().any(TranslationItem::is_plural)
    }
}

impl FromStr for TranslationDocument {
    type Err = Error;

    fn from_str(json: &str) -> Result<Self> {
        Self::from_json(json)
    }
}

/// A single translatable string, tagged by `"type"` in the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TranslationItem {
    Single(SingleEntry),
    Plural(PluralEntry),
}

impl TranslationItem {
    pub fn is_plural(&self) -> bool {
        matches!(self, TranslationItem::Plural(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SingleEntry {
    pub entry: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub comments: Option<Vec<String>>,
    #[serde(default, alias = "occurences")]
    pub occurrences: Option<Vec<String>>,
    #[serde(default)]
    pub translation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluralEntry {
    /// The first and the last plural form seen at extraction time.
    ///
    /// These identify the message. The full set of plural forms for
    /// the target language only shows up in `translations`.
    pub entry: [String; 2],
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub comments: Option<Vec<String>>,
    #[serde(default, alias = "occurences")]
    pub occurrences: Option<Vec<String>>,
    #[serde(default)]
    pub translations: Option<Vec<String>>,
}

/// The value of a metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Translator(Translator),
}

impl From<&str> for MetadataValue {
    fn from(text: &str) -> Self {
        MetadataValue::Text(String::from(text))
    }
}

impl From<String> for MetadataValue {
    fn from(text: String) -> Self {
        MetadataValue::Text(text)
    }
}

impl From<Translator> for MetadataValue {
    fn from(translator: Translator) -> Self {
        MetadataValue::Translator(translator)
    }
}

/// The `lastTranslator` metadata value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Translator {
    pub name: String,
    pub email: String,
}

/// Header fields of an existing PO file, keyed by their JSON names
/// (`projectIdVersion`, `lastTranslator`, ...).
///
/// The fields keep the order in which they appear in the document since
/// this is the order of the lines in the generated header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMetadata {
    fields: Vec<(String, MetadataValue)>,
}

impl TranslationMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    ///
    /// A key which is already present keeps its position and gets the
    /// new value, like a repeated key in a JSON object.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.fields
            .iter()
            .find_map(|(k, value)| (k == key).then_some(value))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationMetadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.push(key, value);
        }
        metadata
    }
}

struct MetadataVisitor;

impl<'de> Visitor<'de> for MetadataVisitor {
    type Value = TranslationMetadata;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of PO header fields")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut metadata = TranslationMetadata::new();
        while let Some((key, value)) = map.next_entry::<String, MetadataValue>()? {
            metadata.push(key, value);
        }
        Ok(metadata)
    }
}

impl<'de> Deserialize<'de> for TranslationMetadata {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MetadataVisitor)
    }
}

/// Values for the template header written when a document has no
/// metadata of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialMeta {
    pub copyright_subject: Option<String>,
    pub bugs_email: Option<String>,
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_single_item() -> anyhow::Result<()> {
        let document = TranslationDocument::from_json(
            r#"{"items": [{
                "type": "single",
                "entry": "Hello",
                "context": "greeting",
                "comments": ["On the start page"],
                "occurrences": ["src/app.js:10"],
                "translation": "Ahoj"
            }]}"#,
        )?;
        assert_eq!(
            document,
            TranslationDocument {
                items: vec![TranslationItem::Single(SingleEntry {
                    entry: String::from("Hello"),
                    context: Some(String::from("greeting")),
                    comments: Some(vec![String::from("On the start page")]),
                    occurrences: Some(vec![String::from("src/app.js:10")]),
                    translation: Some(String::from("Ahoj")),
                })],
                meta: None,
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_plural_item() -> anyhow::Result<()> {
        let document: TranslationDocument = r#"{"items": [{
                "type": "plural",
                "entry": ["%d file", "%d files"],
                "translations": ["%d soubor", "%d soubory", "%d souborů"]
            }]}"#
            .parse()?;
        assert_eq!(
            document.items,
            vec![TranslationItem::Plural(PluralEntry {
                entry: [String::from("%d file"), String::from("%d files")],
                translations: Some(vec![
                    String::from("%d soubor"),
                    String::from("%d soubory"),
                    String::from("%d souborů"),
                ]),
                ..PluralEntry::default()
            })]
        );
        assert!(document.has_plural_forms());
        Ok(())
    }

    #[test]
    fn test_parse_misspelled_occurrences() -> anyhow::Result<()> {
        let document = TranslationDocument::from_json(
            r#"{"items": [{"type": "single", "entry": "foo", "occurences": ["a.js:1"]}]}"#,
        )?;
        let TranslationItem::Single(single) = &document.items[0] else {
            panic!("Expected a single entry, got {:?}", document.items[0]);
        };
        assert_eq!(single.occurrences, Some(vec![String::from("a.js:1")]));
        Ok(())
    }

    #[test]
    fn test_parse_null_fields() -> anyhow::Result<()> {
        let document = TranslationDocument::from_json(
            r#"{"items": [{"type": "single", "entry": "foo", "comments": null}], "meta": null}"#,
        )?;
        assert_eq!(
            document.items,
            vec![TranslationItem::Single(SingleEntry {
                entry: String::from("foo"),
                ..SingleEntry::default()
            })]
        );
        assert_eq!(document.meta, None);
        assert!(!document.has_plural_forms());
        Ok(())
    }

    #[test]
    fn test_parse_unknown_item_type() {
        let result =
            TranslationDocument::from_json(r#"{"items": [{"type": "other", "entry": "foo"}]}"#);
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_parse_plural_with_one_form() {
        let result =
            TranslationDocument::from_json(r#"{"items": [{"type": "plural", "entry": ["foo"]}]}"#);
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = TranslationDocument::from_json("{\"items\": [");
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_metadata_keeps_document_order() -> anyhow::Result<()> {
        let document = TranslationDocument::from_json(
            r#"{"items": [], "meta": {
                "pluralForms": "nplurals=2; plural=(n != 1)",
                "lastTranslator": {"name": "2GIS", "email": "crowdin@2gis.ru"},
                "language": "cs_CZ"
            }}"#,
        )?;
        let metadata = document.meta.unwrap_or_default();
        assert_eq!(
            metadata.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            vec!["pluralForms", "lastTranslator", "language"]
        );
        assert_eq!(
            metadata.get("lastTranslator"),
            Some(&MetadataValue::Translator(Translator {
                name: String::from("2GIS"),
                email: String::from("crowdin@2gis.ru"),
            }))
        );
        Ok(())
    }

    #[test]
    fn test_metadata_repeated_key_keeps_position() {
        let metadata = TranslationMetadata::from_iter([
            ("language", "de"),
            ("languageTeam", "German"),
            ("language", "de_AT"),
        ]);
        assert_eq!(metadata.len(), 2);
        assert_eq!(
            metadata.iter().collect::<Vec<_>>(),
            vec![
                ("language", &MetadataValue::from("de_AT")),
                ("languageTeam", &MetadataValue::from("German")),
            ]
        );
        assert!(metadata.contains_key("languageTeam"));
        assert!(!metadata.contains_key("pluralForms"));
    }

    #[test]
    fn test_parse_initial_meta() -> anyhow::Result<()> {
        let initial_meta: InitialMeta = serde_json::from_str(
            r#"{"copyrightSubject": "cool team", "bugsEmail": "bugs@team.com", "year": 2044}"#,
        )?;
        assert_eq!(
            initial_meta,
            InitialMeta {
                copyright_subject: Some(String::from("cool team")),
                bugs_email: Some(String::from("bugs@team.com")),
                year: Some(2044),
            }
        );
        Ok(())
    }
}
