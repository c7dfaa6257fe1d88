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

//! Serialization of a single translation item into a PO entry.

use std::fmt;

use crate::document::{PluralEntry, SingleEntry, TranslationItem};

/// Quote `text` as a PO string.
///
/// PO strings use the same escapes as JSON strings, so we let
/// `serde_json` do the work.
pub(crate) fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Controls which parts of an item end up in its entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryOptions {
    /// Write `#: file:line` lines for the occurrences of the item.
    pub print_occurrences: bool,
    /// Write the translations of the item instead of empty `msgstr`s.
    pub include_translations: bool,
}

/// The lines of one PO entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PotEntry {
    lines: Vec<String>,
}

impl PotEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the entry for `item`.
    pub fn from_item(item: &TranslationItem, options: EntryOptions) -> Self {
        let mut entry = Self::new();
        match item {
            TranslationItem::Single(single) => entry.serialize_single(single, options),
            TranslationItem::Plural(plural) => entry.serialize_plural(plural, options),
        };
        entry
    }

    /// Replace the lines with those of a singular message.
    pub fn serialize_single(&mut self, item: &SingleEntry, options: EntryOptions) -> &mut Self {
        self.lines.clear();
        self.add_annotations(
            item.comments.as_deref(),
            item.occurrences.as_deref(),
            item.context.as_deref(),
            options,
        );
        self.lines.push(format!("msgid {}", quote(&item.entry)));

        let translation = match &item.translation {
            Some(translation) if options.include_translations => translation.as_str(),
            _ => "",
        };
        self.lines.push(format!("msgstr {}", quote(translation)));
        self
    }

    /// Replace the lines with those of a plural message.
    ///
    /// Without translations, two empty `msgstr[n]` slots are written no
    /// matter how many plural forms the target language has.
    pub fn serialize_plural(&mut self, item: &PluralEntry, options: EntryOptions) -> &mut Self {
        self.lines.clear();
        self.add_annotations(
            item.comments.as_deref(),
            item.occurrences.as_deref(),
            item.context.as_deref(),
            options,
        );
        let [msgid, msgid_plural] = &item.entry;
        self.lines.push(format!("msgid {}", quote(msgid)));
        self.lines.push(format!("msgid_plural {}", quote(msgid_plural)));

        let translations: &[String] = match &item.translations {
            Some(translations) if options.include_translations => translations.as_slice(),
            _ => &[],
        };
        if translations.is_empty() {
            self.lines.push(String::from(r#"msgstr[0] """#));
            self.lines.push(String::from(r#"msgstr[1] """#));
        } else {
            for (idx, translation) in translations.iter().enumerate() {
                self.lines.push(format!("msgstr[{idx}] {}", quote(translation)));
            }
        }
        self
    }

    fn add_annotations(
        &mut self,
        comments: Option<&[String]>,
        occurrences: Option<&[String]>,
        context: Option<&str>,
        options: EntryOptions,
    ) {
        // Comments and occurrences are written verbatim: a newline in
        // them breaks the entry.
        for comment in comments.unwrap_or_default() {
            self.lines.push(format!("#. {comment}"));
        }
        if options.print_occurrences {
            for occurrence in occurrences.unwrap_or_default() {
                self.lines.push(format!("#: {occurrence}"));
            }
        }
        if let Some(context) = context.filter(|context| !context.is_empty()) {
            self.lines.push(format!("msgctxt {}", quote(context)));
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The entry as text, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for PotEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}
