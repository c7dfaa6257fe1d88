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

//! Convert JSON translation documents into Gettext PO files.
//!
//! The input is the JSON document written by a string extraction
//! step: a list of singular and plural messages with their comments,
//! source locations and, when the document was made from an existing
//! PO file, the translations and header metadata of that file.
//!
//! Documents without metadata become POT templates:
//!
//! ```
//! use i18n_json2po::{convert_document, InitialMeta, TranslationDocument};
//!
//! let document = TranslationDocument::from_json(
//!     r#"{"items": [{"type": "single", "entry": "Hello"}]}"#,
//! )?;
//! let pot = convert_document(&document, &InitialMeta::default(), false, "2024-01-01 12:00Z")?;
//! assert!(pot.contains("\"POT-Creation-Date: 2024-01-01 12:00Z\\n\""));
//! assert!(pot.ends_with("msgid \"Hello\"\nmsgstr \"\""));
//! # Ok::<(), i18n_json2po::Error>(())
//! ```

mod document;
mod entry;
mod error;
mod header;
mod timestamp;

pub use document::{
    InitialMeta, MetadataValue, PluralEntry, SingleEntry, TranslationDocument, TranslationItem,
    TranslationMetadata, Translator,
};
pub use entry::{EntryOptions, PotEntry};
pub use error::{Error, Result};
pub use header::{build_header, HeaderField};
pub use timestamp::{format_timestamp, timezone_suffix};

/// Convert the JSON text of a translation document to a PO file.
///
/// The `POT-Creation-Date` of a template is the current local time.
/// The `initial_meta` is only used for templates, that is for
/// documents without metadata.
pub fn convert(
    json: &str,
    initial_meta: Option<&InitialMeta>,
    print_occurrences: bool,
) -> Result<String> {
    let document = TranslationDocument::from_json(json)?;
    let default_meta = InitialMeta::default();
    let generation_date = format_timestamp(&chrono::Local::now());
    convert_document(
        &document,
        initial_meta.unwrap_or(&default_meta),
        print_occurrences,
        &generation_date,
    )
}

/// Convert a parsed translation document to a PO file.
///
/// Translations are only written when the document has metadata.
/// Entries are separated by an empty line and appear in the order of
/// the document items.
pub fn convert_document(
    document: &TranslationDocument,
    initial_meta: &InitialMeta,
    print_occurrences: bool,
    generation_date: &str,
) -> Result<String> {
    let options = EntryOptions {
        print_occurrences,
        include_translations: document.meta.is_some(),
    };
    let entries = document
        .items
        .iter()
        .map(|item| PotEntry::from_item(item, options).render())
        .collect::<Vec<_>>();

    let header = build_header(
        document.meta.as_ref(),
        initial_meta,
        generation_date,
        document.has_plural_forms(),
    )?;
    Ok(header + &entries.join("\n\n"))
}
