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

//! The header entry at the top of a PO or POT file.

use crate::document::{InitialMeta, MetadataValue, TranslationMetadata};
use crate::entry::quote;
use crate::error::{Error, Result};

/// A header field which can be set from the document metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    ProjectIdVersion,
    ReportMsgidBugsTo,
    PotCreationDate,
    PoRevisionDate,
    LastTranslator,
    LanguageTeam,
    MimeVersion,
    ContentType,
    ContentTransferEncoding,
    GeneratedBy,
    Language,
    PluralForms,
}

impl HeaderField {
    /// Look up a field by its metadata key, e.g. `projectIdVersion`.
    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "projectIdVersion" => HeaderField::ProjectIdVersion,
            "reportMsgidBugsTo" => HeaderField::ReportMsgidBugsTo,
            "potCreationDate" => HeaderField::PotCreationDate,
            "poRevisionDate" => HeaderField::PoRevisionDate,
            "lastTranslator" => HeaderField::LastTranslator,
            "languageTeam" => HeaderField::LanguageTeam,
            "mimeVersion" => HeaderField::MimeVersion,
            "contentType" => HeaderField::ContentType,
            "contentTransferEncoding" => HeaderField::ContentTransferEncoding,
            "generatedBy" => HeaderField::GeneratedBy,
            "language" => HeaderField::Language,
            "pluralForms" => HeaderField::PluralForms,
            _ => return None,
        };
        Some(field)
    }

    /// The metadata key of the field.
    pub fn key(self) -> &'static str {
        match self {
            HeaderField::ProjectIdVersion => "projectIdVersion",
            HeaderField::ReportMsgidBugsTo => "reportMsgidBugsTo",
            HeaderField::PotCreationDate => "potCreationDate",
            HeaderField::PoRevisionDate => "poRevisionDate",
            HeaderField::LastTranslator => "lastTranslator",
            HeaderField::LanguageTeam => "languageTeam",
            HeaderField::MimeVersion => "mimeVersion",
            HeaderField::ContentType => "contentType",
            HeaderField::ContentTransferEncoding => "contentTransferEncoding",
            HeaderField::GeneratedBy => "generatedBy",
            HeaderField::Language => "language",
            HeaderField::PluralForms => "pluralForms",
        }
    }

    /// The name of the field in the PO header.
    pub fn label(self) -> &'static str {
        match self {
            HeaderField::ProjectIdVersion => "Project-Id-Version",
            HeaderField::ReportMsgidBugsTo => "Report-Msgid-Bugs-To",
            HeaderField::PotCreationDate => "POT-Creation-Date",
            HeaderField::PoRevisionDate => "PO-Revision-Date",
            HeaderField::LastTranslator => "Last-Translator",
            HeaderField::LanguageTeam => "Language-Team",
            HeaderField::MimeVersion => "MIME-Version",
            HeaderField::ContentType => "Content-Type",
            HeaderField::ContentTransferEncoding => "Content-Transfer-Encoding",
            HeaderField::GeneratedBy => "Generated-By",
            HeaderField::Language => "Language",
            HeaderField::PluralForms => "Plural-Forms",
        }
    }

    /// Render `value` as an unquoted header line, including the
    /// trailing newline.
    fn render(self, value: &MetadataValue) -> Result<String> {
        match (self, value) {
            (HeaderField::LastTranslator, MetadataValue::Translator(translator)) => Ok(format!(
                "{}: {} <{}>\n",
                self.label(),
                translator.name,
                translator.email
            )),
            (HeaderField::LastTranslator, MetadataValue::Text(_))
            | (_, MetadataValue::Translator(_)) => Err(Error::InvalidMetadataValue(self.key())),
            (_, MetadataValue::Text(text)) => Ok(format!("{}: {text}\n", self.label())),
        }
    }
}

/// Build the header of the output file.
///
/// Without `meta`, this is the template header of a fresh POT file,
/// filled in from `initial_meta` and `generation_date`. With `meta`,
/// the header has one line per metadata field, in the order of the
/// metadata.
///
/// A header built from `meta` must have a `Plural-Forms` field when
/// `has_plural_forms` is set. Either way, the header ends with an empty
/// line.
pub fn build_header(
    meta: Option<&TranslationMetadata>,
    initial_meta: &InitialMeta,
    generation_date: &str,
    has_plural_forms: bool,
) -> Result<String> {
    match meta {
        None => Ok(template_header(initial_meta, generation_date)),
        Some(meta) => metadata_header(meta, has_plural_forms),
    }
}

fn template_header(initial_meta: &InitialMeta, generation_date: &str) -> String {
    let year = initial_meta
        .year
        .map(|year| year.to_string())
        .unwrap_or_default();
    let copyright_subject = initial_meta.copyright_subject.as_deref().unwrap_or_default();
    let bugs_email = initial_meta.bugs_email.as_deref().unwrap_or_default();
    format!(
        r#"# Translations template for PROJECT.
# Copyright (C) {year} {copyright_subject}
# This file is distributed under the same license as the PROJECT project.
# FIRST AUTHOR <EMAIL@ADDRESS>, {year}.
# 
#, fuzzy
msgid ""
msgstr ""
"Project-Id-Version: PROJECT VERSION\n"
"Report-Msgid-Bugs-To: {bugs_email}\n"
"POT-Creation-Date: {generation_date}\n"
"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
"Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
"Language-Team: LANGUAGE <LL@li.org>\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=utf-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Generated-By: i18n-json2po\n"

"#
    )
}

fn metadata_header(meta: &TranslationMetadata, has_plural_forms: bool) -> Result<String> {
    let mut lines = vec![String::from(r#"msgid """#), String::from(r#"msgstr """#)];
    let mut plural_forms_found = false;
    for (key, value) in meta.iter() {
        let field = HeaderField::from_key(key)
            .ok_or_else(|| Error::UnknownMetadataField(String::from(key)))?;
        if field == HeaderField::PluralForms {
            plural_forms_found = true;
        }
        lines.push(quote(&field.render(value)?));
    }

    if has_plural_forms && !plural_forms_found {
        return Err(Error::MissingPluralForms);
    }

    Ok(lines.join("\n") + "\n\n")
}
