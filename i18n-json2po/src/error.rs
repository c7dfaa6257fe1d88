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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input is not JSON or does not have the shape of a translation
    /// document.
    #[error("Malformed translation document: {0}")]
    MalformedInput(#[from] serde_json::Error),
    /// The document has plural entries, but the metadata has no
    /// `pluralForms` field.
    #[error("Translation has some plural forms, but Plural-Forms header was not found")]
    MissingPluralForms,
    #[error("Unknown metadata field: {0}")]
    UnknownMetadataField(String),
    #[error("Unexpected value for metadata field {0}")]
    InvalidMetadataValue(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
