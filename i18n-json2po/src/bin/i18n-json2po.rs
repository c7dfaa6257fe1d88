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

//! `i18n-json2po`
//!
//! Converts the JSON document written by a string extraction step
//! into a Gettext PO file. Documents without metadata become a POT
//! template, documents with metadata become a PO file with the
//! translations they carry.

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use i18n_json2po::{convert_document, format_timestamp, InitialMeta, TranslationDocument};
use log::{debug, info};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Debug, Parser)]
#[command(version, about = "Convert a JSON translation document to a PO or POT file")]
struct Args {
    /// The JSON document to convert. Reads from stdin when absent.
    #[arg(short, long, value_name = "messages.json")]
    input: Option<PathBuf>,
    /// Where to write the PO file. Writes to stdout when absent.
    #[arg(short, long, value_name = "messages.pot")]
    output: Option<PathBuf>,
    /// Copyright holder named in the header of a template.
    #[arg(long)]
    copyright_subject: Option<String>,
    /// Address for bug reports about the source strings of a template.
    #[arg(long)]
    bugs_email: Option<String>,
    /// Copyright year of a template. Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,
    /// Write the source locations of the messages as `#:` comments.
    #[arg(long)]
    print_occurrences: bool,
}

impl Args {
    fn initial_meta(&self) -> InitialMeta {
        InitialMeta {
            copyright_subject: self.copyright_subject.clone(),
            bugs_email: self.bugs_email.clone(),
            year: Some(self.year.unwrap_or_else(|| chrono::Local::now().year())),
        }
    }
}

fn ingest_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read from file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Writing messages to {}", path.display())),
        None => io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .context("Writing messages to stdout"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));
    let args = Args::parse();

    let input = args.input.as_deref();
    info!(
        "Converting {}",
        input.map_or(String::from("stdin"), |path| path.display().to_string())
    );
    let json = ingest_input(input)?;
    // Parse here rather than calling `convert` so the item count can be logged.
    let document =
        TranslationDocument::from_json(&json).context("Parsing translation document")?;
    debug!(
        "Read {} items, writing a {} file",
        document.items.len(),
        if document.meta.is_some() { "PO" } else { "POT" }
    );

    let generation_date = format_timestamp(&chrono::Local::now());
    let po = convert_document(
        &document,
        &args.initial_meta(),
        args.print_occurrences,
        &generation_date,
    )
    .context("Converting translation document")?;

    let output = args.output.as_deref();
    write_output(output, &po)?;
    if let Some(path) = output {
        info!("Wrote {}", path.display());
    }

    Ok(())
}
