#![no_main]

use i18n_json2po::{convert_document, InitialMeta, TranslationDocument};
use i18n_json2po_fuzz::{create_metadata, Item};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|inputs: (Vec<Item>, Option<Vec<(String, String)>>, bool)| {
    let (items, meta, print_occurrences) = inputs;
    let has_meta = meta.is_some();
    let document = TranslationDocument {
        items: items.into_iter().map(Into::into).collect(),
        meta: meta.map(create_metadata),
    };

    let result = convert_document(&document, &InitialMeta::default(), print_occurrences, "");
    if !has_meta {
        // Templates never fail.
        assert!(result.is_ok());
    }
});
