use arbitrary::Arbitrary;
use i18n_json2po::{PluralEntry, SingleEntry, TranslationItem, TranslationMetadata};

/// Wrapper enum for generating arbitrary `TranslationItem`s.
#[derive(Arbitrary, Debug)]
pub enum Item {
    Single {
        entry: String,
        context: Option<String>,
        comments: Option<Vec<String>>,
        occurrences: Option<Vec<String>>,
        translation: Option<String>,
    },
    Plural {
        entry: [String; 2],
        context: Option<String>,
        comments: Option<Vec<String>>,
        occurrences: Option<Vec<String>>,
        translations: Option<Vec<String>>,
    },
}

impl From<Item> for TranslationItem {
    fn from(other: Item) -> TranslationItem {
        match other {
            Item::Single {
                entry,
                context,
                comments,
                occurrences,
                translation,
            } => TranslationItem::Single(SingleEntry {
                entry,
                context,
                comments,
                occurrences,
                translation,
            }),
            Item::Plural {
                entry,
                context,
                comments,
                occurrences,
                translations,
            } => TranslationItem::Plural(PluralEntry {
                entry,
                context,
                comments,
                occurrences,
                translations,
            }),
        }
    }
}

/// Generate metadata from arbitrary key-value pairs.
pub fn create_metadata(fields: Vec<(String, String)>) -> TranslationMetadata {
    fields.into_iter().collect()
}
