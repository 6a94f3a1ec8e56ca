//! Built-in dataset used when no valid persisted state exists.

use crate::model::collection::DictionaryCollection;
use crate::model::dictionary::Dictionary;

const EN_RU: (&str, &str, &str, [(&str, &str); 3]) = (
    "en-ru",
    "English",
    "Russian",
    [("hello", "привет"), ("world", "мир"), ("computer", "компьютер")],
);
const DE_RU: (&str, &str, &str, [(&str, &str); 3]) = (
    "de-ru",
    "German",
    "Russian",
    [("hallo", "привет"), ("welt", "мир"), ("computer", "компьютер")],
);
const FR_RU: (&str, &str, &str, [(&str, &str); 3]) = (
    "fr-ru",
    "French",
    "Russian",
    [("bonjour", "привет"), ("monde", "мир"), ("ordinateur", "компьютер")],
);

/// Builds a fresh collection holding the three seed dictionaries.
///
/// Returns a new value on every call; nothing is shared between callers.
pub fn default_collection() -> DictionaryCollection {
    let mut collection = DictionaryCollection::new();
    for (key, from, to, words) in [EN_RU, DE_RU, FR_RU] {
        let mut dict = Dictionary::new(from, to);
        for (word, translation) in words {
            dict.add_word(word, translation);
        }
        collection.add_dictionary(key, dict);
    }
    collection
}
