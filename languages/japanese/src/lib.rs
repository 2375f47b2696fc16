pub mod conjugator;
pub mod error;
pub mod kanji;
pub mod kanji_dictionary;
pub mod loader;
pub mod registry;
pub mod verb;
pub mod word;
pub mod word_dictionary;

#[cfg(test)]
mod tests;

pub use conjugator::JapaneseConjugator;
pub use error::{ConjugationError, LexiconError, LoadError, VerbError};
pub use kanji::{DictionaryId, KanjiEntry, KanjiId, KanjiUse, Reading};
pub use kanji_dictionary::KanjiDictionary;
pub use loader::TableLoader;
pub use registry::{ConjugationRegistry, ConjugationTable};
pub use verb::{FormName, Inflection, Verb, VerbClass, VerbEnding, VerbForm};
pub use word::{Segment, Word, WordBuilder};
pub use word_dictionary::{WordDictionary, WordId};
