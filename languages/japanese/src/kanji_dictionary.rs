use std::collections::HashMap;

use yomi_core::Score;

use crate::error::LexiconError;
use crate::kanji::{DictionaryId, KanjiEntry, KanjiId, KanjiUse};

/// Meaning given to kanji that are looked up before being created
pub const UNKNOWN_MEANING: &str = "?";

/// Registry of kanji entries, one per character.
///
/// Entries live in an id-indexed arena; bindings and words refer to them by
/// [`KanjiId`] and never hold the entry itself.
#[derive(Debug)]
pub struct KanjiDictionary {
    id: DictionaryId,
    entries: Vec<KanjiEntry>,
    index: HashMap<char, KanjiId>,
}

impl Default for KanjiDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl KanjiDictionary {
    pub fn new() -> Self {
        Self {
            id: DictionaryId::next(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn id(&self) -> DictionaryId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create an entry, or return the existing one for `character`.
    ///
    /// Re-creating a kanji is logged; its meaning is overwritten only when it
    /// differs.
    pub fn create(&mut self, character: char, meaning: &str) -> &mut KanjiEntry {
        if let Some(&id) = self.index.get(&character) {
            tracing::warn!("Kanji '{}' has already been created", character);
            let entry = &mut self.entries[id.0];
            entry.set_meaning(meaning);
            return entry;
        }

        let id = KanjiId(self.entries.len());
        self.entries
            .push(KanjiEntry::new(id, self.id, character, meaning));
        self.index.insert(character, id);
        &mut self.entries[id.0]
    }

    /// Entry for `character`, created with meaning `?` if missing.
    pub fn get(&mut self, character: char) -> &mut KanjiEntry {
        if let Some(&id) = self.index.get(&character) {
            return &mut self.entries[id.0];
        }

        tracing::warn!(
            "Kanji '{}' does not yet exist, its meaning defaults to '{}'",
            character,
            UNKNOWN_MEANING
        );
        self.create(character, UNKNOWN_MEANING)
    }

    /// Entry for `character` without creating it
    pub fn lookup(&self, character: char) -> Option<&KanjiEntry> {
        self.index.get(&character).map(|id| &self.entries[id.0])
    }

    pub fn entry(&self, id: KanjiId) -> Option<&KanjiEntry> {
        self.entries.get(id.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = &KanjiEntry> {
        self.entries.iter()
    }

    /// Binding for `character` read as `furigana`, creating the entry if needed
    pub fn with_reading(&mut self, character: char, furigana: &str) -> KanjiUse {
        self.get(character).with_reading(furigana)
    }

    /// Whether `binding` was issued by this dictionary
    pub fn contains(&self, binding: &KanjiUse) -> bool {
        binding.dictionary() == self.id
            && self
                .entries
                .get(binding.kanji().0)
                .is_some_and(|e| e.character() == binding.character())
    }

    pub fn attach(&mut self, binding: &KanjiUse, word: &str) -> Result<(), LexiconError> {
        self.entry_mut(binding)?.attach(binding, word);
        Ok(())
    }

    pub fn detach(&mut self, binding: &KanjiUse, word: &str) -> Result<(), LexiconError> {
        self.entry_mut(binding)?.detach(binding, word);
        Ok(())
    }

    pub fn attempt(&mut self, binding: &KanjiUse, succeeded: bool) -> Result<(), LexiconError> {
        self.entry_mut(binding)?.attempt(binding, succeeded)
    }

    /// Score of the binding's reading; empty if the reading does not exist
    pub fn score(&self, binding: &KanjiUse) -> Score {
        if !self.contains(binding) {
            return Score::new();
        }
        self.entries[binding.kanji().0].score(binding.furigana())
    }

    /// Fails unless every binding was issued by this dictionary
    pub(crate) fn check(&self, binding: &KanjiUse) -> Result<(), LexiconError> {
        if self.contains(binding) {
            Ok(())
        } else {
            Err(LexiconError::ForeignKanji {
                character: binding.character(),
            })
        }
    }

    /// Fails unless the binding's reading already exists
    pub(crate) fn check_reading(&self, binding: &KanjiUse) -> Result<(), LexiconError> {
        self.check(binding)?;
        match self.entries[binding.kanji().0].reading(binding.furigana()) {
            Some(_) => Ok(()),
            None => Err(LexiconError::ReadingNotAttached {
                character: binding.character(),
                furigana: binding.furigana().to_string(),
            }),
        }
    }

    fn entry_mut(&mut self, binding: &KanjiUse) -> Result<&mut KanjiEntry, LexiconError> {
        self.check(binding)?;
        Ok(&mut self.entries[binding.kanji().0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_is_idempotent_and_updates_meaning() {
        let mut dict = KanjiDictionary::new();
        let first = dict.create('人', "person").id();
        let second = dict.create('人', "human").id();

        assert_eq!(first, second);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup('人').unwrap().meaning(), "human");
    }

    #[test]
    fn get_auto_vivifies() {
        let mut dict = KanjiDictionary::new();
        assert!(dict.lookup('一').is_none());

        let entry = dict.get('一');
        assert_eq!(entry.character(), '一');
        assert_eq!(entry.meaning(), UNKNOWN_MEANING);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn get_returns_created_entry() {
        let mut dict = KanjiDictionary::new();
        let id = dict.create('一', "one").id();
        assert_eq!(dict.get('一').id(), id);
        assert_eq!(dict.get('一').meaning(), "one");
    }

    #[test]
    fn foreign_bindings_are_refused() {
        let mut ours = KanjiDictionary::new();
        let mut theirs = KanjiDictionary::new();
        ours.create('一', "one");
        let foreign = theirs.create('一', "one").with_reading("いち");

        assert!(!ours.contains(&foreign));
        assert_eq!(
            ours.attach(&foreign, "一"),
            Err(LexiconError::ForeignKanji { character: '一' })
        );
        assert_eq!(ours.score(&foreign).attempts(), 0);
    }

    #[test]
    fn attempt_through_dictionary() {
        let mut dict = KanjiDictionary::new();
        let ichi = dict.with_reading('一', "いち");

        assert!(matches!(
            dict.attempt(&ichi, true),
            Err(LexiconError::ReadingNotAttached { .. })
        ));

        dict.attach(&ichi, "一").unwrap();
        dict.attempt(&ichi, true).unwrap();
        dict.attempt(&ichi, false).unwrap();
        assert_eq!(dict.score(&ichi).successes(), 1);
        assert_eq!(dict.score(&ichi).attempts(), 2);
    }
}
