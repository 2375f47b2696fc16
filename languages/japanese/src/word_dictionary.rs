use std::collections::HashMap;

use crate::error::LexiconError;
use crate::kanji_dictionary::KanjiDictionary;
use crate::word::Word;

/// Stable handle to a stored word. Two puts that hand back the same id refer
/// to the same stored instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

/// Words keyed by written form, governing a kanji dictionary.
///
/// At most one live word exists per written form. Destroyed words leave an
/// empty slot behind so ids are never reused.
#[derive(Debug, Default)]
pub struct WordDictionary {
    kanji: KanjiDictionary,
    slots: Vec<Option<Word>>,
    index: HashMap<String, WordId>,
}

impl WordDictionary {
    pub fn new(kanji: KanjiDictionary) -> Self {
        Self {
            kanji,
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn kanji(&self) -> &KanjiDictionary {
        &self.kanji
    }

    /// Kanji dictionary words for this dictionary must be built against
    pub fn kanji_mut(&mut self) -> &mut KanjiDictionary {
        &mut self.kanji
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Store `word`.
    ///
    /// If a word with the same written form and reading is already stored,
    /// its id is returned and `word` is discarded. A stored word with a
    /// different reading is a conflict: destroy or replace it first. Either
    /// way the kanji index ends up describing the stored word only.
    pub fn put(&mut self, word: Word) -> Result<WordId, LexiconError> {
        for binding in word.kanji_uses() {
            self.kanji.check(binding)?;
        }

        let existing = self
            .index
            .get(word.written_form())
            .and_then(|&id| self.slots[id.0].as_ref().map(|stored| (id, stored)));

        let Some((id, stored)) = existing else {
            word.attach(&mut self.kanji)?;
            return Ok(self.insert(word));
        };

        // Both words share one key, so detaching the incoming word and then
        // reattaching the stored one leaves only the stored word's readings.
        word.detach(&mut self.kanji)?;
        stored.attach(&mut self.kanji)?;

        if stored.pronounced_form() != word.pronounced_form() {
            return Err(LexiconError::Conflict {
                written: word.written_form().to_string(),
                existing: stored.pronounced_form().to_string(),
                incoming: word.pronounced_form().to_string(),
            });
        }

        tracing::debug!("Word '{}' already stored", stored.written_form());
        Ok(id)
    }

    /// Overwrite the stored word with `word` in place, keeping its id.
    /// Behaves like [`Self::put`] when nothing is stored under that form.
    pub fn replace(&mut self, word: Word) -> Result<WordId, LexiconError> {
        for binding in word.kanji_uses() {
            self.kanji.check(binding)?;
        }

        let Some(id) = self.id_of(word.written_form()) else {
            return self.put(word);
        };
        let Some(stored) = self.slots[id.0].as_mut() else {
            return self.put(word);
        };

        stored.detach(&mut self.kanji)?;
        stored.overwrite(word);
        stored.attach(&mut self.kanji)?;
        tracing::debug!("Replaced word '{}'", stored.written_form());
        Ok(id)
    }

    /// Stored word for `written`, if any
    pub fn get(&self, written: &str) -> Option<&Word> {
        self.id_of(written).and_then(|id| self.word(id))
    }

    pub fn id_of(&self, written: &str) -> Option<WordId> {
        self.index.get(written).copied()
    }

    /// Word behind `id`; `None` once it has been destroyed
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.slots.iter().flatten()
    }

    /// Record an attempt on every kanji reading used by the stored word
    pub fn attempt(&mut self, written: &str, succeeded: bool) -> Result<bool, LexiconError> {
        let Some(id) = self.id_of(written) else {
            return Ok(false);
        };
        if let Some(word) = self.slots[id.0].as_ref() {
            word.attempt(&mut self.kanji, succeeded)?;
        }
        Ok(true)
    }

    /// Remove the word, detach it from its kanji and invalidate its id.
    /// Returns whether a word was stored under `written`.
    pub fn destroy(&mut self, written: &str) -> Result<bool, LexiconError> {
        let Some(id) = self.index.remove(written) else {
            return Ok(false);
        };

        if let Some(word) = self.slots[id.0].take() {
            word.destroy(&mut self.kanji)?;
        }
        Ok(true)
    }

    fn insert(&mut self, word: Word) -> WordId {
        let id = WordId(self.slots.len());
        self.index.insert(word.written_form().to_string(), id);
        self.slots.push(Some(word));
        id
    }
}
