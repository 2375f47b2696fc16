use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use yomi_core::Score;

use crate::error::LexiconError;

/// Process-unique tag of a [`crate::KanjiDictionary`].
///
/// Bindings remember the dictionary that issued them so a word built from
/// another dictionary's kanji can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictionaryId(u64);

impl DictionaryId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Slot of a kanji entry inside its dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KanjiId(pub(crate) usize);

/// One kanji read one particular way.
///
/// This is the handle through which words get attached to or detached from
/// a kanji entry and through which attempts are recorded. It does not own the
/// entry; it only names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KanjiUse {
    dictionary: DictionaryId,
    kanji: KanjiId,
    character: char,
    furigana: String,
}

impl KanjiUse {
    pub fn dictionary(&self) -> DictionaryId {
        self.dictionary
    }

    pub fn kanji(&self) -> KanjiId {
        self.kanji
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn furigana(&self) -> &str {
        &self.furigana
    }
}

/// A pronunciation of a kanji with the words that use it
#[derive(Debug, Clone)]
pub struct Reading {
    furigana: String,
    words: BTreeSet<String>,
    score: Score,
}

impl Reading {
    fn new(furigana: &str) -> Self {
        Self {
            furigana: furigana.to_string(),
            words: BTreeSet::new(),
            score: Score::new(),
        }
    }

    pub fn furigana(&self) -> &str {
        &self.furigana
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Written forms of the words using this reading
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

/// A kanji, its meaning, and the words that use it split by reading.
///
/// Readings stay ordered by descending word count. The order is maintained
/// one step at a time on attach; detach leaves it alone and never removes a
/// reading, so emptied readings stay addressable.
#[derive(Debug, Clone)]
pub struct KanjiEntry {
    id: KanjiId,
    dictionary: DictionaryId,
    character: char,
    meaning: String,
    readings: Vec<Reading>,
    words: BTreeSet<String>,
}

impl KanjiEntry {
    pub(crate) fn new(
        id: KanjiId,
        dictionary: DictionaryId,
        character: char,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id,
            dictionary,
            character,
            meaning: meaning.into(),
            readings: Vec::new(),
            words: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> KanjiId {
        self.id
    }

    pub fn dictionary(&self) -> DictionaryId {
        self.dictionary
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// Replace the meaning. Returns whether it changed; a change is logged.
    pub fn set_meaning(&mut self, meaning: impl Into<String>) -> bool {
        let meaning = meaning.into();
        if self.meaning == meaning {
            return false;
        }

        tracing::warn!(
            "Meaning of kanji '{}' changed from '{}' to '{}'",
            self.character,
            self.meaning,
            meaning
        );
        self.meaning = meaning;
        true
    }

    /// Binding for this kanji read as `furigana`. The reading itself is only
    /// created once a word is attached through it.
    pub fn with_reading(&self, furigana: impl Into<String>) -> KanjiUse {
        KanjiUse {
            dictionary: self.dictionary,
            kanji: self.id,
            character: self.character,
            furigana: furigana.into(),
        }
    }

    /// Readings in descending order of word count
    pub fn readings(&self) -> impl Iterator<Item = &str> {
        self.readings.iter().map(Reading::furigana)
    }

    pub fn reading(&self, furigana: &str) -> Option<&Reading> {
        self.readings.iter().find(|r| r.furigana == furigana)
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub fn num_words_for(&self, furigana: &str) -> usize {
        self.reading(furigana).map_or(0, Reading::num_words)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn words_for(&self, furigana: &str) -> Vec<&str> {
        self.reading(furigana)
            .map(|r| r.words().collect())
            .unwrap_or_default()
    }

    /// Score of one reading, empty if the reading was never created
    pub fn score(&self, furigana: &str) -> Score {
        self.reading(furigana).map(Reading::score).unwrap_or_default()
    }

    /// Sum of every reading's score
    pub fn total_score(&self) -> Score {
        self.readings.iter().map(Reading::score).sum()
    }

    /// Attach `word` under the binding's reading, creating the reading if needed.
    pub fn attach(&mut self, binding: &KanjiUse, word: &str) {
        self.debug_check(binding);

        let (mut i, mut reading) = match self.position(&binding.furigana) {
            Some(i) => (i, self.readings.remove(i)),
            None => (self.readings.len(), Reading::new(&binding.furigana)),
        };

        self.words.insert(word.to_string());
        reading.words.insert(word.to_string());

        // Move ahead of every reading with fewer words
        while i != 0 && self.readings[i - 1].num_words() < reading.num_words() {
            i -= 1;
        }
        self.readings.insert(i, reading);

        tracing::debug!(
            "Attached '{}' to kanji '{}' read '{}'",
            word,
            self.character,
            binding.furigana
        );
    }

    /// Remove `word` from the entry and from the binding's reading
    pub fn detach(&mut self, binding: &KanjiUse, word: &str) {
        self.debug_check(binding);

        self.words.remove(word);
        if let Some(i) = self.position(&binding.furigana) {
            self.readings[i].words.remove(word);
        }

        tracing::debug!(
            "Detached '{}' from kanji '{}' read '{}'",
            word,
            self.character,
            binding.furigana
        );
    }

    /// Record an attempt against the binding's reading.
    ///
    /// Fails without recording anything if no word was ever attached
    /// through that reading.
    pub fn attempt(&mut self, binding: &KanjiUse, succeeded: bool) -> Result<(), LexiconError> {
        self.debug_check(binding);

        let i = self
            .position(&binding.furigana)
            .ok_or_else(|| LexiconError::ReadingNotAttached {
                character: self.character,
                furigana: binding.furigana.clone(),
            })?;
        self.readings[i].score.attempt(succeeded);
        Ok(())
    }

    fn position(&self, furigana: &str) -> Option<usize> {
        self.readings.iter().position(|r| r.furigana == furigana)
    }

    fn debug_check(&self, binding: &KanjiUse) {
        debug_assert_eq!(binding.kanji, self.id);
        debug_assert_eq!(binding.character, self.character);
    }
}
