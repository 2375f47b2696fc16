use std::hash::{Hash, Hasher};

use yomi_core::CardFace;

use crate::error::LexiconError;
use crate::kanji::KanjiUse;
use crate::kanji_dictionary::KanjiDictionary;

/// One piece of a word: literal kana, or a kanji read a particular way
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Kana(String),
    Kanji(KanjiUse),
}

impl Segment {
    fn push_written(&self, out: &mut String) {
        match self {
            Segment::Kana(kana) => out.push_str(kana),
            Segment::Kanji(binding) => out.push(binding.character()),
        }
    }

    fn push_pronounced(&self, out: &mut String) {
        match self {
            Segment::Kana(kana) => out.push_str(kana),
            Segment::Kanji(binding) => out.push_str(binding.furigana()),
        }
    }
}

/// A word made of kana and kanji segments.
///
/// Identity is the written form alone: two words with the same written form
/// are equal and hash alike whatever their readings or definitions. Use
/// [`Word::same_content`] to compare every field.
#[derive(Debug, Clone)]
pub struct Word {
    written: String,
    pronounced: String,
    definition: String,
    segments: Vec<Segment>,
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.written == other.written
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.written.hash(state);
    }
}

impl Word {
    pub fn builder() -> WordBuilder {
        WordBuilder::new()
    }

    pub fn written_form(&self) -> &str {
        &self.written
    }

    pub fn pronounced_form(&self) -> &str {
        &self.pronounced
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Kanji bindings in segment order
    pub fn kanji_uses(&self) -> impl Iterator<Item = &KanjiUse> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Kanji(binding) => Some(binding),
            Segment::Kana(_) => None,
        })
    }

    /// Field-by-field comparison, unlike `==`
    pub fn same_content(&self, other: &Word) -> bool {
        self.written == other.written
            && self.pronounced == other.pronounced
            && self.definition == other.definition
            && self.segments == other.segments
    }

    /// Attach this word to every kanji it uses.
    ///
    /// All bindings are checked before anything is attached.
    pub fn attach(&self, kanji: &mut KanjiDictionary) -> Result<(), LexiconError> {
        for binding in self.kanji_uses() {
            kanji.check(binding)?;
        }
        for binding in self.kanji_uses() {
            kanji.attach(binding, &self.written)?;
        }
        Ok(())
    }

    /// Detach this word from every kanji it uses
    pub fn detach(&self, kanji: &mut KanjiDictionary) -> Result<(), LexiconError> {
        for binding in self.kanji_uses() {
            kanji.check(binding)?;
        }
        for binding in self.kanji_uses() {
            kanji.detach(binding, &self.written)?;
        }
        Ok(())
    }

    /// Record an attempt on every kanji reading used by this word.
    ///
    /// Nothing is recorded unless every reading exists.
    pub fn attempt(&self, kanji: &mut KanjiDictionary, succeeded: bool) -> Result<(), LexiconError> {
        for binding in self.kanji_uses() {
            kanji.check_reading(binding)?;
        }
        for binding in self.kanji_uses() {
            kanji.attempt(binding, succeeded)?;
        }
        Ok(())
    }

    /// Detach from every kanji and drop the word
    pub fn destroy(self, kanji: &mut KanjiDictionary) -> Result<(), LexiconError> {
        self.detach(kanji)?;
        tracing::debug!("Destroyed word '{}'", self.written);
        Ok(())
    }

    /// Take over `other`'s fields, keeping this instance
    pub(crate) fn overwrite(&mut self, other: Word) {
        self.written = other.written;
        self.pronounced = other.pronounced;
        self.definition = other.definition;
        self.segments = other.segments;
    }
}

impl CardFace for Word {
    fn written_form(&self) -> &str {
        &self.written
    }

    fn pronounced_form(&self) -> &str {
        &self.pronounced
    }

    fn definition(&self) -> &str {
        &self.definition
    }
}

/// Accumulates segments, then builds and attaches a [`Word`]
#[derive(Debug, Clone, Default)]
pub struct WordBuilder {
    segments: Vec<Segment>,
}

impl WordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kanji(mut self, binding: KanjiUse) -> Self {
        self.segments.push(Segment::Kanji(binding));
        self
    }

    pub fn kana(mut self, kana: impl Into<String>) -> Self {
        let kana = kana.into();
        if !kana.is_empty() {
            self.segments.push(Segment::Kana(kana));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Written form the word would get
    pub fn written_form(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.push_written(&mut out);
        }
        out
    }

    /// Pronounced form the word would get
    pub fn pronounced_form(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.push_pronounced(&mut out);
        }
        out
    }

    /// Finish the word and attach it to every kanji it uses
    pub fn build(
        self,
        definition: impl Into<String>,
        kanji: &mut KanjiDictionary,
    ) -> Result<Word, LexiconError> {
        if self.segments.is_empty() {
            return Err(LexiconError::EmptyWord);
        }

        let word = Word {
            written: self.written_form(),
            pronounced: self.pronounced_form(),
            definition: definition.into(),
            segments: self.segments,
        };
        word.attach(kanji)?;
        Ok(word)
    }
}
