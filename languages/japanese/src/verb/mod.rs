use std::fmt;
use std::str::FromStr;

use yomi_core::CardFace;

use crate::error::VerbError;
use crate::word::{Segment, Word};

pub mod ending;
pub mod form;

pub use ending::VerbEnding;
pub use form::{FormName, VerbForm};

/// Inflection class a verb is declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    /// Stem-final consonant varies with the ending (godan)
    RegularA,
    /// Stem stays, `る` is swapped for the form's ending (ichidan)
    RegularB,
    /// Looked up as a whole lexeme
    Irregular,
}

impl FromStr for VerbClass {
    type Err = VerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "regulara" | "godan" => Ok(VerbClass::RegularA),
            "regularb" | "ichidan" => Ok(VerbClass::RegularB),
            "irregular" => Ok(VerbClass::Irregular),
            _ => Err(VerbError::UnknownClass(s.to_string())),
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbClass::RegularA => f.write_str("regular A"),
            VerbClass::RegularB => f.write_str("regular B"),
            VerbClass::Irregular => f.write_str("irregular"),
        }
    }
}

/// How a verb is inflected, with exactly the data each class needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inflection {
    RegularA {
        written_base: String,
        pronounced_base: String,
        ending: VerbEnding,
    },
    RegularB {
        written_base: String,
        pronounced_base: String,
    },
    Irregular {
        lexeme: String,
    },
}

impl Inflection {
    pub fn class(&self) -> VerbClass {
        match self {
            Inflection::RegularA { .. } => VerbClass::RegularA,
            Inflection::RegularB { .. } => VerbClass::RegularB,
            Inflection::Irregular { .. } => VerbClass::Irregular,
        }
    }
}

/// A dictionary-form verb ready to be conjugated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    written: String,
    pronounced: String,
    definition: String,
    inflection: Inflection,
}

impl Verb {
    /// Split a dictionary-form verb according to its class.
    ///
    /// Regular verbs must end in the same ending kana in both forms; regular B
    /// verbs must end in `る`.
    pub fn new(
        written: impl Into<String>,
        pronounced: impl Into<String>,
        definition: impl Into<String>,
        class: VerbClass,
    ) -> Result<Self, VerbError> {
        let written = written.into();
        let pronounced = pronounced.into();

        let inflection = match class {
            VerbClass::Irregular => {
                if written.is_empty() {
                    return Err(VerbError::NoEnding(written));
                }
                Inflection::Irregular {
                    lexeme: written.clone(),
                }
            }
            VerbClass::RegularA => {
                let (written_base, pronounced_base, ending) = split(&written, &pronounced)?;
                Inflection::RegularA {
                    written_base,
                    pronounced_base,
                    ending,
                }
            }
            VerbClass::RegularB => {
                let (written_base, pronounced_base, ending) = split(&written, &pronounced)?;
                if ending != VerbEnding::Ru {
                    return Err(VerbError::InvalidEnding(ending.to_string()));
                }
                Inflection::RegularB {
                    written_base,
                    pronounced_base,
                }
            }
        };

        Ok(Self {
            written,
            pronounced,
            definition: definition.into(),
            inflection,
        })
    }

    /// Verb view of a word. Regular verbs need the word to end in a kana
    /// segment carrying the ending.
    pub fn from_word(word: &Word, class: VerbClass) -> Result<Self, VerbError> {
        if class != VerbClass::Irregular
            && !matches!(word.segments().last(), Some(Segment::Kana(_)))
        {
            return Err(VerbError::NoEnding(word.written_form().to_string()));
        }

        Self::new(
            word.written_form(),
            word.pronounced_form(),
            word.definition(),
            class,
        )
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

    pub fn inflection(&self) -> &Inflection {
        &self.inflection
    }

    pub fn class(&self) -> VerbClass {
        self.inflection.class()
    }

    /// Dictionary ending, absent for irregular verbs
    pub fn ending(&self) -> Option<VerbEnding> {
        match &self.inflection {
            Inflection::RegularA { ending, .. } => Some(*ending),
            Inflection::RegularB { .. } => Some(VerbEnding::Ru),
            Inflection::Irregular { .. } => None,
        }
    }
}

impl CardFace for Verb {
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

/// Split off the shared final kana of both forms
fn split(written: &str, pronounced: &str) -> Result<(String, String, VerbEnding), VerbError> {
    let (Some(w), Some(p)) = (written.chars().last(), pronounced.chars().last()) else {
        return Err(VerbError::NoEnding(written.to_string()));
    };

    if w != p {
        return Err(VerbError::MismatchedEnding {
            written: written.to_string(),
            pronounced: pronounced.to_string(),
        });
    }

    let ending = VerbEnding::from_char(w).ok_or_else(|| VerbError::InvalidEnding(w.to_string()))?;
    Ok((
        written[..written.len() - w.len_utf8()].to_string(),
        pronounced[..pronounced.len() - p.len_utf8()].to_string(),
        ending,
    ))
}
