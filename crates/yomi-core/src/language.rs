use crate::card::CardFace;

/// Inflects a verb into a requested grammatical form.
///
/// Implementations never mutate the verb; the result is a fresh surface form.
pub trait Conjugator: Send + Sync {
    type Verb;
    type Form;
    type Error: std::error::Error;

    fn conjugate(
        &self,
        verb: &Self::Verb,
        form: &Self::Form,
    ) -> Result<ConjugationResult, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationResult {
    pub written: String,
    pub pronounced: String,
    pub definition: String,
    /// Human readable form label, e.g. "Polite Negative Past Indicative"
    pub form_label: String,
}

impl CardFace for ConjugationResult {
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
