use serde::{Deserialize, Serialize};

/// Flat three-sided card handed to whatever renders flashcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCard {
    pub term: String,
    pub reading: String,
    pub definition: String,
}

impl DisplayCard {
    pub fn new(
        term: impl Into<String>,
        reading: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            reading: reading.into(),
            definition: definition.into(),
        }
    }

    /// Sides in display order: term, reading, definition.
    pub fn sides(&self) -> [&str; 3] {
        [&self.term, &self.reading, &self.definition]
    }
}
