pub mod card;
pub mod language;
pub mod normalize;
pub mod score;
pub mod types;

pub use card::CardFace;
pub use language::{ConjugationResult, Conjugator};
pub use normalize::{DefaultNormalizer, Normalizer};
pub use score::{Score, ScoreError};
pub use types::DisplayCard;
