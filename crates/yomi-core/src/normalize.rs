use unicode_normalization::UnicodeNormalization;

/// Folds text into the shape table cells and typed input are compared in:
/// compatibility forms collapsed by NFKC, control characters dropped, outer
/// whitespace trimmed.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> String {
        let folded: String = text.nfkc().filter(|c| !c.is_control()).collect();
        folded.trim().to_string()
    }
}

/// NFKC folding with no extra rules
pub struct DefaultNormalizer;

impl Normalizer for DefaultNormalizer {}
