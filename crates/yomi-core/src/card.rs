use crate::types::DisplayCard;

/// Anything that can be shown as a written/pronounced/definition triple.
pub trait CardFace {
    /// Surface form as written (kanji and kana mixed)
    fn written_form(&self) -> &str;

    /// Surface form in kana only
    fn pronounced_form(&self) -> &str;

    fn definition(&self) -> &str;

    /// Convert to a flat display card
    fn to_display_card(&self) -> DisplayCard {
        DisplayCard::new(
            self.written_form(),
            self.pronounced_form(),
            self.definition(),
        )
    }
}
