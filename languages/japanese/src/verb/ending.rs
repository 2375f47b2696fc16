use std::fmt;
use std::str::FromStr;

use crate::error::VerbError;

/// Kana a dictionary-form verb can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerbEnding {
    U,
    Tsu,
    Ru,
    Bu,
    Mu,
    Nu,
    Ku,
    Gu,
    Su,
}

impl VerbEnding {
    pub const ALL: [VerbEnding; 9] = [
        VerbEnding::U,
        VerbEnding::Tsu,
        VerbEnding::Ru,
        VerbEnding::Bu,
        VerbEnding::Mu,
        VerbEnding::Nu,
        VerbEnding::Ku,
        VerbEnding::Gu,
        VerbEnding::Su,
    ];

    pub fn kana(&self) -> &'static str {
        match self {
            VerbEnding::U => "う",
            VerbEnding::Tsu => "つ",
            VerbEnding::Ru => "る",
            VerbEnding::Bu => "ぶ",
            VerbEnding::Mu => "む",
            VerbEnding::Nu => "ぬ",
            VerbEnding::Ku => "く",
            VerbEnding::Gu => "ぐ",
            VerbEnding::Su => "す",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'う' => Some(VerbEnding::U),
            'つ' => Some(VerbEnding::Tsu),
            'る' => Some(VerbEnding::Ru),
            'ぶ' => Some(VerbEnding::Bu),
            'む' => Some(VerbEnding::Mu),
            'ぬ' => Some(VerbEnding::Nu),
            'く' => Some(VerbEnding::Ku),
            'ぐ' => Some(VerbEnding::Gu),
            'す' => Some(VerbEnding::Su),
            _ => None,
        }
    }
}

impl FromStr for VerbEnding {
    type Err = VerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                VerbEnding::from_char(c).ok_or_else(|| VerbError::InvalidEnding(s.to_string()))
            }
            _ => Err(VerbError::InvalidEnding(s.to_string())),
        }
    }
}

impl fmt::Display for VerbEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kana())
    }
}
