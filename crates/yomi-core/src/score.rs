use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Success/attempt counter used for practice scoring.
///
/// `successes <= attempts` always holds. Scores aggregate by summing both
/// fields, so the score of a kanji is the sum of the scores of its readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScore")]
pub struct Score {
    successes: u64,
    attempts: u64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("There cannot be more successes ({successes}) than attempts ({attempts})")]
    SuccessesExceedAttempts { successes: u64, attempts: u64 },
}

impl Score {
    /// Empty score with no attempts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score from explicit counts.
    pub fn from_counts(successes: u64, attempts: u64) -> Result<Self, ScoreError> {
        if successes > attempts {
            return Err(ScoreError::SuccessesExceedAttempts {
                successes,
                attempts,
            });
        }

        Ok(Self {
            successes,
            attempts,
        })
    }

    /// Sum of several scores.
    pub fn aggregate<'a>(scores: impl IntoIterator<Item = &'a Score>) -> Self {
        scores.into_iter().copied().sum()
    }

    /// Record one attempt.
    pub fn attempt(&mut self, succeeded: bool) {
        if succeeded {
            self.successes += 1;
        }
        self.attempts += 1;
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn failures(&self) -> u64 {
        self.attempts - self.successes
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Success rate in `0.0..=1.0`. NaN when nothing has been attempted.
    pub fn rate(&self) -> f64 {
        self.successes as f64 / self.attempts as f64
    }

    /// Rate as a percentage with two decimals, e.g. `46.67%`.
    pub fn display_rate(&self) -> String {
        format!("{:.2}%", self.rate() * 100.0)
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score {
            successes: self.successes + rhs.successes,
            attempts: self.attempts + rhs.attempts,
        }
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Self {
        iter.fold(Score::new(), Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.successes, self.attempts)
    }
}

#[derive(Deserialize)]
struct RawScore {
    successes: u64,
    attempts: u64,
}

impl TryFrom<RawScore> for Score {
    type Error = ScoreError;

    fn try_from(raw: RawScore) -> Result<Self, Self::Error> {
        Score::from_counts(raw.successes, raw.attempts)
    }
}
