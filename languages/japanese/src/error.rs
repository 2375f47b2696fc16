use crate::verb::VerbForm;

/// Errors raised by the kanji and word dictionaries
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error(
        "A word written '{written}' already exists with reading '{existing}', cannot put reading '{incoming}'; destroy or replace it first"
    )]
    Conflict {
        written: String,
        existing: String,
        incoming: String,
    },

    #[error("Kanji '{character}' belongs to a different kanji dictionary")]
    ForeignKanji { character: char },

    #[error("A word needs at least one segment")]
    EmptyWord,

    #[error("Reading '{furigana}' of kanji '{character}' has no attached words")]
    ReadingNotAttached { character: char, furigana: String },
}

/// Validation errors for verb forms and verb construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerbError {
    #[error("'{0}' is not a recognized verb form")]
    UnknownForm(String),

    #[error("'{0}' is not a verb class")]
    UnknownClass(String),

    #[error("'{0}' is not a valid dictionary verb ending")]
    InvalidEnding(String),

    #[error("Written form '{written}' and pronounced form '{pronounced}' do not share a verb ending")]
    MismatchedEnding { written: String, pronounced: String },

    #[error("'{0}' has no verb ending to split off")]
    NoEnding(String),
}

/// Lookup misses while conjugating
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConjugationError {
    #[error("Verb form '{0}' is not registered")]
    FormNotRegistered(VerbForm),

    #[error("Verb form '{form}' has no entry for ending '{ending}'")]
    MissingEnding { form: VerbForm, ending: String },

    #[error("Verb form '{0}' has no regular B entry")]
    MissingRegularB(VerbForm),

    #[error("Verb form '{form}' has no entry for irregular verb '{lexeme}'")]
    MissingLexeme { form: VerbForm, lexeme: String },
}

/// Errors while loading a conjugation table source
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
