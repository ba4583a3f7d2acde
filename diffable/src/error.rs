use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a style or lexicon refused something.
///
/// Edits that fail with any of these are vetoed: the field keeps its previous text
/// and selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{character:?} is invalid")]
    Invalid { character: char },

    #[error("unexpected {character:?} in number")]
    Unexpected { character: char },

    #[error("exceeded pattern capacity {capacity}")]
    PatternCapacity { capacity: usize },

    #[error("negative values are not allowed")]
    Unsigned,

    #[error("unknown locale {identifier:?}")]
    UnknownLocale { identifier: String },

    #[error("{character:?} is mapped to more than one {table}")]
    AmbiguousLexicon { character: char, table: &'static str },

    #[error("the field is not being edited")]
    Inactive,
}
