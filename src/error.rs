use chrono::NaiveDateTime;
use thiserror::Error;

/// The only error the calculator engines produce. Arithmetic is total over
/// valid inputs, so everything else returns `Ok`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("name must not be empty")]
    EmptyName,

    #[error("birth date {birth} is after the target date {reference}")]
    BirthAfterReference {
        birth: NaiveDateTime,
        reference: NaiveDateTime,
    },

    #[error("malformed date {text:?}: {source}")]
    MalformedDate {
        text: String,
        source: chrono::ParseError,
    },
}
