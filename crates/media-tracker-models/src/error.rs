use thiserror::Error;

/// A field write rejected at the entity boundary. The entity is left
/// unchanged whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid rating {value}: rating must be between 0 and 5")]
    RatingOutOfRange { value: i32 },

    #[error("invalid episode count {value}: episodes watched cannot be negative")]
    NegativeEpisodes { value: i32 },

    #[error("invalid status type for {expected}: got a {actual} status")]
    StatusMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("unknown status '{input}'")]
    UnknownStatus { input: String },

    #[error("unknown filter field '{input}': expected status, genre or platform")]
    UnknownFilterField { input: String },
}
