use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Option index {index} out of range (draft has {len} options)")]
    OptionIndex { index: usize, len: usize },

    #[error("Invalid team id: {0}")]
    InvalidTeamId(String),
}
