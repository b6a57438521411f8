use thiserror::Error;

/// Errors produced by field rule checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("title must be at least {min} characters, got {actual}")]
    TitleTooShort { min: usize, actual: usize },
}
