use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("field `{0}` is required and cannot be null")]
    RequiredField(&'static str),
}
