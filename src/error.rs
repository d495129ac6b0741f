use thiserror::Error;

/// A sentence count that could not be turned into an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("sentence count is empty")]
    Empty,
    #[error("sentence count `{value}` is not an integer")]
    NotAnInteger { value: String },
    #[error("sentence count `{value}` is out of range")]
    OutOfRange { value: String },
}
