use thiserror::Error;

/// Errors raised while reading the textual forms of problem inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected a bracketed list like [1,2,3], got `{0}`")]
    NotAList(String),
    #[error("invalid integer `{0}`")]
    InvalidInteger(String),
    #[error("missing `{0} = ...` in example input")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("problem not found: {0}")]
    NotFound(String),
}
