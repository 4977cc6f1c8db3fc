use thiserror::Error;

/// Errors produced while loading entities or rendering them as DSL text.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is neither a role nor an environment.
    #[error("[{0}] is not supported by ruby format")]
    UnsupportedEntityKind(String),

    /// A value of this kind cannot be rendered where it was found.
    #[error("Object type [{0}] is not supported")]
    UnsupportedValueKind(String),

    #[error("invalid run list item: {0:?}")]
    InvalidRunListItem(String),

    #[error("{kind} document is missing required field `{field}`")]
    MissingField { kind: &'static str, field: &'static str },

    #[error("{kind} field `{field}` must be {expected}")]
    InvalidField {
        kind: &'static str,
        field: String,
        expected: &'static str,
    },

    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
