use crate::path::Path;

/// The schema document itself is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{message} (at '{path}')")]
    Invalid { path: Path, message: String },
}

impl SchemaError {
    pub fn invalid(path: Path, message: impl Into<String>) -> Self {
        SchemaError::Invalid {
            path,
            message: message.into(),
        }
    }
}
