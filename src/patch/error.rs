use crate::path::Path;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("Failed to resolve path: {0}")]
    ResolveError(#[from] crate::resolve::ResolveError),

    #[error("Cannot change '{path}': the document is absent")]
    MissingDocument { path: Path },

    #[error("Nothing to remove at '{path}'")]
    TargetNotFound { path: Path },

    #[error("Index {index} at '{path}' is out of bounds for a list of length {len}")]
    IndexOutOfBounds { path: Path, index: usize, len: usize },

    #[error("Key '{key}' at '{path}' cannot address a list element")]
    InvalidListIndex { path: Path, key: String },

    #[error("Parent '{parent}' is a {actual}, not a mapping or list")]
    NotAContainer { parent: Path, actual: &'static str },
}

impl PatchError {
    pub fn missing_document(path: &Path) -> Self {
        PatchError::MissingDocument { path: path.clone() }
    }

    pub fn target_not_found(path: &Path) -> Self {
        PatchError::TargetNotFound { path: path.clone() }
    }

    pub fn index_out_of_bounds(path: &Path, index: usize, len: usize) -> Self {
        PatchError::IndexOutOfBounds {
            path: path.clone(),
            index,
            len,
        }
    }

    pub fn invalid_list_index(path: &Path, key: &str) -> Self {
        PatchError::InvalidListIndex {
            path: path.clone(),
            key: key.to_string(),
        }
    }

    pub fn not_a_container(parent: &Path, actual: &'static str) -> Self {
        PatchError::NotAContainer {
            parent: parent.clone(),
            actual,
        }
    }
}
