use std::path::PathBuf;

use crate::value::ConvertError;

use super::Format;

/// Text that could not be turned into a [`crate::value::Value`].
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported YAML document: {0}")]
    YamlStructure(#[from] ConvertError),

    #[error("invalid INI at line {line}, column {column}: {message}")]
    Ini {
        line: usize,
        column: usize,
        message: String,
    },
}

impl FormatError {
    pub fn ini(line: usize, column: usize, message: impl Into<String>) -> Self {
        FormatError::Ini {
            line,
            column,
            message: message.into(),
        }
    }
}

/// A configuration file that could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse '{}' as {format}: {source}", path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        source: FormatError,
    },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
