//! Loading configuration files into the canonical [`Value`] tree.

mod error;
mod ini;
mod json;
mod yaml;

use std::{fmt, path::Path};

pub use error::{FormatError, LoadError};
use tracing::debug;

use crate::value::Value;

/// Supported configuration syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Yaml,
    Ini,
}

impl Format {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "ini" | "cfg" | "conf" => Some(Format::Ini),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Ini => "ini",
        }
    }

    pub fn parse(&self, text: &str) -> Result<Value, FormatError> {
        match self {
            Format::Json => json::parse(text),
            Format::Yaml => yaml::parse(text),
            Format::Ini => ini::parse(text),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An explicit choice wins, then the file extension, then YAML.
pub fn resolve_format(explicit: Option<Format>, path: Option<&Path>) -> Format {
    explicit
        .or_else(|| path.and_then(Format::from_path))
        .unwrap_or(Format::Yaml)
}

pub fn parse_str(text: &str, format: Format) -> Result<Value, FormatError> {
    format.parse(text)
}

pub fn load_file(path: &Path, format: Format) -> Result<Value, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), %format, "loaded configuration file");

    format.parse(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        format,
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    #[test]
    fn format_from_extension() {
        check!(Format::from_path(Path::new("app.json")) == Some(Format::Json));
        check!(Format::from_path(Path::new("app.YML")) == Some(Format::Yaml));
        check!(Format::from_path(Path::new("/etc/app.conf")) == Some(Format::Ini));
        check!(Format::from_path(Path::new("Dockerfile")) == None);
    }

    #[test]
    fn explicit_format_overrides_extension_and_yaml_is_the_fallback() {
        check!(resolve_format(Some(Format::Ini), Some(Path::new("a.json"))) == Format::Ini);
        check!(resolve_format(None, Some(Path::new("a.json"))) == Format::Json);
        check!(resolve_format(None, Some(Path::new("a.txt"))) == Format::Yaml);
        check!(resolve_format(None, None) == Format::Yaml);
    }

    #[test]
    fn same_document_in_every_format_is_equal() {
        let expected = Value::from(json!({"server": {"port": 8080, "debug": false}}));

        check!(parse_str(r#"{"server": {"port": 8080, "debug": false}}"#, Format::Json).unwrap() == expected);
        check!(parse_str("server:\n  debug: false\n  port: 8080\n", Format::Yaml).unwrap() == expected);
        check!(parse_str("[server]\nport = 8080\ndebug = false\n", Format::Ini).unwrap() == expected);
    }

    #[test]
    fn missing_file_is_an_io_error_naming_the_file() {
        let path = PathBuf::from("/definitely/not/here.json");

        let_assert!(Err(err) = load_file(&path, Format::Json));

        check!(err.is_not_found());
        check!(err.to_string().starts_with("Failed to read '/definitely/not/here.json'"));
    }

    #[test]
    fn parse_error_names_file_and_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ini");
        std::fs::write(&path, "[broken\n").unwrap();

        let_assert!(Err(LoadError::Parse { format, source, .. }) = load_file(&path, Format::Ini));

        check!(format == Format::Ini);
        check!(source.to_string() == "invalid INI at line 1, column 8: expected ']'");
    }
}
