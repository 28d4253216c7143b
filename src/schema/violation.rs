use std::fmt;

use serde::{Serialize, Serializer};

use crate::path::Path;

use super::SchemaType;

/// The constraint a value broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    TypeMismatch {
        expected: Vec<SchemaType>,
        found: SchemaType,
    },
    MissingRequired {
        key: String,
    },
    UnexpectedKey {
        key: String,
    },
    NotInEnum,
    ConstMismatch,
    NotAllowed,
    /// Any other keyword, named as it appears in the schema.
    Constraint {
        keyword: String,
    },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::TypeMismatch { expected, found } => {
                let expected = expected
                    .iter()
                    .map(SchemaType::name)
                    .collect::<Vec<_>>()
                    .join(" or ");
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            Rule::MissingRequired { key } => write!(f, "missing required key: {key}"),
            Rule::UnexpectedKey { key } => write!(f, "unexpected key: {key}"),
            Rule::NotInEnum => f.write_str("value not in enum"),
            Rule::ConstMismatch => f.write_str("value does not match const"),
            Rule::NotAllowed => f.write_str("no value is allowed here"),
            Rule::Constraint { keyword } => write!(f, "constraint not met: {keyword}"),
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A place where a document does not satisfy its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: Path,
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    pub fn new(path: Path, rule: Rule, message: impl Into<String>) -> Self {
        Violation {
            path,
            rule,
            message: message.into(),
        }
    }
}
