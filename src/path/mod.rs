mod error;
mod parser;

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

pub use error::PathError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Represents a key in a mapping.
    Key(String),

    /// Represents a position in a list.
    Index(usize),
}

impl Segment {
    /// The segment as a mapping key. Indexes become their decimal spelling.
    pub fn to_key(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

/// Location of a node inside a [`crate::value::Value`], rooted at the empty
/// sequence.
///
/// Displayed and parsed in JSON Pointer form: `""` is the root, `/hosts/2`
/// is the third element of the `hosts` list. `~` and `/` inside keys are
/// written as `~0` and `~1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Path::default()
    }

    pub fn new(segments: Vec<Segment>) -> Self {
        Path { segments }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(Segment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Returns a new path extended by one segment.
    pub fn child(&self, segment: Segment) -> Path {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// The path without its last segment; `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        match self.segments.split_last() {
            Some((_, rest)) => Some(Path::new(rest.to_vec())),
            None => None,
        }
    }

    /// True when `other` lies at or below this path.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other.segments.starts_with(&self.segments)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, "/{}", key.replace('~', "~0").replace('/', "~1"))?,
                Segment::Index(index) => write!(f, "/{index}")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path { segments }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        match parser::parse_path(input) {
            Ok(("", path)) => Ok(path),
            Ok((rest, _)) => Err(error::trailing_input_error(input, rest)),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                Err(error::convert_verbose_error(input, e))
            }
            Err(nom::Err::Incomplete(_)) => {
                Err(PathError::invalid_syntax(input.len(), "unexpected end of input"))
            }
        }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::try_from(s)
    }
}
