mod ext;

use std::ops::Deref;

use crate::{
    path::{Path, PathError, Segment},
    value::Value,
};
pub use ext::ValueExt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid path format: {0}")]
    InvalidPath(#[from] PathError),

    #[error("Key or item not found")]
    NotFound,

    #[error("Type mismatch encountered during resolution, expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ResolveError {
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        ResolveError::TypeMismatch {
            expected: expected.to_string(),
            actual: found.to_string(),
        }
    }
}

/// Shared and exclusive borrows of a [`Value`] walk the same way; this
/// trait lets one resolver serve both.
pub trait ValueAccess<'a> {
    type Out: Deref<Target = Value> + 'a;

    fn get_key(self, key: &str) -> Option<Self::Out>;
    fn get_index(self, index: usize) -> Option<Self::Out>;
}

impl<'a> ValueAccess<'a> for &'a Value {
    type Out = &'a Value;

    fn get_key(self, key: &str) -> Option<Self::Out> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }
    fn get_index(self, index: usize) -> Option<Self::Out> {
        match self {
            Value::List(items) => items.get(index),
            _ => None,
        }
    }
}

impl<'a> ValueAccess<'a> for &'a mut Value {
    type Out = &'a mut Value;

    fn get_key(self, key: &str) -> Option<Self::Out> {
        match self {
            Value::Mapping(map) => map.get_mut(key),
            _ => None,
        }
    }
    fn get_index(self, index: usize) -> Option<Self::Out> {
        match self {
            Value::List(items) => items.get_mut(index),
            _ => None,
        }
    }
}

pub fn resolve_ref<'a>(doc: &'a Value, path: &Path) -> Result<&'a Value, ResolveError> {
    resolve_inner(doc, path)
}

pub fn resolve_mut<'a>(doc: &'a mut Value, path: &Path) -> Result<&'a mut Value, ResolveError> {
    resolve_inner(doc, path)
}

fn resolve_inner<'a, A>(doc: A, path: &Path) -> Result<A::Out, ResolveError>
where
    A: ValueAccess<'a, Out = A>, // output type is the same as input type
    A: Deref<Target = Value>,
{
    let mut current: A::Out = doc;
    for segment in path {
        current = resolve_segment(current, segment)?;
    }

    Ok(current)
}

fn resolve_segment<'a, A>(doc: A, segment: &Segment) -> Result<A::Out, ResolveError>
where
    A: ValueAccess<'a>,
    A: Deref<Target = Value>,
{
    let is_mapping = matches!(*doc, Value::Mapping(_));
    let is_list = matches!(*doc, Value::List(_));
    let type_name = doc.type_name();

    match segment {
        // A pointer read from text cannot tell the key "2" from the index 2
        Segment::Index(index) if is_mapping => {
            doc.get_key(&index.to_string()).ok_or(ResolveError::NotFound)
        }
        Segment::Index(index) if is_list => doc.get_index(*index).ok_or(ResolveError::NotFound),
        Segment::Key(key) if is_mapping => doc.get_key(key).ok_or(ResolveError::NotFound),
        Segment::Key(key) if is_list => Err(ResolveError::type_mismatch(
            "list index",
            &format!("key {key:?}"),
        )),
        _ => Err(ResolveError::type_mismatch("mapping or list", type_name)),
    }
}
