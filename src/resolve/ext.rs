use crate::{path::Path, value::Value};

use super::{ResolveError, resolve_ref};

pub trait ValueExt {
    /// Parses `path` as a pointer and returns the value it addresses.
    fn get_value_at(&self, path: &str) -> Result<&Value, ResolveError>;
}

impl ValueExt for Value {
    fn get_value_at(&self, path: &str) -> Result<&Value, ResolveError> {
        let path = Path::try_from(path)?;

        resolve_ref(self, &path)
    }
}
