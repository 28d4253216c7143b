use crate::{patch::error::PatchError, path::Path, resolve::resolve_mut, value::Value};

/// Applies a modification: the value at the target location is replaced.
///
/// The target location MUST exist, the root included.
pub fn replace(doc: &mut Option<Value>, path: &Path, value: Value) -> Result<(), PatchError> {
    let root = doc
        .as_mut()
        .ok_or_else(|| PatchError::missing_document(path))?;

    let target = resolve_mut(root, path)?;
    *target = value;

    Ok(())
}
