use crate::{
    patch::error::PatchError,
    path::{Path, Segment},
    resolve::resolve_mut,
    value::Value,
};

/// Applies an addition.
///
/// o  At the root, the value becomes the whole document.
///
/// o  Below a mapping, the key is inserted. An existing key is replaced.
///
/// o  Below a list, the value is inserted at the index and later elements
///    shift one position to the right. The index MUST NOT be greater than
///    the length of the list.
///
/// The parent of the target location MUST exist.
pub fn add(doc: &mut Option<Value>, path: &Path, value: Value) -> Result<(), PatchError> {
    let (Some(parent), Some(last)) = (path.parent(), path.last()) else {
        *doc = Some(value);
        return Ok(());
    };

    let root = doc
        .as_mut()
        .ok_or_else(|| PatchError::missing_document(path))?;
    let target = resolve_mut(root, &parent)?;

    match target {
        Value::Mapping(map) => {
            map.insert(last.to_key(), value);
        }
        Value::List(list) => match last {
            Segment::Index(index) => {
                if *index > list.len() {
                    return Err(PatchError::index_out_of_bounds(path, *index, list.len()));
                }
                list.insert(*index, value);
            }
            Segment::Key(key) => return Err(PatchError::invalid_list_index(path, key)),
        },
        other => return Err(PatchError::not_a_container(&parent, other.type_name())),
    }

    Ok(())
}
