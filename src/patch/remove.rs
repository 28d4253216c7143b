use crate::{
    patch::error::PatchError,
    path::{Path, Segment},
    resolve::resolve_mut,
    value::Value,
};

/// Applies a removal.
///
/// The target location MUST exist. Removing the root leaves no document.
/// Removing a list element shifts later elements one position to the left.
pub fn remove(doc: &mut Option<Value>, path: &Path) -> Result<(), PatchError> {
    let (Some(parent), Some(last)) = (path.parent(), path.last()) else {
        return match doc.take() {
            Some(_) => Ok(()),
            None => Err(PatchError::missing_document(path)),
        };
    };

    let root = doc
        .as_mut()
        .ok_or_else(|| PatchError::missing_document(path))?;
    let target = resolve_mut(root, &parent)?;

    match target {
        Value::Mapping(map) => {
            map.remove(&last.to_key())
                .ok_or_else(|| PatchError::target_not_found(path))?;
        }
        Value::List(list) => match last {
            Segment::Index(index) => {
                if *index >= list.len() {
                    return Err(PatchError::index_out_of_bounds(path, *index, list.len()));
                }
                list.remove(*index);
            }
            Segment::Key(key) => return Err(PatchError::invalid_list_index(path, key)),
        },
        other => return Err(PatchError::not_a_container(&parent, other.type_name())),
    }
    Ok(())
}
