use crate::{
    path::{Path, Segment},
    value::{Mapping, Value},
};

use super::{ChangeRecord, Diff};

pub(super) fn diff_recursive(old: &Value, new: &Value, path_pos: &mut Path, changes: &mut Diff) {
    match (old, new) {
        (old, new) if old == new => {} // Values are equal, no diff needed
        (Value::Mapping(old_map), Value::Mapping(new_map)) => {
            diff_mapping(old_map, new_map, path_pos, changes)
        }
        (Value::List(old_list), Value::List(new_list)) => {
            diff_list(old_list, new_list, path_pos, changes)
        }
        // Scalar changes and type changes are a single modification
        (old, new) => changes.push(ChangeRecord::modified(
            path_pos.clone(),
            old.clone(),
            new.clone(),
        )),
    }
}

/// Emits removed keys (old order), then added keys (new order), then
/// recurses into shared keys (old order).
fn diff_mapping(old_map: &Mapping, new_map: &Mapping, path_pointer: &mut Path, changes: &mut Diff) {
    for (key, old_value) in old_map.iter() {
        if !new_map.contains_key(key) {
            path_pointer.push(Segment::Key(key.clone()));
            changes.push(ChangeRecord::removed(path_pointer.clone(), old_value.clone()));
            path_pointer.pop();
        }
    }

    for (key, new_value) in new_map.iter() {
        if !old_map.contains_key(key) {
            path_pointer.push(Segment::Key(key.clone()));
            changes.push(ChangeRecord::added(path_pointer.clone(), new_value.clone()));
            path_pointer.pop();
        }
    }

    for (key, old_value) in old_map.iter() {
        if let Some(new_value) = new_map.get(key) {
            path_pointer.push(Segment::Key(key.clone()));
            diff_recursive(old_value, new_value, path_pointer, changes);
            path_pointer.pop();
        }
    }
}

/// Positional comparison. Trailing removals go from the highest index down
/// so applying them in order never addresses a shifted element.
fn diff_list(old_list: &[Value], new_list: &[Value], path_pointer: &mut Path, changes: &mut Diff) {
    let shared = old_list.len().min(new_list.len());

    for (index, (old_item, new_item)) in old_list.iter().zip(new_list).enumerate() {
        path_pointer.push(Segment::Index(index));
        diff_recursive(old_item, new_item, path_pointer, changes);
        path_pointer.pop();
    }

    for index in (shared..old_list.len()).rev() {
        path_pointer.push(Segment::Index(index));
        changes.push(ChangeRecord::removed(path_pointer.clone(), old_list[index].clone()));
        path_pointer.pop();
    }

    for (index, new_item) in new_list.iter().enumerate().skip(shared) {
        path_pointer.push(Segment::Index(index));
        changes.push(ChangeRecord::added(path_pointer.clone(), new_item.clone()));
        path_pointer.pop();
    }
}
