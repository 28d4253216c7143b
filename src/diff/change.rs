use serde::Serialize;

use crate::{path::Path, value::Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One difference between two documents, located by its path.
///
/// The variant fixes which values are present: additions carry only the new
/// value, removals only the old one, modifications both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChangeRecord {
    Added {
        path: Path,
        new: Value,
    },
    Removed {
        path: Path,
        old: Value,
    },
    Modified {
        path: Path,
        old: Value,
        new: Value,
    },
}

impl ChangeRecord {
    pub fn added(path: Path, new: Value) -> Self {
        ChangeRecord::Added { path, new }
    }

    pub fn removed(path: Path, old: Value) -> Self {
        ChangeRecord::Removed { path, old }
    }

    pub fn modified(path: Path, old: Value, new: Value) -> Self {
        ChangeRecord::Modified { path, old, new }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeRecord::Added { .. } => ChangeKind::Added,
            ChangeRecord::Removed { .. } => ChangeKind::Removed,
            ChangeRecord::Modified { .. } => ChangeKind::Modified,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ChangeRecord::Added { path, .. }
            | ChangeRecord::Removed { path, .. }
            | ChangeRecord::Modified { path, .. } => path,
        }
    }

    pub fn old_value(&self) -> Option<&Value> {
        match self {
            ChangeRecord::Added { .. } => None,
            ChangeRecord::Removed { old, .. } | ChangeRecord::Modified { old, .. } => Some(old),
        }
    }

    pub fn new_value(&self) -> Option<&Value> {
        match self {
            ChangeRecord::Removed { .. } => None,
            ChangeRecord::Added { new, .. } | ChangeRecord::Modified { new, .. } => Some(new),
        }
    }

    /// The same change seen from the other side: additions become removals
    /// and modifications swap their values.
    pub fn invert(self) -> Self {
        match self {
            ChangeRecord::Added { path, new } => ChangeRecord::Removed { path, old: new },
            ChangeRecord::Removed { path, old } => ChangeRecord::Added { path, new: old },
            ChangeRecord::Modified { path, old, new } => ChangeRecord::Modified {
                path,
                old: new,
                new: old,
            },
        }
    }
}
