mod add;
mod error;
mod remove;
mod replace;

pub use add::add;
pub use error::PatchError;
pub use remove::remove;
pub use replace::replace;

use crate::{diff::ChangeRecord, value::Value};

/// Applies change records to a copy of `doc` in order.
///
/// Stops at the first record that does not fit the document; `doc` itself
/// is never touched. `None` stands for a missing document on either side.
pub fn apply(doc: Option<&Value>, changes: &[ChangeRecord]) -> Result<Option<Value>, PatchError> {
    let mut doc = doc.cloned();
    for change in changes {
        match change {
            ChangeRecord::Added { path, new } => add(&mut doc, path, new.clone())?,
            ChangeRecord::Removed { path, .. } => remove(&mut doc, path)?,
            ChangeRecord::Modified { path, new, .. } => replace(&mut doc, path, new.clone())?,
        }
    }

    Ok(doc)
}
