mod change;
mod engine;
#[cfg(test)]
pub mod test_util;

use std::ops::Deref;

use serde::Serialize;
use tracing::debug;

pub use change::{ChangeKind, ChangeRecord};

use crate::{path::Path, value::Value};

/// Ordered change records that turn one document into another.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diff(Vec<ChangeRecord>);

/// Number of records per kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

impl Diff {
    pub fn new(changes: Vec<ChangeRecord>) -> Self {
        Diff(changes)
    }

    pub fn push(&mut self, change: ChangeRecord) {
        self.0.push(change);
    }

    pub fn summary(&self) -> Summary {
        self.0.iter().fold(Summary::default(), |mut summary, change| {
            match change.kind() {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
            }
            summary
        })
    }

    /// Every record turned around, as if the inputs had been swapped.
    pub fn invert(self) -> Diff {
        Diff(self.0.into_iter().map(ChangeRecord::invert).collect())
    }

    pub fn into_inner(self) -> Vec<ChangeRecord> {
        self.0
    }
}

impl Deref for Diff {
    type Target = Vec<ChangeRecord>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Diff {
    type Item = ChangeRecord;
    type IntoIter = std::vec::IntoIter<ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Computes the changes that turn `old` into `new`.
///
/// `None` stands for a missing document; a document that appears or
/// disappears as a whole is one record at the root path.
pub fn diff(old: Option<&Value>, new: Option<&Value>) -> Diff {
    let mut changes = Diff::default();
    let mut path_pos = Path::default();

    match (old, new) {
        (None, None) => {}
        (None, Some(new)) => changes.push(ChangeRecord::added(path_pos, new.clone())),
        (Some(old), None) => changes.push(ChangeRecord::removed(path_pos, old.clone())),
        (Some(old), Some(new)) => engine::diff_recursive(old, new, &mut path_pos, &mut changes),
    }

    let summary = changes.summary();
    debug!(
        added = summary.added,
        removed = summary.removed,
        modified = summary.modified,
        "computed diff"
    );

    changes
}

/// Shorthand for [`diff`] when both documents exist.
pub fn diff_values(old: &Value, new: &Value) -> Diff {
    diff(Some(old), Some(new))
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use serde_json::json;

    use super::test_util::load_diff_cases;
    use super::*;

    #[test]
    fn missing_documents_diff_at_the_root() {
        let doc = Value::from(json!({"a": 1}));

        check!(diff(None, None) == Diff::default());
        check!(diff(None, Some(&doc)) == Diff::new(vec![ChangeRecord::added(Path::root(), doc.clone())]));
        check!(diff(Some(&doc), None) == Diff::new(vec![ChangeRecord::removed(Path::root(), doc.clone())]));
    }

    #[test]
    fn summary_counts_each_kind() {
        let old = Value::from(json!({"a": 1, "b": 2, "c": [1]}));
        let new = Value::from(json!({"a": 2, "d": 4, "c": [1, 2, 3]}));

        let summary = diff_values(&old, &new).summary();

        check!(summary == Summary { added: 3, removed: 1, modified: 1 });
        check!(summary.total() == 5);
    }

    #[test]
    fn serializes_as_a_list_of_records() {
        let changes = diff_values(&Value::from(json!({"debug": true})), &Value::from(json!({})));

        check!(
            serde_json::to_value(&changes).unwrap()
                == json!([{"kind": "removed", "path": "/debug", "old": true}])
        );
    }

    #[test]
    fn diff_matches_the_expected_records_of_every_fixture() {
        let mut failures = Vec::new();

        for case in load_diff_cases() {
            let Some(expected) = &case.expected else {
                continue;
            };
            let changes = diff(case.old.as_ref(), case.new.as_ref());
            let actual = serde_json::to_value(&changes).unwrap();

            if &actual != expected {
                failures.push(format!(
                    "Failed case: {comment}\n  Expected: {expected}\n  Actual: {actual}",
                    comment = case.comment,
                ));
            }
        }

        if !failures.is_empty() {
            panic!(
                "diff fixtures failed for {} case(s):\n\n{}",
                failures.len(),
                failures.join("\n\n"),
            );
        }
    }

    #[test]
    fn inverted_diff_equals_diff_of_swapped_inputs_for_every_fixture() {
        for case in load_diff_cases() {
            let forward = diff(case.old.as_ref(), case.new.as_ref());
            let backward = diff(case.new.as_ref(), case.old.as_ref());

            let mut forward_paths: Vec<String> =
                forward.iter().map(|c| c.path().to_string()).collect();
            let mut backward_paths: Vec<String> =
                backward.iter().map(|c| c.path().to_string()).collect();
            forward_paths.sort();
            backward_paths.sort();

            check!(forward_paths == backward_paths, "case: {}", case.comment);

            for change in forward.invert().iter() {
                check!(backward.contains(change), "case: {}", case.comment);
            }
        }
    }
}
