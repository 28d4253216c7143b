use serde::{Serialize, Serializer};

use crate::diff::{Diff, Summary};

use super::{FileViolations, Report};

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<&'a Diff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
    violations: ByLabel<'a>,
}

/// Serializes as `{"<label>": [violations...]}` in input order.
struct ByLabel<'a>(&'a [FileViolations]);

impl Serialize for ByLabel<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|file| (&file.label, &file.violations)))
    }
}

pub(super) fn render(report: &Report) -> Result<String, serde_json::Error> {
    let json = JsonReport {
        changes: report.changes.as_ref(),
        summary: report.changes.as_ref().map(Diff::summary),
        violations: ByLabel(&report.violations),
    };

    let mut rendered = serde_json::to_string_pretty(&json)?;
    rendered.push('\n');
    Ok(rendered)
}
