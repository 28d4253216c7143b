//! Rendering of change records and schema violations for people and tools.

mod json;
mod text;

use crate::{diff::Diff, schema::Violation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per change, then violations per file
    Text,
    /// A single JSON object
    Json,
}

/// Violations found in one input, labelled by its file name.
#[derive(Debug, Clone, PartialEq)]
pub struct FileViolations {
    pub label: String,
    pub violations: Vec<Violation>,
}

/// Everything one run found.
///
/// `changes` is `None` when no diff was computed (validation only), which
/// is not the same as an empty diff.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub changes: Option<Diff>,
    pub violations: Vec<FileViolations>,
}

impl Report {
    pub fn new(changes: Option<Diff>) -> Self {
        Report {
            changes,
            violations: Vec::new(),
        }
    }

    pub fn add_violations(&mut self, label: impl Into<String>, violations: Vec<Violation>) {
        self.violations.push(FileViolations {
            label: label.into(),
            violations,
        });
    }

    pub fn has_changes(&self) -> bool {
        self.changes.as_ref().is_some_and(|changes| !changes.is_empty())
    }

    pub fn has_violations(&self) -> bool {
        self.violations.iter().any(|file| !file.violations.is_empty())
    }

    pub fn has_findings(&self) -> bool {
        self.has_changes() || self.has_violations()
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(text::render(self)),
            ReportFormat::Json => json::render(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::{
        diff::ChangeRecord,
        schema::Rule,
        value::Value,
    };

    #[test]
    fn empty_diff_is_not_a_finding() {
        let mut report = Report::new(Some(Diff::default()));
        report.add_violations("a.yaml", vec![]);

        check!(!report.has_findings());
    }

    #[test]
    fn changes_or_violations_are_findings() {
        let changes = Diff::new(vec![ChangeRecord::added("/a".try_into().unwrap(), Value::Null)]);
        check!(Report::new(Some(changes)).has_findings());

        let mut report = Report::new(None);
        report.add_violations(
            "a.yaml",
            vec![Violation::new("/a".try_into().unwrap(), Rule::NotAllowed, "no")],
        );
        check!(report.has_violations());
        check!(!report.has_changes());
        check!(report.has_findings());
    }
}
