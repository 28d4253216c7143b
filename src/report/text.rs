use crate::{diff::ChangeRecord, path::Path};

use super::Report;

pub(super) fn render(report: &Report) -> String {
    let mut out = String::new();

    for change in report.changes.iter().flat_map(|changes| changes.iter()) {
        let line = match change {
            ChangeRecord::Added { path, new } => format!("+ {}: {new}\n", display_path(path)),
            ChangeRecord::Removed { path, old } => format!("- {}: {old}\n", display_path(path)),
            ChangeRecord::Modified { path, old, new } => {
                format!("~ {}: {old} -> {new}\n", display_path(path))
            }
        };
        out.push_str(&line);
    }

    for file in report.violations.iter().filter(|file| !file.violations.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("schema violations in {}:\n", file.label));
        for violation in &file.violations {
            out.push_str(&format!(
                "  {}: {} ({})\n",
                display_path(&violation.path),
                violation.rule,
                violation.message
            ));
        }
    }

    out
}

// The root pointer is the empty string
fn display_path(path: &Path) -> String {
    if path.is_root() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}
