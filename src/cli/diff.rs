use std::error::Error;

use confdrift::{diff::diff, report::Report};
use tracing::info;

use crate::cli::{DiffArgs, Outcome, load_document, load_schema, log_violations, write_report};

pub fn handle_diff_command(args: DiffArgs) -> Result<Outcome, Box<dyn Error>> {
    let old = load_document(&args.old, args.format, args.allow_missing)?;
    let new = load_document(&args.new, args.format, args.allow_missing)?;

    let changes = diff(old.as_ref(), new.as_ref());
    if changes.is_empty() {
        info!("configurations are identical");
    }

    let mut report = Report::new(Some(changes));

    // Violations are findings, never a reason to stop the diff
    if let Some(schema_path) = &args.schema {
        let schema = load_schema(schema_path)?;
        // Labels carry the side so comparing a file with itself keeps both entries
        for (side, path, doc) in [("old", &args.old, &old), ("new", &args.new, &new)] {
            if let Some(doc) = doc {
                let label = format!("{side}:{}", path.display());
                let violations = schema.validate(doc);
                log_violations(&label, &violations);
                report.add_violations(label, violations);
            }
        }
    }

    write_report(&report.render(args.report)?, args.output.as_deref())?;

    if args.check && report.has_findings() {
        Ok(Outcome::Findings)
    } else {
        Ok(Outcome::Clean)
    }
}
