use std::error::Error;

use confdrift::report::Report;

use crate::cli::{Outcome, ValidateArgs, load_document, load_schema, log_violations, write_report};

pub fn handle_validate_command(args: ValidateArgs) -> Result<Outcome, Box<dyn Error>> {
    let schema = load_schema(&args.schema)?;
    let doc = load_document(&args.file, args.format, false)?.unwrap_or_default();

    let label = args.file.display().to_string();
    let violations = schema.validate(&doc);
    log_violations(&label, &violations);

    let mut report = Report::new(None);
    report.add_violations(label, violations);
    write_report(&report.render(args.report)?, args.output.as_deref())?;

    if report.has_violations() {
        Ok(Outcome::Findings)
    } else {
        Ok(Outcome::Clean)
    }
}
