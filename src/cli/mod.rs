pub mod diff;
pub mod logging;
pub mod query;
pub mod validate;

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use confdrift::{
    format::{self, Format, LoadError},
    report::ReportFormat,
    schema::{Schema, Violation},
    value::Value,
};
use tracing::{info, warn};

use logging::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "confdrift", version, about)]
pub struct Cli {
    /// Log more on stderr (-v for info, -vv for debug). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Format of log lines on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two configuration files and report what changed
    Diff(DiffArgs),

    /// Check a configuration file against a JSON Schema
    Validate(ValidateArgs),

    /// Print the value at a path within a configuration file
    Get(GetArgs),
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Baseline configuration file
    pub old: PathBuf,

    /// Candidate configuration file
    pub new: PathBuf,

    /// Parser for both files. Inferred from the file extension when omitted, falling back to yaml
    #[arg(short = 't', long = "type", value_enum, env = "CONFDRIFT_TYPE")]
    pub format: Option<Format>,

    /// JSON Schema both files are validated against
    #[arg(short, long, env = "CONFDRIFT_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, env = "CONFDRIFT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text, env = "CONFDRIFT_REPORT")]
    pub report: ReportFormat,

    /// Exit with status 1 when there are changes or schema violations
    #[arg(long)]
    pub check: bool,

    /// Treat a missing file as an absent document instead of an error
    #[arg(long)]
    pub allow_missing: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to validate
    pub file: PathBuf,

    /// JSON Schema to validate against
    #[arg(short, long, env = "CONFDRIFT_SCHEMA")]
    pub schema: PathBuf,

    /// Parser for the file. Inferred from the file extension when omitted, falling back to yaml
    #[arg(short = 't', long = "type", value_enum, env = "CONFDRIFT_TYPE")]
    pub format: Option<Format>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, env = "CONFDRIFT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text, env = "CONFDRIFT_REPORT")]
    pub report: ReportFormat,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Path to resolve, written as a JSON Pointer, e.g. /server/hosts/0
    ///
    /// The empty string addresses the whole document.
    pub path: String,

    /// Configuration file to read. Reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Parser for the input. Inferred from the file extension when omitted, falling back to yaml
    #[arg(short = 't', long = "type", value_enum, env = "CONFDRIFT_TYPE")]
    pub format: Option<Format>,
}

/// How a successful run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Findings,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::Findings => ExitCode::from(1),
        }
    }
}

/// Loads one input document. With `allow_missing`, a file that does not
/// exist is an absent document.
pub(crate) fn load_document(
    path: &Path,
    format: Option<Format>,
    allow_missing: bool,
) -> Result<Option<Value>, LoadError> {
    let format = format::resolve_format(format, Some(path));
    match format::load_file(path, format) {
        Ok(doc) => Ok(Some(doc)),
        Err(e) if allow_missing && e.is_not_found() => {
            info!(path = %path.display(), "file not found, treating it as absent");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Schemas are JSON unless their extension says otherwise.
pub(crate) fn load_schema(path: &Path) -> Result<Schema, Box<dyn std::error::Error>> {
    let format = Format::from_path(path).unwrap_or(Format::Json);
    let doc = format::load_file(path, format)?;
    Schema::compile(&doc).map_err(|e| format!("Invalid schema '{}': {e}", path.display()).into())
}

pub(crate) fn log_violations(label: &str, violations: &[Violation]) {
    for violation in violations {
        warn!(file = label, path = %violation.path, rule = %violation.rule, "schema violation");
    }
}

pub(crate) fn write_report(rendered: &str, output: Option<&Path>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
