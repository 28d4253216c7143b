//! Structural diffing of configuration files.
//!
//! Documents in any supported syntax are parsed into one [`Value`] tree,
//! compared with [`diff::diff`] and optionally checked against a JSON Schema
//! subset with [`schema::Schema`].

pub mod diff;
pub mod format;
pub mod patch;
pub mod path;
pub mod report;
pub mod resolve;
pub mod schema;
pub mod value;

pub use diff::{ChangeRecord, Diff, diff};
pub use path::{Path, Segment};
pub use value::{Mapping, Value};
