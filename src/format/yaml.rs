use crate::value::Value;

use super::FormatError;

/// An empty document (or one holding only comments) is `null`. Merge keys
/// (`<<: *anchor`) are resolved, keys written next to them win.
pub fn parse(text: &str) -> Result<Value, FormatError> {
    let mut yaml: serde_yaml::Value = if is_blank(text) {
        serde_yaml::Value::Null
    } else {
        serde_yaml::from_str(text)?
    };
    yaml.apply_merge()?;

    Ok(Value::try_from(yaml)?)
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}
