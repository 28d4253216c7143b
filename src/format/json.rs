use crate::value::Value;

use super::FormatError;

pub fn parse(text: &str) -> Result<Value, FormatError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(Value::from(json))
}
