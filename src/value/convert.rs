use crate::path::Path;

use super::{Mapping, Value, integral};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Mapping key at '{path}' is a {kind}; only scalar keys are supported")]
    UnsupportedKey { path: Path, kind: &'static str },

    #[error("Number at '{path}' cannot be represented as a double")]
    UnrepresentableNumber { path: Path },
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // as_f64 only fails with the arbitrary_precision feature, which is not enabled
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => match integral(*n) {
                Some(i) => serde_json::Value::Number(i.into()),
                // NaN and infinities have no JSON spelling
                None => serde_json::Number::from_f64(*n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            },
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = ConvertError;

    fn try_from(yaml: serde_yaml::Value) -> Result<Self, Self::Error> {
        let mut path = Path::root();
        from_yaml(yaml, &mut path)
    }
}

fn from_yaml(yaml: serde_yaml::Value, path: &mut Path) -> Result<Value, ConvertError> {
    let value = match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => Value::Number(
            n.as_f64()
                .ok_or_else(|| ConvertError::UnrepresentableNumber { path: path.clone() })?,
        ),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            let mut list = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                path.push_index(index);
                list.push(from_yaml(item, path)?);
                path.pop();
            }
            Value::List(list)
        }
        serde_yaml::Value::Mapping(entries) => {
            let mut map = Mapping::new();
            for (key, item) in entries {
                let key = yaml_key(key, path)?;
                path.push_key(key.clone());
                let item = from_yaml(item, path)?;
                path.pop();
                map.insert(key, item);
            }
            Value::Mapping(map)
        }
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value, path)?,
    };
    Ok(value)
}

/// YAML allows any node as a key; scalars are coerced to their string form
/// the way JSON serializers render them.
fn yaml_key(key: serde_yaml::Value, path: &Path) -> Result<String, ConvertError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value, path),
        serde_yaml::Value::Sequence(_) => Err(ConvertError::UnsupportedKey {
            path: path.clone(),
            kind: "sequence",
        }),
        serde_yaml::Value::Mapping(_) => Err(ConvertError::UnsupportedKey {
            path: path.clone(),
            kind: "mapping",
        }),
    }
}
