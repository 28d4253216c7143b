use std::fmt;

use jsonschema::{error::TypeKind, primitive_type::PrimitiveType};

use crate::value::Value;

/// JSON Schema primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl SchemaType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(SchemaType::Null),
            "boolean" => Some(SchemaType::Boolean),
            "integer" => Some(SchemaType::Integer),
            "number" => Some(SchemaType::Number),
            "string" => Some(SchemaType::String),
            "array" => Some(SchemaType::Array),
            "object" => Some(SchemaType::Object),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchemaType::Null => "null",
            SchemaType::Boolean => "boolean",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::String => "string",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        }
    }

    /// The type a value reports in violations. Integral numbers are still
    /// reported as `number`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => SchemaType::Null,
            Value::Bool(_) => SchemaType::Boolean,
            Value::Number(_) => SchemaType::Number,
            Value::String(_) => SchemaType::String,
            Value::List(_) => SchemaType::Array,
            Value::Mapping(_) => SchemaType::Object,
        }
    }

    fn from_primitive(primitive: PrimitiveType) -> Option<Self> {
        SchemaType::from_name(&primitive.to_string())
    }

    /// The types a failed `type` keyword asked for.
    pub(super) fn expected(kind: &TypeKind) -> Vec<Self> {
        match kind {
            TypeKind::Single(primitive) => SchemaType::from_primitive(*primitive).into_iter().collect(),
            TypeKind::Multiple(primitives) => {
                primitives.iter().filter_map(SchemaType::from_primitive).collect()
            }
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn integral_numbers_report_as_number() {
        check!(SchemaType::of(&Value::Number(3.0)) == SchemaType::Number);
        check!(SchemaType::of(&Value::from("3")) == SchemaType::String);
        check!(SchemaType::of(&Value::List(vec![])) == SchemaType::Array);
    }

    #[test]
    fn primitive_types_map_by_name() {
        check!(SchemaType::expected(&TypeKind::Single(PrimitiveType::Integer)) == vec![SchemaType::Integer]);
        check!(SchemaType::expected(&TypeKind::Single(PrimitiveType::Object)) == vec![SchemaType::Object]);
    }

    #[test]
    fn names_round_trip() {
        for name in ["null", "boolean", "integer", "number", "string", "array", "object"] {
            check!(SchemaType::from_name(name).map(|t| t.name()) == Some(name));
        }
        check!(SchemaType::from_name("list") == None);
    }
}
