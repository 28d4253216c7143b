//! Validation of documents against a JSON Schema.
//!
//! A schema is itself a [`Value`], so it can be written in any supported
//! configuration format. It is compiled once by `jsonschema` (draft taken
//! from `$schema`, 2020-12 otherwise) and then applied to as many documents
//! as needed. Validation never fails: broken constraints come back as
//! [`Violation`]s located by their pointer into the document. Only a schema
//! the compiler rejects is an error. Remote `$ref`s are not fetched.

mod error;
mod types;
mod violation;

pub use error::SchemaError;
pub use types::SchemaType;
pub use violation::{Rule, Violation};

use std::fmt;

use jsonschema::{Validator, error::ValidationErrorKind};

use crate::{
    path::{Path, Segment},
    resolve::resolve_ref,
    value::Value,
};

pub struct Schema {
    validator: Validator,
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").finish_non_exhaustive()
    }
}

impl Schema {
    pub fn compile(doc: &Value) -> Result<Schema, SchemaError> {
        let schema = serde_json::Value::from(doc);
        let validator = jsonschema::validator_for(&schema).map_err(|e| {
            SchemaError::invalid(pointer(&e.instance_path.to_string()), e.to_string())
        })?;

        Ok(Schema { validator })
    }

    /// Checks `doc` and returns every violation in the order the validator
    /// reports them.
    pub fn validate(&self, doc: &Value) -> Vec<Violation> {
        let instance = serde_json::Value::from(doc);
        let mut violations = Vec::new();

        for error in self.validator.iter_errors(&instance) {
            let path = pointer(&error.instance_path.to_string());
            let message = error.to_string();

            match &error.kind {
                ValidationErrorKind::Type { kind } => {
                    let found = resolve_ref(doc, &path)
                        .map(SchemaType::of)
                        .unwrap_or(SchemaType::Null);
                    let rule = Rule::TypeMismatch {
                        expected: SchemaType::expected(kind),
                        found,
                    };
                    violations.push(Violation::new(path, rule, message));
                }
                ValidationErrorKind::Required { property } => {
                    let key = property
                        .as_str()
                        .map_or_else(|| property.to_string(), str::to_string);
                    violations.push(Violation::new(path, Rule::MissingRequired { key }, message));
                }
                // One violation per key, located at the key itself
                ValidationErrorKind::AdditionalProperties { unexpected } => {
                    for key in unexpected {
                        violations.push(Violation::new(
                            path.child(Segment::Key(key.clone())),
                            Rule::UnexpectedKey { key: key.clone() },
                            format!("key {key:?} is not declared in the schema"),
                        ));
                    }
                }
                ValidationErrorKind::Enum { .. } => {
                    violations.push(Violation::new(path, Rule::NotInEnum, message));
                }
                ValidationErrorKind::Constant { .. } => {
                    violations.push(Violation::new(path, Rule::ConstMismatch, message));
                }
                ValidationErrorKind::FalseSchema { .. } => {
                    violations.push(Violation::new(path, Rule::NotAllowed, message));
                }
                _ => {
                    let keyword = keyword(&error.schema_path.to_string());
                    violations.push(Violation::new(path, Rule::Constraint { keyword }, message));
                }
            }
        }

        violations
    }
}

// Locations from the validator are always well-formed pointers
fn pointer(location: &str) -> Path {
    Path::try_from(location).unwrap_or_default()
}

/// The keyword is the last token of the schema location.
fn keyword(schema_location: &str) -> String {
    match pointer(schema_location).last() {
        Some(Segment::Key(key)) => key.clone(),
        Some(segment) => segment.to_key(),
        None => "schema".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    fn schema(json: serde_json::Value) -> Schema {
        Schema::compile(&Value::from(json)).unwrap()
    }

    fn validate(schema: &Schema, doc: serde_json::Value) -> Vec<Violation> {
        let mut violations = schema.validate(&Value::from(doc));
        violations.sort_by_key(|v| v.path.to_string());
        violations
    }

    fn path(raw: &str) -> Path {
        raw.try_into().unwrap()
    }

    #[test]
    fn string_where_number_is_required_is_a_type_mismatch() {
        let schema = schema(json!({"type": "object", "properties": {"port": {"type": "number"}}}));

        let violations = validate(&schema, json!({"port": "8080"}));

        check!(violations.len() == 1);
        check!(violations[0].path == path("/port"));
        check!(violations[0].rule.to_string() == "type mismatch: expected number, found string");
        check!(violations[0].message.contains("8080"));
    }

    #[test]
    fn valid_document_has_no_violations() {
        let schema = schema(json!({
            "type": "object",
            "required": ["port", "hosts"],
            "properties": {
                "port": {"type": "integer", "minimum": 1, "maximum": 65535},
                "hosts": {"type": "array", "items": {"type": "string"}, "minItems": 1},
                "mode": {"enum": ["dev", "prod"]}
            },
            "additionalProperties": false
        }));

        let violations = validate(&schema, json!({"port": 8080, "hosts": ["a"], "mode": "prod"}));

        check!(violations == vec![]);
    }

    #[test]
    fn keywords_beyond_the_basic_ones_are_enforced() {
        let schema = schema(json!({
            "properties": {
                "host": {"type": "string", "pattern": "^[a-z]+$"},
                "mode": {"anyOf": [{"const": "dev"}, {"const": "prod"}]},
                "port": {"$ref": "#/definitions/port"}
            },
            "definitions": {"port": {"type": "integer"}}
        }));

        let violations = validate(&schema, json!({"host": "BAD HOST!", "mode": "chaos", "port": "eighty"}));

        check!(violations.len() == 3);
        check!(violations[0].path == path("/host"));
        check!(violations[0].rule == Rule::Constraint { keyword: "pattern".to_string() });
        check!(violations[1].path == path("/mode"));
        check!(violations[1].rule == Rule::Constraint { keyword: "anyOf".to_string() });
        check!(violations[2].path == path("/port"));
        check!(
            violations[2].rule
                == Rule::TypeMismatch { expected: vec![SchemaType::Integer], found: SchemaType::String }
        );
    }

    #[test]
    fn missing_required_key_is_reported_at_the_mapping() {
        let schema = schema(json!({
            "properties": {"db": {"type": "object", "required": ["host", "port"]}}
        }));

        let violations = validate(&schema, json!({"db": {"host": "localhost"}}));

        check!(violations.len() == 1);
        check!(violations[0].path == path("/db"));
        check!(violations[0].rule.to_string() == "missing required key: port");
    }

    #[test]
    fn enum_membership_treats_integral_numbers_alike() {
        let schema = schema(json!({"properties": {"level": {"enum": ["debug", "info", 1]}}}));

        check!(validate(&schema, json!({"level": 1.0})) == vec![]);

        let violations = validate(&schema, json!({"level": "trace"}));
        check!(violations.len() == 1);
        check!(violations[0].rule == Rule::NotInEnum);
    }

    #[test]
    fn union_types_accept_any_listed_type() {
        let schema = schema(json!({"type": ["string", "integer"]}));

        check!(schema.validate(&Value::from("30s")) == vec![]);
        check!(schema.validate(&Value::from(30_i64)) == vec![]);

        let violations = schema.validate(&Value::Number(2.5));
        let_assert!([Violation { rule: Rule::TypeMismatch { expected, found }, .. }] = violations.as_slice());
        check!(expected.contains(&SchemaType::String));
        check!(expected.contains(&SchemaType::Integer));
        check!(*found == SchemaType::Number);
    }

    #[test]
    fn list_items_are_validated_with_their_index() {
        let schema = schema(json!({"properties": {"hosts": {"items": {"type": "string", "minLength": 2}}}}));

        let violations = validate(&schema, json!({"hosts": ["ab", 3, "c"]}));

        check!(violations.len() == 2);
        check!(violations[0].path == path("/hosts/1"));
        check!(violations[1].path == path("/hosts/2"));
        check!(violations[1].rule == Rule::Constraint { keyword: "minLength".to_string() });
    }

    #[test]
    fn additional_properties_false_flags_each_undeclared_key() {
        let schema = schema(json!({"properties": {"a": true}, "additionalProperties": false}));

        let violations = validate(&schema, json!({"a": 1, "b": 2, "c": 3}));

        let paths: Vec<String> = violations.iter().map(|v| v.path.to_string()).collect();
        check!(paths == vec!["/b", "/c"]);
        check!(violations[0].rule.to_string() == "unexpected key: b");
    }

    #[test]
    fn range_limits_name_their_keyword() {
        let schema = schema(json!({
            "properties": {
                "workers": {"minimum": 1},
                "ratio": {"exclusiveMaximum": 1},
                "tags": {"maxItems": 1}
            }
        }));

        let violations = validate(&schema, json!({"workers": 0, "ratio": 1, "tags": [1, 2]}));
        let rules: Vec<String> = violations.iter().map(|v| v.rule.to_string()).collect();

        check!(
            rules
                == vec![
                    "constraint not met: exclusiveMaximum",
                    "constraint not met: maxItems",
                    "constraint not met: minimum"
                ]
        );
    }

    #[test]
    fn const_mismatch() {
        let schema = schema(json!({"properties": {"version": {"const": 2}}}));

        let violations = validate(&schema, json!({"version": 1}));

        check!(violations.len() == 1);
        check!(violations[0].rule == Rule::ConstMismatch);
    }

    #[test]
    fn false_schema_rejects_any_value() {
        let schema = schema(json!({"properties": {"legacy": false}}));

        check!(validate(&schema, json!({})) == vec![]);
        check!(validate(&schema, json!({"legacy": null}))[0].rule == Rule::NotAllowed);
    }

    #[test]
    fn compile_rejects_unknown_type_names() {
        let_assert!(
            Err(SchemaError::Invalid { .. }) = Schema::compile(&Value::from(json!({
                "properties": {"port": {"type": "int"}}
            })))
        );
    }

    #[test]
    fn compile_rejects_malformed_keywords() {
        check!(Schema::compile(&Value::from(json!({"required": "port"}))).is_err());
        check!(Schema::compile(&Value::from(json!({"minLength": -1}))).is_err());
        check!(Schema::compile(&Value::from(json!(5))).is_err());
    }

    #[test]
    fn keyword_is_the_last_schema_token() {
        check!(keyword("/properties/host/pattern") == "pattern");
        check!(keyword("/properties/port/$ref/type") == "type");
        check!(keyword("") == "schema");
    }
}
