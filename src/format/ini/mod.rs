//! INI documents as a two-level (or deeper) mapping.
//!
//! Keys before the first section header live at the root. Dotted section
//! names nest, so `[server.tls]` opens `{"server": {"tls": {...}}}`. Values
//! are typed: `true`/`false` become booleans, numeric literals numbers and
//! quoted text strings without the quotes. Anything else is kept as trimmed
//! text. A repeated key keeps its last value.

mod parser;

use parser::{Line, describe_error, parse_line};

use crate::value::{Mapping, Value};

use super::FormatError;

pub fn parse(text: &str) -> Result<Value, FormatError> {
    let mut root = Mapping::new();
    let mut section: Vec<String> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let (_, parsed) = parse_line(line).map_err(|err| match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                let (column, message) = describe_error(line, &e);
                FormatError::ini(line_no, column, message)
            }
            nom::Err::Incomplete(_) => FormatError::ini(line_no, line.len() + 1, "unexpected end of line"),
        })?;

        match parsed {
            Line::Blank => {}
            Line::Section(parts) => {
                section = parts.into_iter().map(str::to_string).collect();
                section_table(&mut root, &section, line_no)?;
            }
            Line::Entry { key, value } => {
                section_table(&mut root, &section, line_no)?.insert(key, typed_value(value));
            }
        }
    }

    Ok(Value::Mapping(root))
}

/// Walks to the mapping of `section`, creating missing levels.
fn section_table<'m>(
    root: &'m mut Mapping,
    section: &[String],
    line: usize,
) -> Result<&'m mut Mapping, FormatError> {
    let mut table = root;
    for (depth, name) in section.iter().enumerate() {
        if !table.contains_key(name) {
            table.insert(name.clone(), Value::Mapping(Mapping::new()));
        }
        table = match table.get_mut(name) {
            Some(Value::Mapping(inner)) => inner,
            _ => {
                return Err(FormatError::ini(
                    line,
                    1,
                    format!(
                        "section [{}] clashes with the value '{}'",
                        section.join("."),
                        section[..=depth].join(".")
                    ),
                ));
            }
        };
    }
    Ok(table)
}

fn typed_value(raw: &str) -> Value {
    if let Some(text) = unquote(raw) {
        return Value::String(text.to_string());
    }

    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => match number(raw) {
            Some(n) => Value::Number(n),
            None => Value::String(raw.to_string()),
        },
    }
}

fn unquote(raw: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        raw.strip_prefix(quote)
            .and_then(|inner| inner.strip_suffix(quote))
    })
}

/// Decimal or exponent notation only; `inf`, `nan` and hex stay text.
fn number(raw: &str) -> Option<f64> {
    let numeric = raw.chars().any(|c| c.is_ascii_digit())
        && raw.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c));
    if !numeric {
        return None;
    }
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}
