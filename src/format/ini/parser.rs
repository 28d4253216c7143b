use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, one_of, space0},
    combinator::{cut, eof, map, opt, recognize, rest, value, verify},
    error::context,
    sequence::{preceded, terminated},
};
use nom_language::error::{VerboseError, VerboseErrorKind};

// (blank)               - Blank
// ; comment / # comment - Blank
// [server]              - Section(["server"])
// [server.tls]          - Section(["server", "tls"])
// port = 8080           - Entry { key: "port", value: "8080" }
// name: "web 1"         - Entry { key: "name", value: "\"web 1\"" }
// [server               - error, missing ']'
// [a..b]                - error, empty section name part
// just text             - error, missing '=' or ':'
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Line<'a> {
    Blank,
    Section(Vec<&'a str>),
    Entry { key: &'a str, value: &'a str },
}

pub(super) fn parse_line(input: &str) -> IResult<&str, Line<'_>, VerboseError<&str>> {
    preceded(space0, alt((blank, section, entry))).parse(input)
}

fn blank(input: &str) -> IResult<&str, Line<'_>, VerboseError<&str>> {
    value(Line::Blank, alt((eof, comment))).parse(input)
}

fn comment(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(preceded(one_of(";#"), rest)).parse(input)
}

fn section(input: &str) -> IResult<&str, Line<'_>, VerboseError<&str>> {
    let name = verify(take_while1(|c: char| c != ']'), |name: &str| {
        name.split('.').all(|part| !part.trim().is_empty())
    });

    map(
        preceded(
            char('['),
            cut(terminated(
                context("expected a section name", name),
                (
                    context("expected ']'", char(']')),
                    space0,
                    opt(comment),
                    context("unexpected text after the section header", eof),
                ),
            )),
        ),
        |name: &str| Line::Section(name.split('.').map(str::trim).collect()),
    )
    .parse(input)
}

fn entry(input: &str) -> IResult<&str, Line<'_>, VerboseError<&str>> {
    let (input, key) =
        context("expected a key", take_while1(|c: char| c != '=' && c != ':')).parse(input)?;
    let (input, _) = cut(context("expected '=' or ':' after the key", one_of("=:"))).parse(input)?;
    let (input, value) = rest::<_, VerboseError<&str>>(input)?;

    Ok((
        input,
        Line::Entry {
            key: key.trim_end(),
            value: value.trim(),
        },
    ))
}

/// Returns the 1-based column and a message for a failed line.
pub(super) fn describe_error(line: &str, err: &VerboseError<&str>) -> (usize, String) {
    let context = err.errors.iter().find_map(|(fragment, kind)| match kind {
        VerboseErrorKind::Context(ctx) => Some((*fragment, ctx.to_string())),
        _ => None,
    });

    let (fragment, message) = match context {
        Some(found) => found,
        None => match err.errors.first() {
            Some((fragment, kind)) => (*fragment, format!("parser error: {kind:?}")),
            None => (line, "invalid line".to_string()),
        },
    };

    let consumed = &line[..line.len().saturating_sub(fragment.len())];
    (consumed.chars().count() + 1, message)
}
