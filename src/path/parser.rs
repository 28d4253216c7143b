use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, satisfy},
    combinator::{eof, map, value},
    error::context,
    multi::{many0, separated_list0},
    sequence::preceded,
};
use nom_language::error::VerboseError;

use super::{Path, Segment};

// ""            - allowed - the root
// /port         - allowed - single key
// /hosts/2      - allowed - key then list index
// /a~1b/c~0d    - allowed - escaped '/' and '~' inside keys
// /foo//bar     - allowed - empty key in the middle
// /             - allowed - a single empty key
// port          - not allowed, missing leading `/`
// /a~2          - not allowed - '~' must be followed by '0' or '1'
pub(crate) fn parse_path(input: &str) -> IResult<&str, Path, VerboseError<&str>> {
    context(
        "expected a path starting with '/' or empty input",
        alt((
            // exactly empty input
            value(Path { segments: vec![] }, eof),
            // normal path: starts with '/'
            |i| {
                let (rest, segments) =
                    preceded(char('/'), separated_list0(char('/'), parse_segment)).parse(i)?;
                Ok((rest, Path { segments }))
            },
        )),
    )
    .parse(input)
}

fn parse_segment(input: &str) -> IResult<&str, Segment, VerboseError<&str>> {
    // One decoded char inside a token.
    // - `~` must be escaped (~0 or ~1), so we exclude raw '~' here.
    // - '/' terminates the token.
    let token_char = alt((unescape_json_pointer, satisfy(|c| c != '/' && c != '~')));
    context(
        "segment",
        map(many0(token_char), |chars: Vec<char>| {
            to_segment(chars.into_iter().collect::<String>())
        }),
    )
    .parse(input)
}

/// Tokens written as canonical decimal numbers address list positions.
/// `01` or `+1` stay keys.
fn to_segment(token: String) -> Segment {
    let canonical = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));

    match token.parse::<usize>() {
        Ok(index) if canonical => Segment::Index(index),
        _ => Segment::Key(token),
    }
}

fn unescape_json_pointer(input: &str) -> IResult<&str, char, VerboseError<&str>> {
    let (rest, _) = char('~').parse(input)?;
    let (rest, esc) = alt((char('0'), char('1'))).parse(rest)?;

    let decoded_char = match esc {
        '0' => '~',
        '1' => '/',
        _ => unreachable!(),
    };

    Ok((rest, decoded_char))
}
