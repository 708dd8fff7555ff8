//! Low-level nom parser functions for inline CSS declaration text.
//!
//! Values are kept as raw text; the parsers only need to know enough about
//! quoting and parentheses to find declaration and token boundaries.

use nom::branch::alt;
use nom::bytes::complete::{is_not, take_while1};
use nom::character::complete::{char, digit1, multispace0, multispace1};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::multi::{many0, many0_count, many1, separated_list1};
use nom::sequence::{delimited, preceded, separated_pair, terminated};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

/// One `property: value` pair as written in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    recognize(alt((
        delimited(char('"'), opt(is_not("\"")), char('"')),
        delimited(char('\''), opt(is_not("'")), char('\'')),
    )))
    .parse(input)
}

fn parenthesized(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('('),
        many0(alt((quoted, parenthesized, is_not("()\"'")))),
        char(')'),
    ))
    .parse(input)
}

fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

/// Returns `true` if the whole of `input` is a plain CSS number (`1`, `-0.5`, `.25`).
pub fn is_number(input: &str) -> bool {
    all_consuming(parse_number).parse(input.trim()).is_ok()
}

// --- Declaration Parsers ---

fn property_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_').parse(input)
}

fn declaration_value(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((quoted, parenthesized, is_not(";\"'()"))))).parse(input)
}

fn declaration(input: &str) -> IResult<&str, Declaration<'_>> {
    map(
        separated_pair(ws(property_name), char(':'), ws(declaration_value)),
        |(property, value)| Declaration {
            property,
            value: value.trim(),
        },
    )
    .parse(input)
}

/// A declaration, or a chunk of text up to the next `;` that is not one.
fn declaration_or_skip(input: &str) -> IResult<&str, Option<Declaration<'_>>> {
    alt((map(declaration, Some), map(is_not(";"), |_| None))).parse(input)
}

fn separators(input: &str) -> IResult<&str, usize> {
    many0_count(ws(char(';'))).parse(input)
}

/// Parses a whole inline style attribute. Malformed declarations are skipped
/// up to the next `;`, the way a browser's CSS parser recovers.
pub fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration<'_>>> {
    map(
        preceded(separators, many0(terminated(declaration_or_skip, separators))),
        |items| items.into_iter().flatten().collect::<Vec<_>>(),
    )
    .parse(input)
}

fn value_token(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((quoted, parenthesized, is_not(" \t\r\n\"'()"))))).parse(input)
}

/// Splits a multi-part value (`10px calc(1em + 2px) auto`) on top-level whitespace.
pub fn value_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(multispace1, value_token).parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
