//! Placeholder interpolation for message text.
//!
//! Messages may contain `{name}` placeholders. `{{` and `}}` produce literal
//! braces. Any other brace is kept as text, so malformed messages still render.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// A piece of parsed message text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Split message text into literal and placeholder segments.
pub fn parse_message(text: &str) -> Vec<Segment> {
    let mut remaining = text;
    match message(&mut remaining) {
        Ok(segments) if remaining.is_empty() => segments,
        _ => vec![Segment::Literal(text.to_string())],
    }
}

/// Substitute `args` into the placeholders of `text`.
///
/// Placeholders without a matching argument are left as written.
pub fn interpolate<K, V>(text: &str, args: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::with_capacity(text.len());
    for segment in parse_message(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(&literal),
            Segment::Placeholder(name) => {
                match args.iter().find(|(key, _)| key.as_ref() == name) {
                    Some((_, value)) => out.push_str(value.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(&name);
                        out.push('}');
                    }
                }
            }
        }
    }
    out
}

fn message(input: &mut &str) -> ModalResult<Vec<Segment>> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(merge_literals(segments))
}

fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = merged.last_mut() {
                    prev.push_str(&text);
                } else {
                    merged.push(Segment::Literal(text));
                }
            }
            placeholder @ Segment::Placeholder(_) => merged.push(placeholder),
        }
    }
    merged
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_char)).parse_next(input)
}

fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', identifier, '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}
