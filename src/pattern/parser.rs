//! Glob pattern compiler
//!
//! Grammar, per `/`-separated segment:
//!
//! - `**` alone: recursive wildcard, zero or more whole path segments
//! - `*`: any run of characters inside one segment
//! - `?`: exactly one character inside one segment
//! - anything else: literal
//!
//! `\` is read as a separator, like in paths. Empty and `.` segments are
//! dropped, so `/src//./*.rs` compiles the same as `src/*.rs`. Characters that
//! would start a character class or brace expansion (`[`, `]`, `{`, `}`) are
//! rejected rather than matched literally.

use super::segment::{Segment, Token};
use crate::core::error::PatternError;

/// Characters reserved for syntax this grammar does not support
const UNSUPPORTED: [char; 4] = ['[', ']', '{', '}'];

/// Compile a pattern source into segments
pub(crate) fn parse(source: &str) -> Result<Vec<Segment>, PatternError> {
    if let Some((position, ch)) = source
        .chars()
        .enumerate()
        .find(|(_, c)| UNSUPPORTED.contains(c))
    {
        return Err(PatternError::UnsupportedSyntax {
            pattern: source.to_string(),
            ch,
            position,
        });
    }

    let mut segments = Vec::new();
    // char offset of the current raw segment within `source`
    let mut offset = 0;

    for raw in source.split(is_separator) {
        let start = offset;
        offset += raw.chars().count() + 1;

        if raw.is_empty() || raw == "." {
            continue;
        }

        let segment = compile_segment(source, raw, start)?;

        // `**/**` is the same as `**`; collapsing keeps backtracking shallow
        if segment == Segment::Recursive && segments.last() == Some(&Segment::Recursive) {
            continue;
        }
        segments.push(segment);
    }

    Ok(segments)
}

pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn compile_segment(source: &str, raw: &str, start: usize) -> Result<Segment, PatternError> {
    if raw == "**" {
        return Ok(Segment::Recursive);
    }

    if let Some(index) = raw.find("**") {
        return Err(PatternError::InvalidRecursiveWildcard {
            pattern: source.to_string(),
            position: start + raw[..index].chars().count(),
        });
    }

    if !raw.contains(['*', '?']) {
        return Ok(Segment::Literal(raw.to_string()));
    }

    let tokens = raw
        .chars()
        .map(|c| match c {
            '*' => Token::AnyRun,
            '?' => Token::AnyChar,
            c => Token::Char(c),
        })
        .collect();

    Ok(Segment::Wildcard(tokens))
}
