//! Compiled pattern segments and per-segment matching

/// One token of a single-level wildcard segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A literal character
    Char(char),
    /// `?`: exactly one character
    AnyChar,
    /// `*`: any run of characters, possibly empty
    AnyRun,
}

/// One `/`-delimited piece of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// `**`: zero or more whole path segments
    Recursive,
    /// Plain text, compared whole
    Literal(String),
    /// Text mixed with `*` and `?`, confined to one path segment
    Wildcard(Vec<Token>),
}

impl Segment {
    /// Match one path segment. Never called for [`Segment::Recursive`].
    pub(crate) fn matches(&self, text: &str, case_sensitive: bool) -> bool {
        match self {
            Segment::Recursive => true,
            Segment::Literal(literal) => {
                if case_sensitive {
                    literal == text
                } else {
                    literal.chars().count() == text.chars().count()
                        && literal
                            .chars()
                            .zip(text.chars())
                            .all(|(a, b)| chars_eq(a, b, false))
                }
            },
            Segment::Wildcard(tokens) => {
                let text: Vec<char> = text.chars().collect();
                match_tokens(tokens, &text, case_sensitive)
            },
        }
    }
}

fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

/// Anchored wildcard match of `tokens` against `text`.
///
/// Single-star backtracking: on a mismatch, resume just after the most recent
/// `*` with that star absorbing one more character. Earlier stars never need
/// revisiting, so this runs in O(tokens * text).
fn match_tokens(tokens: &[Token], text: &[char], case_sensitive: bool) -> bool {
    let mut p = 0;
    let mut t = 0;
    // (token index after the last star, text index that star resumes from)
    let mut resume: Option<(usize, usize)> = None;

    while t < text.len() {
        match tokens.get(p) {
            Some(Token::AnyRun) => {
                p += 1;
                resume = Some((p, t));
                continue;
            },
            Some(Token::AnyChar) => {
                p += 1;
                t += 1;
                continue;
            },
            Some(Token::Char(c)) if chars_eq(*c, text[t], case_sensitive) => {
                p += 1;
                t += 1;
                continue;
            },
            _ => {},
        }

        match resume {
            Some((star_p, star_t)) => {
                p = star_p;
                t = star_t + 1;
                resume = Some((star_p, t));
            },
            None => return false,
        }
    }

    tokens[p..].iter().all(|token| *token == Token::AnyRun)
}

/// Anchored match of compiled segments against path segments.
///
/// Same resume scheme as [`match_tokens`], one level up: `**` plays the star
/// and every other segment consumes exactly one path segment. O(pattern * path).
pub(crate) fn match_segments(pattern: &[Segment], path: &[&str], case_sensitive: bool) -> bool {
    let mut p = 0;
    let mut t = 0;
    // (segment index after the last `**`, path index that `**` resumes from)
    let mut resume: Option<(usize, usize)> = None;

    while t < path.len() {
        match pattern.get(p) {
            Some(Segment::Recursive) => {
                p += 1;
                resume = Some((p, t));
                continue;
            },
            Some(segment) if segment.matches(path[t], case_sensitive) => {
                p += 1;
                t += 1;
                continue;
            },
            _ => {},
        }

        match resume {
            Some((star_p, star_t)) => {
                p = star_p;
                t = star_t + 1;
                resume = Some((star_p, t));
            },
            None => return false,
        }
    }

    pattern[p..].iter().all(|segment| *segment == Segment::Recursive)
}
