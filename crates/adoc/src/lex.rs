// std imports
use std::fmt::{self, Display};

// third-party imports
use memchr::memchr2;
use tokstate::{State, Tokens};

// local imports
use crate::{Token, error::LexError};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Header,
    Text,
    Newline,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Text => "text",
            Self::Newline => "newline",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---

/// LineState is the position of the tokenizer within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    /// At the beginning of a line, where a header marker or a line break may appear.
    #[default]
    Start,
    /// Inside a line, where everything up to the line break is text.
    Line,
}

impl State for LineState {
    type Kind = Kind;
    type Error = LexError;

    fn parse<'s>(&self, rest: &'s str) -> Result<(Token<'s>, Self), LexError> {
        match self {
            Self::Start => {
                if rest.starts_with('=') {
                    let level = rest.bytes().take_while(|&b| b == b'=').count();
                    if rest.as_bytes().get(level) != Some(&b' ') {
                        return Err(LexError::MalformedHeader { level });
                    }
                    return Ok((Token::new(Kind::Header, &rest[..=level]), Self::Line));
                }
                if let Some(n) = line_break(rest) {
                    return Ok((Token::new(Kind::Newline, &rest[..n]), Self::Start));
                }
                Self::Line.parse(rest)
            }
            Self::Line => match memchr2(b'\n', b'\r', rest.as_bytes()) {
                Some(0) => Self::Start.parse(rest),
                Some(n) => Ok((Token::new(Kind::Text, &rest[..n]), Self::Start)),
                None => Ok((Token::new(Kind::Text, rest), Self::Start)),
            },
        }
    }
}

/// Returns the length of the line break at the beginning of `s`, if any.
fn line_break(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [b'\r', b'\n', ..] => Some(2),
        [b'\n' | b'\r', ..] => Some(1),
        _ => None,
    }
}

/// Tokenizes a document starting at the beginning of a line.
pub fn tokenize(input: &str) -> Tokens<'_, LineState> {
    tokstate::tokenize(input, LineState::Start)
}
