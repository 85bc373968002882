// std imports
use std::fmt::{self, Debug, Display};
use std::ops::Range;

// ---

/// Token is a recognized lexical unit.
///
/// A token is either a lexeme, which pairs a grammar-defined kind with the exact
/// source text it was recognized from, or the end-of-input sentinel.
/// Two tokens are equal if they have the same kind and the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'s, K> {
    Lexeme(K, &'s str),
    Eof,
}

impl<'s, K> Token<'s, K> {
    #[inline]
    pub fn new(kind: K, text: &'s str) -> Self {
        Self::Lexeme(kind, text)
    }

    #[inline]
    pub fn eof() -> Self {
        Self::Eof
    }

    /// Returns the kind of the token or `None` for the end-of-input sentinel.
    #[inline]
    pub fn kind(&self) -> Option<&K> {
        match self {
            Self::Lexeme(kind, _) => Some(kind),
            Self::Eof => None,
        }
    }

    /// Returns the source text of the token, always empty for the end-of-input sentinel.
    #[inline]
    pub fn text(&self) -> &'s str {
        match self {
            Self::Lexeme(_, text) => text,
            Self::Eof => "",
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl<K: Debug> Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexeme(kind, text) => write!(f, "{kind:?}({text:?})"),
            Self::Eof => write!(f, "Eof"),
        }
    }
}

// ---

/// Positioned is a token together with the byte offset in the original input where its text begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Positioned<'s, K> {
    pub pos: usize,
    pub token: Token<'s, K>,
}

impl<'s, K> Positioned<'s, K> {
    #[inline]
    pub fn new(pos: usize, token: Token<'s, K>) -> Self {
        Self { pos, token }
    }

    /// Returns the byte range the token occupies in the original input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.pos..self.end()
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.pos + self.token.len()
    }

    #[inline]
    pub fn kind(&self) -> Option<&K> {
        self.token.kind()
    }

    #[inline]
    pub fn text(&self) -> &'s str {
        self.token.text()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.token.is_eof()
    }
}

impl<K: Debug> Display for Positioned<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.token, self.pos)
    }
}
