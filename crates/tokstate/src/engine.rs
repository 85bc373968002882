// std imports
use std::iter::FusedIterator;

// local imports
use crate::{
    error::Error,
    state::State,
    token::{Positioned, Token},
};

// ---

pub type Step<'s, S> = (Positioned<'s, <S as State>::Kind>, Option<Cursor<'s, S>>);

/// Cursor is a snapshot of a tokenization run.
///
/// It holds the current parser state, the original input and the offset of the
/// first byte not consumed yet. Each [`Cursor::step`] consumes the snapshot and
/// returns the next one, so a finished run cannot be stepped again.
#[derive(Debug, Clone)]
pub struct Cursor<'s, S> {
    state: S,
    input: &'s str,
    pos: usize,
}

impl<'s, S: State> Cursor<'s, S> {
    #[inline]
    pub fn new(input: &'s str, state: S) -> Self {
        Self { state, input, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn input(&self) -> &'s str {
        self.input
    }

    /// Returns the part of the input that has not been consumed yet.
    #[inline]
    pub fn rest(&self) -> &'s str {
        let input = self.input;
        &input[self.pos..]
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Recognizes the next token.
    ///
    /// Returns the token together with the cursor to continue from,
    /// or `None` in place of the cursor if the token is [`Token::Eof`].
    pub fn step(self) -> Result<Step<'s, S>, Error<S::Error>> {
        let pos = self.pos;
        let rest = self.rest();

        if rest.is_empty() {
            log::trace!("end of input at {pos}");
            return Ok((Positioned::new(pos, Token::Eof), None));
        }

        let (token, state) = self.state.parse(rest).map_err(|source| Error::State { pos, source })?;

        match token {
            Token::Eof => {
                return Err(Error::UnconsumedInput {
                    pos,
                    remaining: rest.len(),
                });
            }
            Token::Lexeme(_, text) if text.is_empty() => return Err(Error::EmptyToken { pos }),
            Token::Lexeme(_, text) if !rest.starts_with(text) => {
                return Err(Error::NotAPrefix {
                    pos,
                    text: text.to_owned(),
                });
            }
            Token::Lexeme(..) => {}
        }

        log::trace!("{token} at {pos}");

        let next = Self {
            state,
            input: self.input,
            pos: pos + token.len(),
        };

        Ok((Positioned::new(pos, token), Some(next)))
    }
}

// ---

/// Tokenizes `input` starting from the `initial` parser state.
///
/// The returned iterator is lazy, each token is recognized only when requested.
/// It yields positioned tokens in input order and ends right after [`Token::Eof`]
/// or after the first error.
pub fn tokenize<'s, S: State>(input: &'s str, initial: S) -> Tokens<'s, S> {
    log::debug!("tokenizing {} bytes", input.len());
    Tokens {
        cursor: Some(Cursor::new(input, initial)),
    }
}

/// Tokens is a lazy sequence of positioned tokens produced by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'s, S> {
    cursor: Option<Cursor<'s, S>>,
}

impl<'s, S: State> Tokens<'s, S> {
    /// Returns the offset of the next token or `None` if the run is finished.
    #[inline]
    pub fn offset(&self) -> Option<usize> {
        self.cursor.as_ref().map(Cursor::pos)
    }

    /// Returns the underlying cursor for step-by-step continuation.
    #[inline]
    pub fn into_cursor(self) -> Option<Cursor<'s, S>> {
        self.cursor
    }
}

impl<'s, S: State> Iterator for Tokens<'s, S> {
    type Item = Result<Positioned<'s, S::Kind>, Error<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        match cursor.step() {
            Ok((token, next)) => {
                if next.is_none() {
                    log::debug!("tokenized {} bytes", token.pos);
                }
                self.cursor = next;
                Some(Ok(token))
            }
            Err(err) => {
                log::debug!("tokenization failed at offset {}", err.pos());
                Some(Err(err))
            }
        }
    }
}

impl<S: State> FusedIterator for Tokens<'_, S> {}
