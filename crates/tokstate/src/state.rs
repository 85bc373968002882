// std imports
use std::fmt::Debug;

// local imports
use crate::token::Token;

// ---

/// State is a single step of recognition in a grammar.
///
/// Given the input that has not been consumed yet, a state recognizes a token
/// at the very beginning of it and decides which state continues from there.
/// Grammars usually implement this trait for an enum of all their states,
/// and a state is free to delegate to another state's [`State::parse`].
///
/// The returned token must be a [`Token::Lexeme`] whose text is a non-empty prefix of `rest`.
/// The engine never calls `parse` with empty input, it produces [`Token::Eof`] on its own.
pub trait State: Sized {
    type Kind: Debug;
    type Error;

    fn parse<'s>(&self, rest: &'s str) -> Result<(Token<'s, Self::Kind>, Self), Self::Error>;
}
