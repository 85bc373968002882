// third-party imports
use thiserror::Error;

// local imports
use crate::lex::Kind;

// ---

/// LexError is an error which may occur when a line cannot be recognized.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    #[error("header marker of level {level} is not followed by a space")]
    MalformedHeader { level: usize },
}

/// Error is an error which may occur when assembling blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Tokenize(#[from] tokstate::Error<LexError>),
    #[error("expected {expected} at offset {pos}, found {found}")]
    UnexpectedToken { expected: Kind, found: Kind, pos: usize },
    #[error("expected {expected} at offset {pos}, found end of input")]
    UnexpectedEof { expected: Kind, pos: usize },
    #[error("token stream is exhausted")]
    Exhausted,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
