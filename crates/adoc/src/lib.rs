//! Header and paragraph recognition for a lightweight markup dialect.
//!
//! Lines starting with one or more `=` followed by a space are headers,
//! any other non-empty lines are text, and blank lines separate paragraphs.

pub mod block;
pub mod error;
pub mod lex;

pub use block::{Block, Blocks, blocks};
pub use error::{Error, LexError};
pub use lex::{Kind, LineState, tokenize};

// ---

pub type Token<'s> = tokstate::Token<'s, Kind>;
pub type Positioned<'s> = tokstate::Positioned<'s, Kind>;
