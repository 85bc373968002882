//! Incremental tokenizer driven by pluggable parser states.
//!
//! A grammar is a set of small [`State`]s. Each state recognizes one token at the
//! beginning of the remaining input and names the state that continues after it.
//! The engine keeps track of positions, stops at the end of input and checks that
//! every state keeps its part of the contract.
//!
//! ```
//! use std::convert::Infallible;
//! use tokstate::{State, Token, tokenize};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Word,
//!     Space,
//! }
//!
//! struct Words;
//!
//! impl State for Words {
//!     type Kind = Kind;
//!     type Error = Infallible;
//!
//!     fn parse<'s>(&self, rest: &'s str) -> Result<(Token<'s, Kind>, Self), Infallible> {
//!         let (kind, n) = match rest.find(' ') {
//!             Some(0) => (Kind::Space, 1),
//!             Some(n) => (Kind::Word, n),
//!             None => (Kind::Word, rest.len()),
//!         };
//!         Ok((Token::new(kind, &rest[..n]), Words))
//!     }
//! }
//!
//! let texts = tokenize("a bc", Words)
//!     .map(|token| token.map(|token| token.text()))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(texts, ["a", " ", "bc", ""]);
//! ```

pub mod engine;
pub mod error;
pub mod state;
pub mod token;

pub use engine::{Cursor, Step, Tokens, tokenize};
pub use error::Error;
pub use state::State;
pub use token::{Positioned, Token};
