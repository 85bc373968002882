// third-party imports
use thiserror::Error;

// ---

/// Error is an error which may occur during tokenization.
///
/// Any error except [`Error::State`] means the grammar's states broke the parsing contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    #[error("parser state failed at offset {pos}: {source}")]
    State { pos: usize, source: E },
    #[error("parser state made no progress at offset {pos}")]
    EmptyToken { pos: usize },
    #[error("token text {text:?} at offset {pos} is not a prefix of the remaining input")]
    NotAPrefix { pos: usize, text: String },
    #[error("end of input reported at offset {pos} with {remaining} bytes left")]
    UnconsumedInput { pos: usize, remaining: usize },
}

impl<E> Error<E> {
    /// Returns the offset in the original input where the error occurred.
    pub fn pos(&self) -> usize {
        match self {
            Self::State { pos, .. } => *pos,
            Self::EmptyToken { pos } => *pos,
            Self::NotAPrefix { pos, .. } => *pos,
            Self::UnconsumedInput { pos, .. } => *pos,
        }
    }

    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::State { .. })
    }
}
