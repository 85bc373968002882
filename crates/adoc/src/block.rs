// std imports
use std::iter::FusedIterator;
use std::ops::Range;

// third-party imports
use tokstate::Cursor;

// local imports
use crate::{
    Positioned,
    error::{Error, Result},
    lex::{Kind, LineState},
};

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'s> {
    /// A header marker followed by the title text on the same line.
    Header { marker: Positioned<'s>, title: Positioned<'s> },
    /// Consecutive text lines, including the line breaks between them.
    Paragraph(Vec<Positioned<'s>>),
}

impl Block<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Paragraph(_) => "paragraph",
        }
    }

    /// Returns the header level, i.e. the number of `=` in the marker.
    pub fn level(&self) -> Option<usize> {
        match self {
            Self::Header { marker, .. } => Some(marker.text().trim_end_matches(' ').len()),
            Self::Paragraph(_) => None,
        }
    }

    pub fn pos(&self) -> usize {
        self.span().start
    }

    /// Returns the byte range the block occupies in the original input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Header { marker, title } => marker.pos..title.end(),
            Self::Paragraph(tokens) => match (tokens.first(), tokens.last()) {
                (Some(first), Some(last)) => first.pos..last.end(),
                _ => 0..0,
            },
        }
    }
}

// ---

/// Assembles blocks of a document.
pub fn blocks(input: &str) -> Blocks<'_> {
    Blocks {
        cursor: Some(Cursor::new(input, LineState::Start)),
        pending: None,
        done: false,
    }
}

/// Blocks is a lazy sequence of blocks produced by [`blocks`].
///
/// It drives the tokenizer one step at a time and keeps at most one token
/// of lookahead that has been pulled but belongs to the next block.
#[derive(Debug, Clone)]
pub struct Blocks<'s> {
    cursor: Option<Cursor<'s, LineState>>,
    pending: Option<Positioned<'s>>,
    done: bool,
}

impl<'s> Blocks<'s> {
    fn pull(&mut self) -> Result<Positioned<'s>> {
        if let Some(token) = self.pending.take() {
            return Ok(token);
        }

        let cursor = self.cursor.take().ok_or(Error::Exhausted)?;
        let (token, next) = cursor.step()?;
        self.cursor = next;
        Ok(token)
    }

    fn push_back(&mut self, token: Positioned<'s>) {
        debug_assert!(self.pending.is_none());
        self.pending = Some(token);
    }

    fn next_block(&mut self) -> Result<Option<Block<'s>>> {
        loop {
            let token = self.pull()?;
            match token.kind().copied() {
                None => return Ok(None),
                Some(Kind::Newline) => continue,
                Some(Kind::Header) => return self.header(token).map(Some),
                Some(Kind::Text) => return self.paragraph(token).map(Some),
            }
        }
    }

    fn header(&mut self, marker: Positioned<'s>) -> Result<Block<'s>> {
        let title = self.pull()?;
        match title.kind().copied() {
            Some(Kind::Text) => {}
            Some(found) => {
                return Err(Error::UnexpectedToken {
                    expected: Kind::Text,
                    found,
                    pos: title.pos,
                });
            }
            None => {
                return Err(Error::UnexpectedEof {
                    expected: Kind::Text,
                    pos: title.pos,
                });
            }
        }

        let end = self.pull()?;
        match end.kind().copied() {
            Some(Kind::Newline) => {}
            None => self.push_back(end),
            Some(found) => {
                return Err(Error::UnexpectedToken {
                    expected: Kind::Newline,
                    found,
                    pos: end.pos,
                });
            }
        }

        Ok(Block::Header { marker, title })
    }

    fn paragraph(&mut self, first: Positioned<'s>) -> Result<Block<'s>> {
        let mut tokens = vec![first];
        loop {
            let token = self.pull()?;
            match token.kind().copied() {
                Some(Kind::Text | Kind::Newline) => {
                    tokens.push(token);
                    if ends_with_blank_line(&tokens) {
                        break;
                    }
                }
                Some(Kind::Header) | None => {
                    self.push_back(token);
                    break;
                }
            }
        }

        Ok(Block::Paragraph(tokens))
    }
}

impl<'s> Iterator for Blocks<'s> {
    type Item = Result<Block<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.next_block().transpose();
        match &result {
            Some(Ok(block)) => log::trace!("{} block at {}", block.name(), block.pos()),
            Some(Err(err)) => {
                log::debug!("block assembly failed: {err}");
                self.done = true;
            }
            None => self.done = true,
        }
        result
    }
}

impl FusedIterator for Blocks<'_> {}

fn ends_with_blank_line(tokens: &[Positioned<'_>]) -> bool {
    matches!(tokens, [.., a, b] if a.kind() == Some(&Kind::Newline) && b.kind() == Some(&Kind::Newline))
}

#[cfg(test)]
mod tests;
