use thiserror::Error;

use crate::cards::{Hand, ParseError, HAND_SIZE};

pub const RECORD_TOKENS: usize = 2 * HAND_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 10 card tokens, got {0}")]
    WrongTokenCount(usize),
    #[error(transparent)]
    Card(#[from] ParseError),
}

/// One input line: the first five tokens are player one's hand, the last
/// five player two's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub first: Hand,
    pub second: Hand,
}

impl Record {
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != RECORD_TOKENS {
            return Err(RecordError::WrongTokenCount(tokens.len()));
        }

        let first = Hand::from_tokens(&tokens[..HAND_SIZE])?;
        let second = Hand::from_tokens(&tokens[HAND_SIZE..])?;

        Ok(Self { first, second })
    }
}
