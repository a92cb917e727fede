use thiserror::Error;

/// The reader's single failure kind. Every variant is fatal for the
/// invocation: there is no recovery, token skipping, or partial tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Unexpected token \"{found}\" at {offset}")]
    UnexpectedToken { found: char, offset: usize },
    #[error("Maximum nesting depth of {limit} exceeded at {offset}")]
    DepthLimit { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte offset of the failure, when one is known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEof => None,
            ParseError::UnexpectedToken { offset, .. } | ParseError::DepthLimit { offset, .. } => {
                Some(*offset)
            }
        }
    }
}
