use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Pattern-text parse failures. Every variant carries the byte offset into
/// the pattern where the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated group: '(' at byte {start} has no matching ')'")]
    UnterminatedGroup { start: usize },
    #[error("unterminated optional: '[' at byte {start} has no matching ']'")]
    UnterminatedOptional { start: usize },
    #[error("escape character at byte {index} has nothing to escape")]
    LoneEscape { index: usize },
    #[error("'$' at byte {index} is not followed by a variable name")]
    VariableMissingName { index: usize },
    #[error("quantifier '{modifier}' at byte {index} has no preceding atom")]
    DanglingQuantifier { index: usize, modifier: char },
    #[error("unexpected '{delimiter}' at byte {index}")]
    UnexpectedDelimiter { index: usize, delimiter: char },
}

impl ParseError {
    /// Byte offset into the pattern text, always within `0..=len`.
    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedGroup { start } | Self::UnterminatedOptional { start } => *start,
            Self::LoneEscape { index }
            | Self::VariableMissingName { index }
            | Self::DanglingQuantifier { index, .. }
            | Self::UnexpectedDelimiter { index, .. } => *index,
        }
    }
}
