use thiserror::Error;

pub type MatchResult<T> = Result<T, MatchError>;

/// Why a pattern rejected a token sequence. `token_index` is where in the
/// input the walk stopped; `pattern_position` is the byte offset of the
/// pattern node that rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("expected '{expected}', got '{got}'")]
    UnexpectedToken {
        expected: String,
        got: String,
        token_index: usize,
        pattern_position: usize,
    },
    #[error("expected '{expected}', got end of input")]
    UnexpectedEndOfInput {
        expected: String,
        token_index: usize,
        pattern_position: usize,
    },
    #[error("expected a token to bind '${name}', got end of input")]
    MissingVariableToken {
        name: String,
        token_index: usize,
        pattern_position: usize,
    },
    #[error("expected one or more matches")]
    ExpectedOneOrMore {
        token_index: usize,
        pattern_position: usize,
    },
    #[error("expected zero or one match, got a second")]
    ExpectedAtMostOne {
        token_index: usize,
        pattern_position: usize,
    },
    #[error("pattern matched only {consumed} of {total} tokens")]
    UnconsumedInput {
        consumed: usize,
        total: usize,
        pattern_position: usize,
    },
}

impl MatchError {
    pub fn token_index(&self) -> usize {
        match self {
            Self::UnexpectedToken { token_index, .. }
            | Self::UnexpectedEndOfInput { token_index, .. }
            | Self::MissingVariableToken { token_index, .. }
            | Self::ExpectedOneOrMore { token_index, .. }
            | Self::ExpectedAtMostOne { token_index, .. } => *token_index,
            Self::UnconsumedInput { consumed, .. } => *consumed,
        }
    }

    pub fn pattern_position(&self) -> usize {
        match self {
            Self::UnexpectedToken {
                pattern_position, ..
            }
            | Self::UnexpectedEndOfInput {
                pattern_position, ..
            }
            | Self::MissingVariableToken {
                pattern_position, ..
            }
            | Self::ExpectedOneOrMore {
                pattern_position, ..
            }
            | Self::ExpectedAtMostOne {
                pattern_position, ..
            }
            | Self::UnconsumedInput {
                pattern_position, ..
            } => *pattern_position,
        }
    }
}
