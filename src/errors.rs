use thiserror::Error;

use crate::expander::ExpandError;
use crate::matcher::MatchError;
use crate::pattern::ParseError;

/// Single `?`-able error type for callers that mix parsing, matching and
/// expansion in one flow.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Expand(#[from] ExpandError),
}

pub type EngineResult<T> = Result<T, EngineError>;
