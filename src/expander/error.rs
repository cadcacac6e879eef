use std::fmt::Write as _;

use thiserror::Error;

use crate::expander::GeneratorError;
use crate::matcher::MatchError;
use crate::pattern::ParseError;

/// Why one rule was skipped during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// A skipped rule together with its pattern text, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub pattern: String,
    pub error: RuleError,
}

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("no matching rule ({tried} tried): {details}", tried = .failures.len(), details = summarize(.failures))]
    NoRuleMatched { failures: Vec<RuleFailure> },
    #[error("generator for rule '{pattern}' failed: {source}")]
    Generator {
        pattern: String,
        #[source]
        source: GeneratorError,
    },
}

fn summarize(failures: &[RuleFailure]) -> String {
    if failures.is_empty() {
        return "no rules registered".to_string();
    }
    let mut out = String::new();
    for (idx, failure) in failures.iter().enumerate() {
        if idx > 0 {
            out.push_str("; ");
        }
        let _ = write!(out, "'{}': {}", failure.pattern, failure.error);
    }
    out
}
