mod error;
mod rule;

pub use error::{ExpandError, RuleError, RuleFailure};
pub use rule::{GeneratorError, Rule};

use std::fmt;

use crate::matcher::{Capture, match_pattern};
use crate::pattern::ParseError;
use crate::token::Token;

/// Ordered list of rules; declaration order is the only dispatch priority.
/// The first rule whose pattern totally matches the input has its generator
/// invoked, and later rules are never consulted.
pub struct Expander<T, O> {
    rules: Vec<Rule<T, O>>,
}

impl<T: Token, O> Expander<T, O> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builder-style append of a rule built from `pattern` and `generator`.
    pub fn rule<P, F>(mut self, pattern: P, generator: F) -> Self
    where
        P: Into<String>,
        F: Fn(&[T], &[Capture<'_, T>]) -> Result<O, GeneratorError> + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(pattern, generator));
        self
    }

    pub fn push(&mut self, rule: Rule<T, O>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule<T, O>] {
        &self.rules
    }

    /// Tries each rule in declaration order and returns the first matching
    /// rule's generator value. When no rule matches, the error carries one
    /// failure per rule for diagnostics. Generator errors pass through with
    /// their source preserved.
    #[tracing::instrument(
        level = "trace",
        skip(self, tokens),
        fields(rules = self.rules.len() as u64, tokens = tokens.len() as u64)
    )]
    pub fn expand(&self, tokens: &[T]) -> Result<O, ExpandError> {
        let mut failures = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let ast = match rule.ast() {
                Ok(ast) => ast,
                Err(err) => {
                    tracing::trace!(pattern = rule.pattern_text(), error = %err, "rule poisoned");
                    failures.push(RuleFailure {
                        pattern: rule.pattern_text().to_string(),
                        error: RuleError::Parse(err.clone()),
                    });
                    continue;
                }
            };
            match match_pattern(ast, tokens) {
                Ok(captures) => {
                    return rule.generate(tokens, &captures).map_err(|source| {
                        ExpandError::Generator {
                            pattern: rule.pattern_text().to_string(),
                            source,
                        }
                    });
                }
                Err(err) => {
                    tracing::trace!(pattern = rule.pattern_text(), error = %err, "rule did not match");
                    failures.push(RuleFailure {
                        pattern: rule.pattern_text().to_string(),
                        error: RuleError::Match(err),
                    });
                }
            }
        }
        Err(ExpandError::NoRuleMatched { failures })
    }

    /// Like [`expand`](Self::expand), but "no rule matched" and generator
    /// failures come back as `None`. A rule whose pattern text does not parse
    /// is still an error; that is a bug in the rule set, not in the input.
    pub fn try_expand(&self, tokens: &[T]) -> Result<Option<O>, ParseError> {
        for rule in &self.rules {
            let ast = rule.ast().map_err(Clone::clone)?;
            let Ok(captures) = match_pattern(ast, tokens) else {
                continue;
            };
            return Ok(rule.generate(tokens, &captures).ok());
        }
        Ok(None)
    }
}

impl<T: Token, O> Default for Expander<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> fmt::Debug for Expander<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander").field("rules", &self.rules).finish()
    }
}
