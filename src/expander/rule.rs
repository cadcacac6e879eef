use std::fmt;
use std::sync::OnceLock;

use crate::matcher::Capture;
use crate::pattern::{ParseError, PatternAst, parse_pattern};
use crate::token::Token;

/// Errors produced by user generators. The expander passes them through
/// unchanged.
pub type GeneratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

type BoxedGenerator<T, O> =
    Box<dyn Fn(&[T], &[Capture<'_, T>]) -> Result<O, GeneratorError> + Send + Sync>;

/// One macro rule: a pattern plus the generator invoked when it matches.
///
/// The pattern text is parsed once, on first use, and the result published
/// through a `OnceLock` so concurrent dispatches agree on it. A pattern that
/// fails to parse poisons the rule: the cached error resurfaces on every
/// later dispatch attempt.
pub struct Rule<T, O> {
    pattern_text: String,
    ast: OnceLock<Result<PatternAst, ParseError>>,
    generator: BoxedGenerator<T, O>,
}

impl<T: Token, O> Rule<T, O> {
    pub fn new<P, F>(pattern: P, generator: F) -> Self
    where
        P: Into<String>,
        F: Fn(&[T], &[Capture<'_, T>]) -> Result<O, GeneratorError> + Send + Sync + 'static,
    {
        Self {
            pattern_text: pattern.into(),
            ast: OnceLock::new(),
            generator: Box::new(generator),
        }
    }

    pub fn pattern_text(&self) -> &str {
        &self.pattern_text
    }

    pub(crate) fn ast(&self) -> Result<&PatternAst, &ParseError> {
        self.ast
            .get_or_init(|| parse_pattern(&self.pattern_text))
            .as_ref()
    }

    pub(crate) fn generate(
        &self,
        tokens: &[T],
        captures: &[Capture<'_, T>],
    ) -> Result<O, GeneratorError> {
        (self.generator)(tokens, captures)
    }
}

impl<T, O> fmt::Debug for Rule<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern_text", &self.pattern_text)
            .finish_non_exhaustive()
    }
}
