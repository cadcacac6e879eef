//! Declarative-macro pattern engine.
//!
//! Parses a concise pattern language (`$var` variables, `(...)` groups,
//! `[...]` optionals, `*`/`+`/`?` quantifiers, backslash escapes), matches a
//! pattern against a finite token sequence, extracts named captures, and
//! dispatches the first matching rule to a user-supplied generator.
//!
//! Tokens are anything implementing [`Token`]; the engine only ever looks at
//! their textual content. Errors are values throughout; nothing panics across
//! the library boundary.
//!
//! ```
//! use macpat::{Capture, Expander, GeneratorError};
//!
//! fn empty(_: &[&str], _: &[Capture<'_, &str>]) -> Result<Vec<i64>, GeneratorError> {
//!     Ok(Vec::new())
//! }
//!
//! fn list(_: &[&str], caps: &[Capture<'_, &str>]) -> Result<Vec<i64>, GeneratorError> {
//!     caps.iter()
//!         .map(|c| c.token.parse::<i64>().map_err(Into::into))
//!         .collect()
//! }
//!
//! fn repeat(_: &[&str], caps: &[Capture<'_, &str>]) -> Result<Vec<i64>, GeneratorError> {
//!     let value: i64 = caps[0].token.parse()?;
//!     let count: usize = caps[1].token.parse()?;
//!     Ok(vec![value; count])
//! }
//!
//! // the repeat rule comes before the list rule: a greedy `$elem+` would
//! // also match `7 ; 3`, and first match wins
//! let vec_macro = Expander::new()
//!     .rule("vec ! [ ]", empty)
//!     .rule("vec ! [ $elem ; $count ]", repeat)
//!     .rule("vec ! [ $elem+ ]", list);
//!
//! let out = vec_macro.expand(&["vec", "!", "[", "1", "2", "3", "]"]).unwrap();
//! assert_eq!(out, vec![1, 2, 3]);
//!
//! let out = vec_macro.expand(&["vec", "!", "[", "7", ";", "3", "]"]).unwrap();
//! assert_eq!(out, vec![7, 7, 7]);
//! ```

pub mod errors;
pub mod expander;
pub mod matcher;
pub mod pattern;
pub mod token;

pub use errors::{EngineError, EngineResult};
pub use expander::{ExpandError, Expander, GeneratorError, Rule, RuleError, RuleFailure};
pub use matcher::{
    Capture, CaptureList, MatchError, MatchResult, group_by_name, match_pattern, match_prefix,
};
pub use pattern::{ParseError, ParseResult, PatternAst, PatternNode, Quantifier, parse_pattern};
pub use token::{SourcePosition, SourceToken, Token};
