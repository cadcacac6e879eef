mod ast;
mod error;
mod parser;

pub use ast::{
    LiteralNode, OperatorNode, OptionalNode, PatternAst, PatternNode, Quantifier, RepetitionNode,
    SequenceNode, VariableNode,
};
pub use error::{ParseError, ParseResult};
pub use parser::parse_pattern;
