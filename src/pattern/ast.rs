use std::fmt::{self, Write as _};

/// Characters that carry pattern syntax. Literals containing one of these are
/// rendered with a backslash by `Display` so the canonical form reparses to
/// the same tree.
const METACHARS: &[char] = &[
    '$', '(', ')', '[', ']', '\\', '*', '+', '?', '-', '/', '=',
];

/// Parsed pattern. The root is the top-level sequence; the tree is immutable
/// after parsing.
#[derive(Debug, Clone)]
pub struct PatternAst {
    pub root: SequenceNode,
}

impl PatternAst {
    pub fn new(root: SequenceNode) -> Self {
        Self { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

impl PartialEq for PatternAst {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for PatternAst {}

impl fmt::Display for PatternAst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.root.children)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternNode {
    Literal(LiteralNode),
    Operator(OperatorNode),
    Variable(VariableNode),
    Sequence(SequenceNode),
    Optional(OptionalNode),
    Repetition(RepetitionNode),
}

/// Matches a single token whose content equals `text`.
#[derive(Debug, Clone)]
pub struct LiteralNode {
    pub text: String,
    pub position: usize,
}

impl LiteralNode {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Same matching rule as a literal, kept distinct so generators may treat
/// operator tokens specially.
#[derive(Debug, Clone)]
pub struct OperatorNode {
    pub text: String,
    pub position: usize,
}

impl OperatorNode {
    pub fn new(ch: char, position: usize) -> Self {
        Self {
            text: ch.to_string(),
            position,
        }
    }
}

/// Matches any single token and records it under `name`.
#[derive(Debug, Clone)]
pub struct VariableNode {
    pub name: String,
    pub position: usize,
}

impl VariableNode {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Matches each child in order; transactional on failure.
#[derive(Debug, Clone)]
pub struct SequenceNode {
    pub children: Vec<PatternNode>,
    pub position: usize,
}

impl SequenceNode {
    pub fn new(children: Vec<PatternNode>, position: usize) -> Self {
        Self { children, position }
    }
}

/// Tries the inner sequence; on failure succeeds consuming nothing.
#[derive(Debug, Clone)]
pub struct OptionalNode {
    pub body: SequenceNode,
    pub position: usize,
}

impl OptionalNode {
    pub fn new(body: SequenceNode, position: usize) -> Self {
        Self { body, position }
    }
}

/// Greedy repetition of a single child.
#[derive(Debug, Clone)]
pub struct RepetitionNode {
    pub op: Quantifier,
    pub child: Box<PatternNode>,
    pub position: usize,
}

impl RepetitionNode {
    pub fn new(op: Quantifier, child: Box<PatternNode>, position: usize) -> Self {
        Self {
            op,
            child,
            position,
        }
    }
}

// Equality is structural. `position` feeds diagnostics only and shifts when a
// pattern is re-rendered in canonical form, so it takes no part in `==`.

impl PartialEq for LiteralNode {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for LiteralNode {}

impl PartialEq for OperatorNode {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for OperatorNode {}

impl PartialEq for VariableNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for VariableNode {}

impl PartialEq for SequenceNode {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl Eq for SequenceNode {}

impl PartialEq for OptionalNode {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

impl Eq for OptionalNode {}

impl PartialEq for RepetitionNode {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.child == other.child
    }
}

impl Eq for RepetitionNode {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    pub fn from_modifier(ch: char) -> Option<Self> {
        match ch {
            '?' => Some(Self::ZeroOrOne),
            '*' => Some(Self::ZeroOrMore),
            '+' => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::ZeroOrOne => '?',
            Self::ZeroOrMore => '*',
            Self::OneOrMore => '+',
        }
    }
}

impl fmt::Display for PatternNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write_escaped(f, &lit.text),
            Self::Operator(op) => f.write_str(&op.text),
            Self::Variable(var) => write!(f, "${}", var.name),
            Self::Sequence(seq) => {
                f.write_char('(')?;
                write_joined(f, &seq.children)?;
                f.write_char(')')
            }
            Self::Optional(opt) => {
                f.write_char('[')?;
                write_joined(f, &opt.body.children)?;
                f.write_char(']')
            }
            Self::Repetition(rep) => write!(f, "{}{}", rep.child, rep.op.as_char()),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[PatternNode]) -> fmt::Result {
    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{child}")?;
    }
    Ok(())
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        if ch.is_whitespace() || METACHARS.contains(&ch) {
            f.write_char('\\')?;
        }
        f.write_char(ch)?;
    }
    Ok(())
}
