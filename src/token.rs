use std::borrow::Cow;
use std::fmt;

/// Line/column carried by a token. Only ever read when rendering diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The minimal contract a matchable token must satisfy. The matcher compares
/// `content` for literal and operator nodes and records whole tokens for
/// variables; it never interprets token kinds.
pub trait Token {
    fn content(&self) -> &str;

    fn position(&self) -> Option<SourcePosition> {
        None
    }
}

impl Token for String {
    fn content(&self) -> &str {
        self
    }
}

impl Token for &str {
    fn content(&self) -> &str {
        self
    }
}

impl Token for Cow<'_, str> {
    fn content(&self) -> &str {
        self
    }
}

/// Ready-made owned token for callers whose tokenizer tracks line/column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceToken {
    content: String,
    position: SourcePosition,
}

impl SourceToken {
    pub fn new(content: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            content: content.into(),
            position: SourcePosition::new(line, column),
        }
    }
}

impl Token for SourceToken {
    fn content(&self) -> &str {
        &self.content
    }

    fn position(&self) -> Option<SourcePosition> {
        Some(self.position)
    }
}
