use crate::pattern::ast::{
    LiteralNode, OperatorNode, OptionalNode, PatternAst, PatternNode, Quantifier, RepetitionNode,
    SequenceNode, VariableNode,
};
use crate::pattern::{ParseError, ParseResult};

/// Characters that end a literal run. `*`, `+` and `?` must end a run so the
/// quantifier rule can see them; `-`, `/` and `=` are operator atoms of their
/// own. A backslash is handled inline and escapes the character after it.
const LITERAL_BREAKERS: &[char] = &['$', '(', ')', '[', ']', '*', '+', '?', '-', '/', '='];

/// Parses pattern text into an AST, or reports a positioned error. Parsing is
/// a pure projection: same text, same tree.
#[tracing::instrument(level = "trace", fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str) -> ParseResult<PatternAst> {
    let mut parser = PatternParser::new(pattern);
    let children = parser.parse_sequence(None, None)?;
    debug_assert!(parser.peek().is_none());
    Ok(PatternAst::new(SequenceNode::new(children, 0)))
}

struct PatternParser<'a> {
    pattern: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> PatternParser<'a> {
    fn new(pattern: &'a str) -> Self {
        let chars: Vec<(usize, char)> = pattern.char_indices().collect();
        Self {
            pattern,
            chars,
            index: 0,
        }
    }

    fn parse_sequence(
        &mut self,
        terminator: Option<char>,
        group_start: Option<usize>,
    ) -> ParseResult<Vec<PatternNode>> {
        let mut nodes = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                break;
            };
            if Some(ch) == terminator {
                self.next();
                return Ok(nodes);
            }
            let atom = match ch {
                ')' => {
                    return Err(ParseError::UnexpectedDelimiter {
                        index: self.current_byte_index(),
                        delimiter: ')',
                    });
                }
                ']' => {
                    // no optional group open here, so this is an ordinary token
                    let position = self.current_byte_index();
                    self.next();
                    PatternNode::Literal(LiteralNode::new("]", position))
                }
                '?' => {
                    return Err(ParseError::DanglingQuantifier {
                        index: self.current_byte_index(),
                        modifier: '?',
                    });
                }
                '$' => self.parse_variable()?,
                '(' => self.parse_group()?,
                '[' => self.parse_bracket()?,
                '*' | '+' | '-' | '/' | '=' => {
                    // at atom position these are operator tokens, not quantifiers
                    let position = self.current_byte_index();
                    self.next();
                    PatternNode::Operator(OperatorNode::new(ch, position))
                }
                _ => self.parse_literal()?,
            };
            nodes.push(self.attach_quantifier(atom));
        }

        match terminator {
            Some(')') => Err(ParseError::UnterminatedGroup {
                start: group_start.unwrap_or(0),
            }),
            Some(']') => Err(ParseError::UnterminatedOptional {
                start: group_start.unwrap_or(0),
            }),
            _ => Ok(nodes),
        }
    }

    /// A `*`, `+` or `?` hugging the atom it follows wraps that atom in a
    /// repetition. At most one quantifier attaches; whitespace breaks the
    /// attachment and the character reverts to its atom reading.
    fn attach_quantifier(&mut self, atom: PatternNode) -> PatternNode {
        let Some(op) = self.peek().and_then(Quantifier::from_modifier) else {
            return atom;
        };
        let position = self.current_byte_index();
        self.next();
        PatternNode::Repetition(RepetitionNode::new(op, Box::new(atom), position))
    }

    fn parse_variable(&mut self) -> ParseResult<PatternNode> {
        let position = self.current_byte_index();
        self.expect('$');
        let mut name = String::new();
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                name.push(ch);
                self.next();
            }
            _ => return Err(ParseError::VariableMissingName { index: position }),
        }
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }
        Ok(PatternNode::Variable(VariableNode::new(name, position)))
    }

    fn parse_group(&mut self) -> ParseResult<PatternNode> {
        let start = self.current_byte_index();
        self.expect('(');
        let children = self.parse_sequence(Some(')'), Some(start))?;
        Ok(PatternNode::Sequence(SequenceNode::new(children, start)))
    }

    /// A `[` hugging its content opens an optional group; one standing alone
    /// (followed by whitespace or end of input) is an ordinary token. Same
    /// whitespace rule as quantifiers.
    fn parse_bracket(&mut self) -> ParseResult<PatternNode> {
        let start = self.current_byte_index();
        if self.peek_second().is_none_or(char::is_whitespace) {
            self.next();
            return Ok(PatternNode::Literal(LiteralNode::new("[", start)));
        }
        self.expect('[');
        let children = self.parse_sequence(Some(']'), Some(start))?;
        Ok(PatternNode::Optional(OptionalNode::new(
            SequenceNode::new(children, start),
            start,
        )))
    }

    fn parse_literal(&mut self) -> ParseResult<PatternNode> {
        let position = self.current_byte_index();
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\\' {
                text.push(self.consume_escape_char()?);
            } else if ch.is_whitespace() || LITERAL_BREAKERS.contains(&ch) {
                break;
            } else {
                text.push(ch);
                self.next();
            }
        }
        debug_assert!(!text.is_empty());
        Ok(PatternNode::Literal(LiteralNode::new(text, position)))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next();
        }
    }

    fn expect(&mut self, expected: char) {
        let actual = self.next();
        debug_assert_eq!(Some(expected), actual);
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.index + 1).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or_else(|| self.pattern.len())
    }

    fn consume_escape_char(&mut self) -> ParseResult<char> {
        let escape_index = self.current_byte_index();
        let consumed = self.next();
        debug_assert_eq!(consumed, Some('\\'));
        match self.next() {
            Some(ch) => Ok(ch),
            None => Err(ParseError::LoneEscape {
                index: escape_index,
            }),
        }
    }
}
