mod captures;
mod error;

pub use captures::{Capture, CaptureList, group_by_name};
pub use error::{MatchError, MatchResult};

use crate::pattern::{PatternAst, PatternNode, Quantifier, RepetitionNode, SequenceNode};
use crate::token::Token;

/// Matches `pattern` against the whole of `tokens`. Anything short of full
/// consumption is a mismatch; this total-match rule is what rule dispatch
/// relies on.
#[tracing::instrument(level = "trace", skip(pattern, tokens), fields(tokens = tokens.len() as u64))]
pub fn match_pattern<'a, T: Token>(
    pattern: &'a PatternAst,
    tokens: &'a [T],
) -> MatchResult<CaptureList<'a, T>> {
    let (captures, consumed) = match_prefix(pattern, tokens)?;
    if consumed != tokens.len() {
        return Err(MatchError::UnconsumedInput {
            consumed,
            total: tokens.len(),
            pattern_position: pattern.root.position,
        });
    }
    Ok(captures)
}

/// Prefix variant: reports how many leading tokens the pattern covered
/// alongside the captures. Useful for tests and embedding callers; rule
/// dispatch uses [`match_pattern`].
pub fn match_prefix<'a, T: Token>(
    pattern: &'a PatternAst,
    tokens: &'a [T],
) -> MatchResult<(CaptureList<'a, T>, usize)> {
    let mut state = MatchState {
        tokens,
        pos: 0,
        captures: CaptureList::new(),
    };
    state.match_sequence(&pattern.root, None)?;
    Ok((state.captures, state.pos))
}

/// Transient walker state for one match call. Rollback is a checkpointed
/// truncation, so captures from abandoned alternatives never leak.
struct MatchState<'a, T> {
    tokens: &'a [T],
    pos: usize,
    captures: CaptureList<'a, T>,
}

#[derive(Clone, Copy)]
struct Checkpoint {
    pos: usize,
    captures: usize,
}

impl<'a, T: Token> MatchState<'a, T> {
    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            captures: self.captures.len(),
        }
    }

    fn rollback(&mut self, mark: Checkpoint) {
        self.pos = mark.pos;
        self.captures.truncate(mark.captures);
    }

    /// `follow` is the text of the next literal the enclosing sequence will
    /// demand, used to bound greedy repetition.
    fn match_node(&mut self, node: &'a PatternNode, follow: Option<&'a str>) -> MatchResult<()> {
        match node {
            PatternNode::Literal(lit) => self.match_text(&lit.text, lit.position),
            PatternNode::Operator(op) => self.match_text(&op.text, op.position),
            PatternNode::Variable(var) => match self.tokens.get(self.pos) {
                Some(token) => {
                    self.captures.push(Capture {
                        name: &var.name,
                        token,
                    });
                    self.pos += 1;
                    Ok(())
                }
                None => Err(MatchError::MissingVariableToken {
                    name: var.name.clone(),
                    token_index: self.pos,
                    pattern_position: var.position,
                }),
            },
            PatternNode::Sequence(seq) => self.match_sequence(seq, follow),
            PatternNode::Optional(opt) => {
                let mark = self.checkpoint();
                if self.match_sequence(&opt.body, follow).is_err() {
                    self.rollback(mark);
                }
                Ok(())
            }
            PatternNode::Repetition(rep) => self.match_repetition(rep, follow),
        }
    }

    fn match_text(&mut self, expected: &str, pattern_position: usize) -> MatchResult<()> {
        match self.tokens.get(self.pos) {
            Some(token) if token.content() == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(MatchError::UnexpectedToken {
                expected: expected.to_string(),
                got: token.content().to_string(),
                token_index: self.pos,
                pattern_position,
            }),
            None => Err(MatchError::UnexpectedEndOfInput {
                expected: expected.to_string(),
                token_index: self.pos,
                pattern_position,
            }),
        }
    }

    fn match_sequence(&mut self, seq: &'a SequenceNode, follow: Option<&'a str>) -> MatchResult<()> {
        let mark = self.checkpoint();
        for (idx, child) in seq.children.iter().enumerate() {
            let child_follow = match seq.children.get(idx + 1) {
                Some(PatternNode::Literal(lit)) => Some(lit.text.as_str()),
                Some(PatternNode::Operator(op)) => Some(op.text.as_str()),
                Some(_) => None,
                None => follow,
            };
            if let Err(err) = self.match_node(child, child_follow) {
                self.rollback(mark);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Greedy, no backtracking. The loop stops at a token equal to `follow`,
    /// at a child failure, or at a zero-width iteration.
    fn match_repetition(
        &mut self,
        rep: &'a RepetitionNode,
        follow: Option<&'a str>,
    ) -> MatchResult<()> {
        let mut iterations = 0usize;
        loop {
            if let Some(stop) = follow
                && let Some(token) = self.tokens.get(self.pos)
                && token.content() == stop
            {
                break;
            }
            let mark = self.checkpoint();
            match self.match_node(&rep.child, follow) {
                Ok(()) => {
                    iterations += 1;
                    if rep.op == Quantifier::ZeroOrOne && iterations > 1 {
                        self.rollback(mark);
                        return Err(MatchError::ExpectedAtMostOne {
                            token_index: mark.pos,
                            pattern_position: rep.position,
                        });
                    }
                    if self.pos == mark.pos {
                        break;
                    }
                }
                Err(_) => {
                    self.rollback(mark);
                    break;
                }
            }
        }

        if rep.op == Quantifier::OneOrMore && iterations == 0 {
            return Err(MatchError::ExpectedOneOrMore {
                token_index: self.pos,
                pattern_position: rep.position,
            });
        }
        Ok(())
    }
}
