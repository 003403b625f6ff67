//! The small state machines that track where in the grammar the next
//! character will be read.

use crate::token::{Token, TokenType};

/// Tracks the depth of open groups in the expression context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionContext {
    depth: usize,
}

impl ExpressionContext {
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true when `kind` would close a group that was never opened.
    pub fn is_unmatched(&self, kind: TokenType) -> bool {
        kind == TokenType::RParen && self.depth == 0
    }

    pub fn update(&mut self, kind: TokenType) {
        match kind {
            TokenType::LParen => self.depth += 1,
            TokenType::RParen => self.depth = self.depth.saturating_sub(1),
            _ => (),
        }
    }
}

/// Position within a bracket expression, deciding how `^`, `-` and `]` are
/// read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketContext {
    /// Directly after the opening `[`.
    #[default]
    FirstChar,
    /// Directly after a leading `^`.
    AfterNegation,
    /// After an element that may not start a range.
    Element,
    /// After an element that a following `-` turns into a range start.
    ElementOrDash,
    /// After a range dash, expecting the range end.
    AfterDash,
}

impl BracketContext {
    /// Reclassifies a token read by the bracket character interpreter
    /// according to its position.
    pub fn classify(&self, token: Token) -> Token {
        use BracketContext::*;

        let literal = |c: char| Token::with_char(TokenType::BracketLiteral, c);

        match (self, token.kind) {
            (FirstChar, TokenType::Negation) => token,
            (FirstChar | AfterNegation, TokenType::RBracket) => literal(']'),
            (FirstChar | AfterNegation | Element | AfterDash, TokenType::RangeDash) => {
                literal('-')
            }
            (_, TokenType::Negation) => literal('^'),
            _ => token,
        }
    }

    /// Advances past `token`, which has already been classified.
    pub fn update(&mut self, token: &Token) {
        use BracketContext::*;

        *self = match (*self, token.kind) {
            (_, TokenType::RBracket) => FirstChar,
            (FirstChar, TokenType::Negation) => AfterNegation,
            (ElementOrDash, TokenType::RangeDash) => AfterDash,
            (FirstChar | AfterNegation, TokenType::BracketLiteral)
                if matches!(token.char_value, ']' | '-') =>
            {
                Element
            }
            (AfterDash, _) => Element,
            (_, TokenType::BracketLiteral | TokenType::Collate) => ElementOrDash,
            _ => Element,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_track_group_depth() {
        let mut ctx = ExpressionContext::default();

        assert!(ctx.is_unmatched(TokenType::RParen));
        ctx.update(TokenType::LParen);
        ctx.update(TokenType::LParen);
        ctx.update(TokenType::RParen);
        assert_eq!(1, ctx.depth());
        assert!(!ctx.is_unmatched(TokenType::RParen));
    }

    #[test]
    fn should_reclassify_bracket_characters_by_position() {
        let raw = |kind: TokenType, c: char| Token::with_char(kind, c);
        let literal = |c: char| Token::with_char(TokenType::BracketLiteral, c);

        let input_output = [
            (
                BracketContext::FirstChar,
                raw(TokenType::Negation, '^'),
                raw(TokenType::Negation, '^'),
            ),
            (
                BracketContext::FirstChar,
                raw(TokenType::RBracket, ']'),
                literal(']'),
            ),
            (
                BracketContext::FirstChar,
                raw(TokenType::RangeDash, '-'),
                literal('-'),
            ),
            (
                BracketContext::AfterNegation,
                raw(TokenType::Negation, '^'),
                literal('^'),
            ),
            (
                BracketContext::AfterNegation,
                raw(TokenType::RBracket, ']'),
                literal(']'),
            ),
            (
                BracketContext::Element,
                raw(TokenType::RangeDash, '-'),
                literal('-'),
            ),
            (
                BracketContext::Element,
                raw(TokenType::RBracket, ']'),
                raw(TokenType::RBracket, ']'),
            ),
            (
                BracketContext::ElementOrDash,
                raw(TokenType::RangeDash, '-'),
                raw(TokenType::RangeDash, '-'),
            ),
            (
                BracketContext::AfterDash,
                raw(TokenType::RangeDash, '-'),
                literal('-'),
            ),
        ];

        for (test_id, (ctx, token, expected)) in input_output.into_iter().enumerate() {
            assert_eq!((test_id, expected), (test_id, ctx.classify(token)))
        }
    }

    #[test]
    fn should_step_through_bracket_states() {
        let literal = |c: char| Token::with_char(TokenType::BracketLiteral, c);

        // `[^]-a-c]`
        let tokens = [
            Token::with_char(TokenType::Negation, '^'),
            literal(']'),
            literal('-'),
            literal('a'),
            Token::with_char(TokenType::RangeDash, '-'),
            literal('c'),
            Token::with_char(TokenType::RBracket, ']'),
        ];

        let mut ctx = BracketContext::default();
        let states: Vec<_> = tokens
            .iter()
            .map(|token| {
                ctx.update(token);
                ctx
            })
            .collect();

        assert_eq!(
            vec![
                BracketContext::AfterNegation,
                BracketContext::Element,
                BracketContext::ElementOrDash,
                BracketContext::ElementOrDash,
                BracketContext::AfterDash,
                BracketContext::Element,
                BracketContext::FirstChar,
            ],
            states
        );
    }
}
