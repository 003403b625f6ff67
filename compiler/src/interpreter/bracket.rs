use super::CharacterInterpreter;
use crate::context::BracketContext;
use crate::error::RegexError;
use crate::flags::Dialect;
use crate::source::{CharSource, Lookahead};
use crate::token::{Token, TokenType};

/// Reads the body of a bracket expression once the opening `[` has been
/// consumed, through to and including the closing `]`.
#[derive(Debug, Clone)]
pub struct BracketInterpreter {
    chars: CharacterInterpreter,
    context: BracketContext,
    peeked: Lookahead<Token, 1>,
}

impl BracketInterpreter {
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            chars: CharacterInterpreter::bracket(dialect),
            context: BracketContext::default(),
            peeked: Lookahead::default(),
        }
    }

    pub fn context(&self) -> BracketContext {
        self.context
    }

    pub fn empty(&self, src: &CharSource) -> bool {
        self.peeked.is_empty() && self.chars.empty(src)
    }

    pub fn get(&mut self, src: &mut CharSource) -> Result<Option<Token>, RegexError> {
        let raw = match self.peeked.pop() {
            Some(token) => token,
            None => match self.chars.get(src)? {
                Some(token) => token,
                None => return Ok(None),
            },
        };

        let mut token = self.context.classify(raw);

        // a dash directly before the closing bracket is an ordinary character.
        if token.is(TokenType::RangeDash) {
            if let Some(next) = self.chars.get(src)? {
                if next.is(TokenType::RBracket) {
                    token = Token::with_char(TokenType::BracketLiteral, '-');
                }
                self.peeked.push(next);
            }
        }

        self.context.update(&token);
        Ok(Some(token))
    }
}
