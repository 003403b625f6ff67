use log::trace;

use crate::context::ExpressionContext;
use crate::error::{ErrorKind, RegexError};
use crate::flags::{Dialect, SyntaxFlag, SyntaxFlags};
use crate::interpreter::{BracketInterpreter, CharacterInterpreter, ExpressionInterpreter};
use crate::source::{CharSource, Lookahead};
use crate::token::{Token, TokenType};

/// The grammar context the next token is read in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextState {
    #[default]
    Expression,
    Bracket,
    /// Directly after an opening paren, for one token only.
    Subexpression,
}

/// Routes reads to the interpreter of the active context, switching context
/// on the token just produced.
///
/// Errors are sticky. Once any read fails, every later read returns the
/// same error without consuming further input.
#[derive(Debug, Clone)]
pub struct TokenSource {
    src: CharSource,
    dialect: Dialect,
    state: ContextState,
    context: ExpressionContext,
    expression: ExpressionInterpreter,
    bracket: BracketInterpreter,
    subexpression: CharacterInterpreter,
    putback: Lookahead<Token, 1>,
    error: Option<RegexError>,
}

impl TokenSource {
    #[must_use]
    pub fn new(pattern: &str, flags: SyntaxFlags) -> Self {
        let dialect = Dialect::from_flags(flags);
        let icase = flags.contains(SyntaxFlag::ICase);

        Self {
            src: CharSource::new(pattern),
            dialect,
            state: ContextState::default(),
            context: ExpressionContext::default(),
            expression: ExpressionInterpreter::new(dialect, icase),
            bracket: BracketInterpreter::new(dialect),
            subexpression: CharacterInterpreter::subexpression(dialect),
            putback: Lookahead::default(),
            error: None,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    /// The character offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.src.position()
    }

    /// Returns true when no further token can be read in the active context.
    pub fn empty(&self) -> bool {
        self.putback.is_empty()
            && match self.state {
                ContextState::Expression | ContextState::Subexpression => {
                    self.expression.empty(&self.src)
                }
                ContextState::Bracket => self.bracket.empty(&self.src),
            }
    }

    /// Returns a token to the source, to be yielded by the next
    /// [TokenSource::get].
    pub fn unget(&mut self, token: Token) {
        self.putback.push(token);
    }

    pub fn get(&mut self) -> Result<Option<Token>, RegexError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        if let Some(token) = self.putback.pop() {
            return Ok(Some(token));
        }

        match self.next_token() {
            Ok(token) => Ok(token),
            Err(error) => {
                trace!("token source failed: {}", error);
                self.error = Some(error);
                Err(error)
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, RegexError> {
        let token = match self.state {
            ContextState::Expression => self.expression.get(&mut self.src)?,
            ContextState::Bracket => self.bracket.get(&mut self.src)?,
            ContextState::Subexpression => match self.subexpression.get(&mut self.src)? {
                Some(token) => Some(token),
                None => self.expression.get(&mut self.src)?,
            },
        };

        if let Some(token) = &token {
            if self.context.is_unmatched(token.kind) {
                return Err(RegexError::new(ErrorKind::Paren, self.src.position()));
            }

            self.context.update(token.kind);
            self.transition(token.kind);
            trace!("token {} in {:?} context", token, self.state);
        }

        Ok(token)
    }

    fn transition(&mut self, kind: TokenType) {
        let next = match kind {
            TokenType::LParen => ContextState::Subexpression,
            TokenType::LBracket => ContextState::Bracket,
            TokenType::RBracket => ContextState::Expression,
            _ if self.state == ContextState::Subexpression => ContextState::Expression,
            _ => self.state,
        };

        if next != self.state {
            trace!("switching from {:?} to {:?} context", self.state, next);
            self.state = next;
        }
    }
}

impl Iterator for TokenSource {
    type Item = Result<Token, RegexError>;

    /// Yields every remaining token, ending after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() && self.putback.is_empty() {
            return None;
        }

        self.get().transpose()
    }
}
