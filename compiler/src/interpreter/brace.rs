use stepre_runtime::{RepetitionBounds, UNBOUNDED};

use super::CharacterInterpreter;
use crate::error::{ErrorKind, RegexError};
use crate::flags::Dialect;
use crate::source::CharSource;
use crate::token::{Token, TokenType};

/// Reads the body of a counted repetition, `{m}`, `{m,}` or `{m,n}`, once
/// the opening brace has been consumed.
#[derive(Debug, Clone)]
pub struct BraceInterpreter {
    chars: CharacterInterpreter,
}

impl BraceInterpreter {
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            chars: CharacterInterpreter::brace(dialect),
        }
    }

    pub fn empty(&self, src: &CharSource) -> bool {
        self.chars.empty(src)
    }

    /// Returns the bounds read, or `None` when the source is already empty.
    pub fn get(&self, src: &mut CharSource) -> Result<Option<RepetitionBounds>, RegexError> {
        if self.empty(src) {
            return Ok(None);
        }

        let lower = match self.next(src)? {
            token if token.is(TokenType::Count) => count(&token, src)?,
            _ => return Err(bad_brace(src)),
        };

        let upper = match self.next(src)?.kind {
            TokenType::RBrace => lower,
            TokenType::Comma => match self.next(src)? {
                token if token.is(TokenType::RBrace) => UNBOUNDED,
                token if token.is(TokenType::Count) => {
                    let upper = count(&token, src)?;
                    if !self.next(src)?.is(TokenType::RBrace) {
                        return Err(bad_brace(src));
                    }
                    upper
                }
                _ => return Err(bad_brace(src)),
            },
            _ => return Err(bad_brace(src)),
        };

        RepetitionBounds::between(lower, upper)
            .map(Some)
            .ok_or_else(|| bad_brace(src))
    }

    /// Reads the next brace token, failing when the pattern ends before the
    /// closing brace.
    fn next(&self, src: &mut CharSource) -> Result<Token, RegexError> {
        self.chars
            .get(src)?
            .ok_or_else(|| RegexError::new(ErrorKind::Brace, src.position()))
    }
}

/// The largest count a repetition may spell out.
pub const MAX_COUNT: usize = 0x7fff;

fn count(token: &Token, src: &CharSource) -> Result<usize, RegexError> {
    if token.count > MAX_COUNT {
        Err(bad_brace(src))
    } else {
        Ok(token.count)
    }
}

fn bad_brace(src: &CharSource) -> RegexError {
    RegexError::new(ErrorKind::BadBrace, src.position())
}
