use stepre_runtime::RepetitionBounds;

use super::{BraceInterpreter, CharacterInterpreter};
use crate::error::{ErrorKind, RegexError};
use crate::flags::Dialect;
use crate::source::{CharSource, Lookahead};
use crate::token::{Token, TokenType};

/// Reads tokens in the expression context.
///
/// Runs of literals are coalesced into a single [TokenType::StringLiteral],
/// and every replication, whether a shorthand or counted, is expanded into a
/// [TokenType::RepLower] token followed by a [TokenType::RepUpper] token.
#[derive(Debug, Clone)]
pub struct ExpressionInterpreter {
    chars: CharacterInterpreter,
    brace: BraceInterpreter,
    pending: Lookahead<Token, 2>,
}

impl ExpressionInterpreter {
    #[must_use]
    pub fn new(dialect: Dialect, icase: bool) -> Self {
        Self {
            chars: CharacterInterpreter::expression(dialect, icase),
            brace: BraceInterpreter::new(dialect),
            pending: Lookahead::default(),
        }
    }

    pub fn empty(&self, src: &CharSource) -> bool {
        self.pending.is_empty() && self.chars.empty(src)
    }

    pub fn get(&mut self, src: &mut CharSource) -> Result<Option<Token>, RegexError> {
        if let Some(token) = self.pending.pop() {
            return Ok(Some(token));
        }

        let token = match self.chars.get(src)? {
            Some(token) if token.is(TokenType::Literal) => token,
            Some(token) => return self.expand_replication(token, src).map(Some),
            None => return Ok(None),
        };

        let (mut run, replicated) = self.literal_run(token.char_value, src)?;

        // a replication binds to the final character of the run alone.
        if replicated {
            match run.pop() {
                Some(last) if !run.is_empty() => {
                    self.pending
                        .push(Token::with_char(TokenType::Literal, last));
                }
                Some(last) => return Ok(Some(Token::with_char(TokenType::Literal, last))),
                None => return Ok(None),
            }
        }

        Ok(Some(Token::with_string(
            TokenType::StringLiteral,
            run.into_iter().collect::<String>(),
        )))
    }

    /// Reads every literal following `first`, returning the run along with
    /// whether a replication directly follows it. The token ending the run is
    /// left unread.
    fn literal_run(
        &self,
        first: char,
        src: &mut CharSource,
    ) -> Result<(Vec<char>, bool), RegexError> {
        let mut run = vec![first];

        loop {
            let checkpoint = src.position();

            match self.chars.get(src)? {
                Some(token) if token.is(TokenType::Literal) => run.push(token.char_value),
                Some(token) => {
                    src.rewind(checkpoint);
                    let replicated = matches!(token.kind, TokenType::Replication | TokenType::LBrace);
                    return Ok((run, replicated));
                }
                None => return Ok((run, false)),
            }
        }
    }

    /// Expands a shorthand or counted replication into its bounds, buffering
    /// the upper bound. Any other token is returned unchanged.
    fn expand_replication(
        &mut self,
        token: Token,
        src: &mut CharSource,
    ) -> Result<Token, RegexError> {
        let bounds = match (token.kind, token.char_value) {
            (TokenType::Replication, '?') => RepetitionBounds::between(0, 1),
            (TokenType::Replication, '+') => Some(RepetitionBounds::at_least(1)),
            (TokenType::Replication, _) => Some(RepetitionBounds::at_least(0)),
            (TokenType::LBrace, _) => Some(
                self.brace
                    .get(src)?
                    .ok_or_else(|| RegexError::new(ErrorKind::Brace, src.position()))?,
            ),
            _ => return Ok(token),
        }
        .ok_or_else(|| RegexError::new(ErrorKind::BadBrace, src.position()))?;

        self.pending
            .push(Token::with_count(TokenType::RepUpper, bounds.upper()));

        Ok(Token {
            count: bounds.lower(),
            ..Token::with_char(TokenType::RepLower, token.char_value)
        })
    }
}
