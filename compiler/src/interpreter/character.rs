use crate::error::{ErrorKind, RegexError};
use crate::flags::{fold_case, Dialect};
use crate::markup::{self, MarkupTable};
use crate::source::CharSource;
use crate::token::{Token, TokenType};

/// Reads a single token in one grammar context.
///
/// A character equal to one of the escape keys is looked up, together with
/// the character following it, in that key's escape table. When the pair is
/// not classified there, or any other character is read, the specials table
/// decides. If neither classifies the character the source is left
/// untouched and nothing is returned.
#[derive(Debug, Clone)]
pub struct CharacterInterpreter {
    specials: MarkupTable,
    escapes: Vec<(char, MarkupTable)>,
    /// The kind that resolved literal characters are emitted as.
    literal: TokenType,
    icase: bool,
}

impl CharacterInterpreter {
    #[must_use]
    pub fn new(
        specials: MarkupTable,
        escapes: Vec<(char, MarkupTable)>,
        literal: TokenType,
        icase: bool,
    ) -> Self {
        Self {
            specials,
            escapes,
            literal,
            icase,
        }
    }

    #[must_use]
    pub fn expression(dialect: Dialect, icase: bool) -> Self {
        Self::new(
            markup::expression_specials(dialect),
            vec![('\\', markup::expression_escapes(dialect))],
            TokenType::Literal,
            icase,
        )
    }

    /// Bracket literals are never case folded, so range endpoints keep their
    /// order. Folding happens when a [crate::class::BracketSet] is matched.
    #[must_use]
    pub fn bracket(dialect: Dialect) -> Self {
        let mut escapes = vec![('[', markup::bracket_escapes())];
        if dialect == Dialect::ECMAScript {
            escapes.push(('\\', markup::ecmascript_bracket_escapes()));
        }

        Self::new(
            markup::bracket_specials(),
            escapes,
            TokenType::BracketLiteral,
            false,
        )
    }

    #[must_use]
    pub fn brace(dialect: Dialect) -> Self {
        Self::new(
            markup::brace_specials(),
            vec![('\\', markup::brace_escapes(dialect))],
            TokenType::Literal,
            false,
        )
    }

    /// Reads the `(?=`, `(?!` and `(?:` forms following an opening paren.
    /// These only exist in ECMAScript, elsewhere nothing is ever read.
    #[must_use]
    pub fn subexpression(dialect: Dialect) -> Self {
        let escapes = if dialect == Dialect::ECMAScript {
            vec![('?', markup::subexpression_escapes())]
        } else {
            vec![]
        };

        Self::new(MarkupTable::default(), escapes, TokenType::Literal, false)
    }

    pub fn empty(&self, src: &CharSource) -> bool {
        src.is_empty()
    }

    pub fn get(&self, src: &mut CharSource) -> Result<Option<Token>, RegexError> {
        let start = src.position();
        let Some(ch) = src.get() else {
            return Ok(None);
        };

        let classified = self
            .lookup_escape(ch, src)
            .or_else(|| self.specials.lookup(ch).map(|kind| (kind, ch)));

        match classified {
            Some((kind, value)) => self.resolve(kind, value, src).map(Some),
            None => {
                src.rewind(start);
                Ok(None)
            }
        }
    }

    fn lookup_escape(&self, key: char, src: &mut CharSource) -> Option<(TokenType, char)> {
        let (_, table) = self.escapes.iter().find(|(escape, _)| *escape == key)?;
        let follower = src.get()?;

        match table.lookup(follower) {
            Some(kind) => Some((kind, follower)),
            None => {
                src.unget();
                None
            }
        }
    }

    /// Resolves the kinds that need further reads into the token they stand
    /// for.
    fn resolve(
        &self,
        kind: TokenType,
        value: char,
        src: &mut CharSource,
    ) -> Result<Token, RegexError> {
        let token = match kind {
            TokenType::SimpleBackRef => {
                let group = value.to_digit(10).unwrap_or_default() as usize;
                Token::with_count(TokenType::BackRef, group)
            }
            TokenType::CompoundBackRef => {
                src.unget();
                Token::with_count(TokenType::BackRef, src.get_int(10).unwrap_or_default())
            }
            TokenType::HexEscape => match src.get_n_digit_int(2, 16).and_then(char::from_u32) {
                Some(c) => self.literal(c),
                None => self.literal(value),
            },
            TokenType::UnicodeEscape => match src.get_n_digit_int(4, 16) {
                Some(code) => char::from_u32(code)
                    .map(|c| self.literal(c))
                    .ok_or_else(|| RegexError::new(ErrorKind::Escape, src.position()))?,
                None => self.literal(value),
            },
            TokenType::ControlChar => self.literal(control_char(value)),
            TokenType::Control => match src.get() {
                Some(c) if c.is_ascii_alphabetic() => self.literal(char::from(c as u8 % 32)),
                _ => return Err(RegexError::new(ErrorKind::Escape, src.position())),
            },
            TokenType::Count => {
                src.unget();
                Token::with_count(TokenType::Count, src.get_int(10).unwrap_or_default())
            }
            TokenType::Class | TokenType::Equiv | TokenType::Collate => {
                let delimiter = format!("{}]", value);

                match src.get_until(&delimiter) {
                    (span, true) => Token::with_string(kind, span),
                    (_, false) => return Err(RegexError::new(ErrorKind::Brack, src.position())),
                }
            }
            TokenType::Literal | TokenType::BracketLiteral => self.literal(value),
            _ => Token::with_char(kind, value),
        };

        Ok(token)
    }

    fn literal(&self, c: char) -> Token {
        let c = if self.icase { fold_case(c) } else { c };
        Token::with_char(self.literal, c)
    }
}

/// Maps the letter of a C style escape onto the character it stands for.
fn control_char(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        '0' => '\0',
        other => other,
    }
}
