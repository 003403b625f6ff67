//! The token model shared by every interpreter, the token source and the
//! compiler.

/// The classification of a [Token].
///
/// The family a character is classified into is decided by the context it is
/// read in. The same `-` is a [TokenType::RangeDash] inside a bracket
/// expression and a [TokenType::Literal] outside of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // expression level
    Literal,
    StringLiteral,
    /// `.` or a class escape such as `\d`, identified by `char_value`.
    CharClass,
    /// `^`, `$`, `\b` or `\B`, identified by `char_value`.
    Assertion,
    BackRef,
    SimpleBackRef,
    CompoundBackRef,
    Alternation,
    LParen,
    RParen,
    LBracket,
    LBrace,
    Replication,
    TrailingEscape,
    RedundantEscape,
    HexEscape,
    UnicodeEscape,
    ControlChar,
    Control,

    // subexpression level
    PositiveLookahead,
    NegativeLookahead,
    NoSubexp,

    // bracket level
    RBracket,
    Negation,
    RangeDash,
    BracketLiteral,
    Collate,
    Equiv,
    Class,

    // replication level
    RBrace,
    Comma,
    Count,
    RepLower,
    RepUpper,
    BadBrace,
}

/// A single classified unit of a pattern.
///
/// Exactly one of the payload fields is meaningful for a given kind. The
/// others hold their default values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenType,
    pub char_value: char,
    pub count: usize,
    pub string_value: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenType) -> Self {
        Self {
            kind,
            char_value: '\0',
            count: 0,
            string_value: String::new(),
        }
    }

    #[must_use]
    pub fn with_char(kind: TokenType, char_value: char) -> Self {
        Self {
            char_value,
            ..Self::new(kind)
        }
    }

    #[must_use]
    pub fn with_count(kind: TokenType, count: usize) -> Self {
        Self {
            count,
            ..Self::new(kind)
        }
    }

    #[must_use]
    pub fn with_string<S: Into<String>>(kind: TokenType, string_value: S) -> Self {
        Self {
            string_value: string_value.into(),
            ..Self::new(kind)
        }
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenType::StringLiteral
            | TokenType::Class
            | TokenType::Equiv
            | TokenType::Collate => write!(f, "{:?}({:?})", self.kind, self.string_value),
            TokenType::BackRef
            | TokenType::Count
            | TokenType::RepUpper => write!(f, "{:?}({})", self.kind, self.count),
            TokenType::RepLower => {
                write!(f, "{:?}({}, {:?})", self.kind, self.count, self.char_value)
            }
            _ if self.char_value != '\0' => write!(f, "{:?}({:?})", self.kind, self.char_value),
            _ => write!(f, "{:?}", self.kind),
        }
    }
}
