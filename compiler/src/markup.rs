//! Character classification tables, one per dialect and grammar context.

use crate::flags::Dialect;
use crate::token::TokenType;

/// Classifies a single character into a [TokenType].
///
/// Exact entries take priority. Failing those, the predicate is consulted
/// and its kind returned when it holds. Otherwise the default kind applies,
/// if one is configured.
#[derive(Debug, Clone, Default)]
pub struct MarkupTable {
    entries: Vec<(char, TokenType)>,
    predicate: Option<(fn(char) -> bool, TokenType)>,
    default: Option<TokenType>,
}

impl MarkupTable {
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, TokenType)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            predicate: None,
            default: None,
        }
    }

    #[must_use]
    pub fn with_entry(mut self, ch: char, kind: TokenType) -> Self {
        self.entries.push((ch, kind));
        self
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: fn(char) -> bool, kind: TokenType) -> Self {
        self.predicate = Some((predicate, kind));
        self
    }

    #[must_use]
    pub fn with_default(mut self, kind: TokenType) -> Self {
        self.default = Some(kind);
        self
    }

    pub fn lookup(&self, ch: char) -> Option<TokenType> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == ch)
            .map(|(_, kind)| *kind)
            .or_else(|| {
                self.predicate
                    .and_then(|(predicate, kind)| predicate(ch).then_some(kind))
            })
            .or(self.default)
    }
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Adds the newline alternation shared by the grep family.
fn with_newline_alternation(table: MarkupTable, dialect: Dialect) -> MarkupTable {
    if dialect.has_newline_alternation() {
        table.with_entry('\n', TokenType::Alternation)
    } else {
        table
    }
}

// expression context

pub fn basic_specials() -> MarkupTable {
    MarkupTable::new([
        ('.', TokenType::CharClass),
        ('[', TokenType::LBracket),
        ('{', TokenType::LBrace),
        ('*', TokenType::Replication),
        ('^', TokenType::Assertion),
        ('$', TokenType::Assertion),
        ('\\', TokenType::TrailingEscape),
    ])
    .with_default(TokenType::Literal)
}

pub fn basic_escapes() -> MarkupTable {
    MarkupTable::new([
        ('(', TokenType::LParen),
        (')', TokenType::RParen),
        ('{', TokenType::LBrace),
        ('}', TokenType::Literal),
        ('.', TokenType::Literal),
        ('[', TokenType::Literal),
        (']', TokenType::Literal),
        ('*', TokenType::Literal),
        ('^', TokenType::Literal),
        ('$', TokenType::Literal),
        ('\\', TokenType::Literal),
    ])
    .with_predicate(is_digit, TokenType::SimpleBackRef)
    .with_default(TokenType::RedundantEscape)
}

pub fn extended_specials() -> MarkupTable {
    MarkupTable::new([
        ('.', TokenType::CharClass),
        ('[', TokenType::LBracket),
        ('(', TokenType::LParen),
        (')', TokenType::RParen),
        ('{', TokenType::LBrace),
        ('*', TokenType::Replication),
        ('+', TokenType::Replication),
        ('?', TokenType::Replication),
        ('|', TokenType::Alternation),
        ('^', TokenType::Assertion),
        ('$', TokenType::Assertion),
        ('\\', TokenType::TrailingEscape),
    ])
    .with_default(TokenType::Literal)
}

pub fn extended_escapes() -> MarkupTable {
    MarkupTable::new(
        ".[](){}*+?|^$\\"
            .chars()
            .map(|special| (special, TokenType::Literal)),
    )
    .with_default(TokenType::RedundantEscape)
}

/// Extended escapes plus the C escapes of awk.
pub fn awk_escapes() -> MarkupTable {
    MarkupTable::new(
        ".[](){}*+?|^$\\\"/"
            .chars()
            .map(|special| (special, TokenType::Literal))
            .chain("abfnrtv".chars().map(|c| (c, TokenType::ControlChar))),
    )
    .with_default(TokenType::RedundantEscape)
}

pub fn ecmascript_specials() -> MarkupTable {
    extended_specials()
}

pub fn ecmascript_escapes() -> MarkupTable {
    MarkupTable::new(
        "dDsSwW"
            .chars()
            .map(|c| (c, TokenType::CharClass))
            .chain([('b', TokenType::Assertion), ('B', TokenType::Assertion)])
            .chain("fnvrt0".chars().map(|c| (c, TokenType::ControlChar)))
            .chain([
                ('c', TokenType::Control),
                ('x', TokenType::HexEscape),
                ('u', TokenType::UnicodeEscape),
            ]),
    )
    .with_predicate(is_digit, TokenType::CompoundBackRef)
    .with_default(TokenType::Literal)
}

/// Returns the expression context specials for `dialect`.
pub fn expression_specials(dialect: Dialect) -> MarkupTable {
    let table = match dialect {
        Dialect::Basic | Dialect::Grep => basic_specials(),
        Dialect::Extended | Dialect::Egrep | Dialect::Awk => extended_specials(),
        Dialect::ECMAScript => ecmascript_specials(),
    };

    with_newline_alternation(table, dialect)
}

/// Returns the expression context escapes for `dialect`, keyed by `\`.
pub fn expression_escapes(dialect: Dialect) -> MarkupTable {
    match dialect {
        Dialect::Basic | Dialect::Grep => basic_escapes(),
        Dialect::Extended | Dialect::Egrep => extended_escapes(),
        Dialect::Awk => awk_escapes(),
        Dialect::ECMAScript => ecmascript_escapes(),
    }
}

// bracket context

pub fn bracket_specials() -> MarkupTable {
    MarkupTable::new([
        (']', TokenType::RBracket),
        ('^', TokenType::Negation),
        ('-', TokenType::RangeDash),
    ])
    .with_default(TokenType::BracketLiteral)
}

/// The `[:`, `[=` and `[.` openers, keyed by `[`.
pub fn bracket_escapes() -> MarkupTable {
    MarkupTable::new([
        (':', TokenType::Class),
        ('=', TokenType::Equiv),
        ('.', TokenType::Collate),
    ])
}

/// Backslash escapes inside ECMAScript brackets, keyed by `\`.
pub fn ecmascript_bracket_escapes() -> MarkupTable {
    MarkupTable::new(
        "dDsSwW"
            .chars()
            .map(|c| (c, TokenType::CharClass))
            .chain("bfnvrt0".chars().map(|c| (c, TokenType::ControlChar)))
            .chain([
                ('c', TokenType::Control),
                ('x', TokenType::HexEscape),
                ('u', TokenType::UnicodeEscape),
            ]),
    )
    .with_default(TokenType::BracketLiteral)
}

// brace context

/// Counts and the comma separating them. A bare `}` closes the brace in
/// every dialect, including the basic ones that otherwise spell it `\}`.
pub fn brace_specials() -> MarkupTable {
    MarkupTable::new([(',', TokenType::Comma), ('}', TokenType::RBrace)])
        .with_predicate(is_digit, TokenType::Count)
        .with_default(TokenType::BadBrace)
}

/// Brace escapes, keyed by `\`.
pub fn brace_escapes(dialect: Dialect) -> MarkupTable {
    if dialect.is_basic() {
        MarkupTable::new([('}', TokenType::RBrace)]).with_default(TokenType::BadBrace)
    } else {
        MarkupTable::default().with_default(TokenType::BadBrace)
    }
}

// subexpression context

/// The `(?=`, `(?!` and `(?:` forms, keyed by `?`.
pub fn subexpression_escapes() -> MarkupTable {
    MarkupTable::new([
        ('=', TokenType::PositiveLookahead),
        ('!', TokenType::NegativeLookahead),
        (':', TokenType::NoSubexp),
    ])
}
