//! A recursive descent compiler from a token stream into a matcher tree.
//!
//! ```text
//! alternation := branch ('|' branch)*
//! branch      := expression*
//! expression  := element replication*
//! element     := literal-run | '(' alternation ')' | '[' bracket-body ']' | char-class
//! ```

use std::time::Instant;

use log::debug;
use stepre_runtime::{Matcher, RepetitionBounds};

use crate::class::{collating_element, BracketSet, CharClass};
use crate::error::{ErrorKind, RegexError};
use crate::flags::{Dialect, SyntaxFlag, SyntaxFlags};
use crate::token::TokenType;
use crate::token_source::TokenSource;

/// The deepest nesting of groups and stacked replications a pattern may
/// contain.
pub const MAX_NESTING: usize = 256;

/// Compiles `pattern`, read in the dialect selected by `flags`, into a
/// matcher over characters.
///
/// # Example
///
/// ```
/// use stepre_compiler::{compile, SyntaxFlag};
/// use stepre_runtime::Evaluator;
///
/// let mut matcher = compile("ab|cd*", SyntaxFlag::Extended.into()).unwrap();
///
/// assert!(matcher.matches("ab".chars()));
/// assert!(matcher.matches("cddd".chars()));
/// assert!(!matcher.matches("abd".chars()));
/// ```
pub fn compile(pattern: &str, flags: SyntaxFlags) -> Result<Matcher<char>, RegexError> {
    let started = Instant::now();
    let mut compiler = Compiler::new(pattern, flags);

    match compiler.pattern() {
        Ok(matcher) => {
            debug!(
                "compiled {:?} as {} in {:?}",
                pattern,
                compiler.dialect,
                started.elapsed()
            );
            Ok(matcher)
        }
        Err(error) => {
            debug!(
                "failed to compile {:?} as {}: {}",
                pattern, compiler.dialect, error
            );
            Err(error)
        }
    }
}

struct Compiler {
    tokens: TokenSource,
    dialect: Dialect,
    icase: bool,
    depth: usize,
}

impl Compiler {
    fn new(pattern: &str, flags: SyntaxFlags) -> Self {
        let tokens = TokenSource::new(pattern, flags);

        Self {
            dialect: tokens.dialect(),
            icase: flags.contains(SyntaxFlag::ICase),
            tokens,
            depth: 0,
        }
    }

    fn error(&self, kind: ErrorKind) -> RegexError {
        RegexError::new(kind, self.tokens.offset())
    }

    fn pattern(&mut self) -> Result<Matcher<char>, RegexError> {
        let matcher = self.alternation()?;

        match self.tokens.get()? {
            None => Ok(matcher),
            Some(_) => Err(self.error(ErrorKind::Paren)),
        }
    }

    fn alternation(&mut self) -> Result<Matcher<char>, RegexError> {
        let mut branches = vec![self.branch()?];

        while let Some(token) = self.tokens.get()? {
            if token.is(TokenType::Alternation) {
                branches.push(self.branch()?);
            } else {
                self.tokens.unget(token);
                break;
            }
        }

        Ok(compose(branches, Matcher::alternation))
    }

    /// An empty branch matches the empty string.
    fn branch(&mut self) -> Result<Matcher<char>, RegexError> {
        let mut expressions = vec![];

        while let Some(expression) = self.expression(expressions.is_empty())? {
            expressions.push(expression);
        }

        Ok(compose(expressions, Matcher::concatenation))
    }

    fn expression(&mut self, at_branch_start: bool) -> Result<Option<Matcher<char>>, RegexError> {
        let Some(mut matcher) = self.element(at_branch_start)? else {
            return Ok(None);
        };

        // each stacked replication nests the matcher one level deeper.
        let mut stacked = 0;
        while let Some(token) = self.tokens.get()? {
            if token.is(TokenType::RepLower) {
                stacked += 1;
                if self.depth + stacked > MAX_NESTING {
                    return Err(self.error(ErrorKind::Stack));
                }

                let bounds = self.bounds(token.count)?;
                matcher = Matcher::replication(matcher, bounds);
            } else {
                self.tokens.unget(token);
                break;
            }
        }

        Ok(Some(matcher))
    }

    /// Reads the upper bound paired with a lower bound that has just been
    /// read.
    fn bounds(&mut self, lower: usize) -> Result<RepetitionBounds, RegexError> {
        match self.tokens.get()? {
            Some(upper) if upper.is(TokenType::RepUpper) => {
                RepetitionBounds::between(lower, upper.count)
                    .ok_or_else(|| self.error(ErrorKind::BadBrace))
            }
            _ => Err(self.error(ErrorKind::BadBrace)),
        }
    }

    fn element(&mut self, at_branch_start: bool) -> Result<Option<Matcher<char>>, RegexError> {
        let Some(token) = self.tokens.get()? else {
            return Ok(None);
        };

        let matcher = match token.kind {
            TokenType::StringLiteral => string_literal(&token.string_value),
            TokenType::Literal => Matcher::singleton(token.char_value),
            TokenType::CharClass => self.char_class(token.char_value),
            TokenType::LParen => self.group()?,
            TokenType::LBracket => self.bracket()?,
            TokenType::Alternation | TokenType::RParen => {
                self.tokens.unget(token);
                return Ok(None);
            }
            // a leading `*` is an ordinary character in basic dialects.
            TokenType::RepLower
                if self.dialect.is_basic() && at_branch_start && token.char_value == '*' =>
            {
                self.bounds(token.count)?;
                Matcher::singleton('*')
            }
            TokenType::RepLower => return Err(self.error(ErrorKind::BadRepeat)),
            TokenType::Assertion => self.assertion(token.char_value, at_branch_start)?,
            TokenType::BackRef if token.count == 0 => return Err(self.error(ErrorKind::Backref)),
            TokenType::TrailingEscape | TokenType::RedundantEscape => {
                return Err(self.error(ErrorKind::Escape))
            }
            _ => return Err(self.error(ErrorKind::Unsupported)),
        };

        Ok(Some(matcher))
    }

    /// Anchors are unsupported. Basic dialects only treat `^` as an anchor
    /// at the start of a branch and `$` at its end, elsewhere both are
    /// ordinary characters.
    fn assertion(&mut self, anchor: char, at_branch_start: bool) -> Result<Matcher<char>, RegexError> {
        if self.dialect.is_basic() {
            match anchor {
                '^' if !at_branch_start => return Ok(Matcher::singleton('^')),
                '$' if !self.at_branch_end()? => return Ok(Matcher::singleton('$')),
                _ => (),
            }
        }

        Err(self.error(ErrorKind::Unsupported))
    }

    fn at_branch_end(&mut self) -> Result<bool, RegexError> {
        match self.tokens.get()? {
            Some(token) => {
                let at_end = matches!(token.kind, TokenType::Alternation | TokenType::RParen);
                self.tokens.unget(token);
                Ok(at_end)
            }
            None => Ok(true),
        }
    }

    fn char_class(&self, letter: char) -> Matcher<char> {
        match CharClass::from_escape(letter) {
            Some((class, negated)) => Matcher::predicate(move |c: &char| class.contains(*c) != negated),
            None if self.dialect == Dialect::ECMAScript => {
                Matcher::predicate(|c: &char| !is_line_terminator(*c))
            }
            None => Matcher::universal(),
        }
    }

    /// Compiles a group once its opening paren has been read.
    fn group(&mut self) -> Result<Matcher<char>, RegexError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(self.error(ErrorKind::Stack));
        }

        match self.tokens.get()? {
            Some(token) if token.is(TokenType::NoSubexp) => (),
            Some(token)
                if matches!(
                    token.kind,
                    TokenType::PositiveLookahead | TokenType::NegativeLookahead
                ) =>
            {
                return Err(self.error(ErrorKind::Unsupported))
            }
            Some(token) => self.tokens.unget(token),
            None => return Err(self.error(ErrorKind::Paren)),
        }

        let inner = self.alternation()?;

        match self.tokens.get()? {
            Some(token) if token.is(TokenType::RParen) => {
                self.depth -= 1;
                Ok(inner)
            }
            _ => Err(self.error(ErrorKind::Paren)),
        }
    }

    /// Compiles a bracket expression once its opening bracket has been read
    /// into a single predicate.
    fn bracket(&mut self) -> Result<Matcher<char>, RegexError> {
        let mut set = BracketSet::new(self.icase);
        let mut range_start: Option<char> = None;

        loop {
            let token = self
                .tokens
                .get()?
                .ok_or_else(|| self.error(ErrorKind::Brack))?;

            range_start = match token.kind {
                TokenType::RBracket => break,
                TokenType::Negation => {
                    set.negate();
                    None
                }
                TokenType::BracketLiteral => {
                    set.add_char(token.char_value);
                    Some(token.char_value)
                }
                TokenType::Collate => {
                    let c = collating_element(&token.string_value).map_err(|kind| self.error(kind))?;
                    set.add_char(c);
                    Some(c)
                }
                TokenType::Equiv => {
                    let c = collating_element(&token.string_value).map_err(|kind| self.error(kind))?;
                    set.add_char(c);
                    None
                }
                TokenType::Class => {
                    let class =
                        CharClass::from_name(&token.string_value).map_err(|kind| self.error(kind))?;
                    set.add_class(class, false);
                    None
                }
                TokenType::CharClass => {
                    let (class, negated) = CharClass::from_escape(token.char_value)
                        .ok_or_else(|| self.error(ErrorKind::Escape))?;
                    set.add_class(class, negated);
                    None
                }
                TokenType::RangeDash => {
                    let start = range_start.ok_or_else(|| self.error(ErrorKind::Range))?;
                    let end = self.range_end()?;
                    set.add_range(start, end).map_err(|kind| self.error(kind))?;
                    None
                }
                _ => return Err(self.error(ErrorKind::Brack)),
            };
        }

        Ok(Matcher::predicate(move |c: &char| set.matches(*c)))
    }

    fn range_end(&mut self) -> Result<char, RegexError> {
        match self.tokens.get()? {
            Some(token) if token.is(TokenType::BracketLiteral) => Ok(token.char_value),
            Some(token) if token.is(TokenType::Collate) => {
                collating_element(&token.string_value).map_err(|kind| self.error(kind))
            }
            Some(_) => Err(self.error(ErrorKind::Range)),
            None => Err(self.error(ErrorKind::Brack)),
        }
    }
}

/// Returns the single matcher in `matchers` unchanged, otherwise combines
/// them.
fn compose(
    mut matchers: Vec<Matcher<char>>,
    combine: fn(Vec<Matcher<char>>) -> Matcher<char>,
) -> Matcher<char> {
    if matchers.len() == 1 {
        if let Some(matcher) = matchers.pop() {
            return matcher;
        }
    }

    combine(matchers)
}

fn string_literal(literal: &str) -> Matcher<char> {
    let mut chars = literal.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Matcher::singleton(c),
        _ => Matcher::string_literal(literal.chars()),
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
