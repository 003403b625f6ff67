use std::ops::Range;

use stepre_runtime::{Evaluator, Matcher};

use crate::compiler::compile;
use crate::error::RegexError;
use crate::flags::{fold_case, SyntaxFlag, SyntaxFlags};

/// Compiles `pattern` under `flags` into a [Regex].
pub fn create_regex(pattern: &str, flags: SyntaxFlags) -> Result<Regex, RegexError> {
    Regex::with_flags(pattern, flags)
}

/// A compiled pattern.
///
/// A `Regex` is never mutated by matching. Every match runs on its own copy
/// of the compiled matcher, so a single `Regex` may be shared freely.
///
/// # Example
///
/// ```
/// use stepre_compiler::Regex;
///
/// let regex = Regex::new("b+c?").unwrap();
///
/// assert_eq!(Some(3), regex.match_len("bbcb".chars()));
/// assert_eq!(Some(1..4), regex.find("abbc"));
/// assert!(!regex.is_match("abbc"));
/// ```
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    flags: SyntaxFlags,
    matcher: Matcher<char>,
}

impl Regex {
    /// Compiles `pattern` as an ECMAScript expression.
    pub fn new(pattern: &str) -> Result<Self, RegexError> {
        Self::with_flags(pattern, SyntaxFlags::none())
    }

    pub fn with_flags(pattern: &str, flags: SyntaxFlags) -> Result<Self, RegexError> {
        compile(pattern, flags).map(|matcher| Self {
            pattern: pattern.to_string(),
            flags,
            matcher,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> SyntaxFlags {
        self.flags
    }

    /// Returns an independent copy of the compiled matcher.
    pub fn matcher(&self) -> Matcher<char> {
        self.matcher.clone()
    }

    fn icase(&self) -> bool {
        self.flags.contains(SyntaxFlag::ICase)
    }

    /// Returns the length in characters of the longest prefix of `chars`
    /// that matches, `Some(0)` signifying an empty match.
    pub fn match_len<I>(&self, chars: I) -> Option<usize>
    where
        I: IntoIterator<Item = char>,
    {
        let icase = self.icase();
        let mut matcher = self.matcher();

        let initial = matcher.initialize();
        let mut longest = initial.is_match().then_some(0);
        if initial.is_terminal() {
            return longest;
        }

        for (consumed, c) in chars.into_iter().enumerate() {
            let c = if icase { fold_case(c) } else { c };
            let state = matcher.update(&c);

            if state.is_match() {
                longest = Some(consumed + 1);
            }
            if state.is_terminal() {
                break;
            }
        }

        longest
    }

    /// Returns a boolean signifying if the whole of `input` matches.
    pub fn is_match(&self, input: &str) -> bool {
        let icase = self.icase();

        self.matcher()
            .matches(input.chars().map(|c| if icase { fold_case(c) } else { c }))
    }

    /// Returns the byte range of the leftmost, and at that position longest,
    /// match within `input`.
    pub fn find(&self, input: &str) -> Option<Range<usize>> {
        let starts = input
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(input.len()));

        for start in starts {
            let tail = &input[start..];

            if let Some(len) = self.match_len(tail.chars()) {
                let end = tail.chars().take(len).map(char::len_utf8).sum::<usize>();
                return Some(start..start + end);
            }
        }

        None
    }
}
