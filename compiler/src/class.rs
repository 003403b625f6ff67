//! Named character classes and the character sets bracket expressions
//! compile into.

use crate::error::ErrorKind;

/// A named class of characters, as spelled `[:name:]` within a bracket
/// expression or by a class escape such as `\d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Xdigit,
    Word,
}

impl CharClass {
    /// Resolves a class by name, failing with [ErrorKind::Ctype] for names
    /// that aren't recognized.
    pub fn from_name(name: &str) -> Result<Self, ErrorKind> {
        let class = match name {
            "alnum" => CharClass::Alnum,
            "alpha" => CharClass::Alpha,
            "blank" => CharClass::Blank,
            "cntrl" => CharClass::Cntrl,
            "digit" | "d" => CharClass::Digit,
            "graph" => CharClass::Graph,
            "lower" => CharClass::Lower,
            "print" => CharClass::Print,
            "punct" => CharClass::Punct,
            "space" | "s" => CharClass::Space,
            "upper" => CharClass::Upper,
            "xdigit" => CharClass::Xdigit,
            "w" => CharClass::Word,
            _ => return Err(ErrorKind::Ctype),
        };

        Ok(class)
    }

    /// Resolves a class escape letter into its class and whether the escape
    /// negates it, as `\D` does.
    pub fn from_escape(letter: char) -> Option<(Self, bool)> {
        let class = match letter.to_ascii_lowercase() {
            'd' => CharClass::Digit,
            's' => CharClass::Space,
            'w' => CharClass::Word,
            _ => return None,
        };

        Some((class, letter.is_ascii_uppercase()))
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::Alnum => c.is_alphanumeric(),
            CharClass::Alpha => c.is_alphabetic(),
            CharClass::Blank => c == ' ' || c == '\t',
            CharClass::Cntrl => c.is_control(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Graph => !c.is_control() && !c.is_whitespace(),
            CharClass::Lower => c.is_lowercase(),
            CharClass::Print => !c.is_control(),
            CharClass::Punct => c.is_ascii_punctuation(),
            CharClass::Space => c.is_whitespace(),
            CharClass::Upper => c.is_uppercase(),
            CharClass::Xdigit => c.is_ascii_hexdigit(),
            CharClass::Word => c.is_alphanumeric() || c == '_',
        }
    }
}

/// Resolves the span of a `[. .]` or `[= =]` element into the single
/// character it names. Multi-character collating elements are not
/// supported.
pub fn collating_element(span: &str) -> Result<char, ErrorKind> {
    let mut chars = span.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ErrorKind::Collate),
    }
}

/// The set of characters matched by a bracket expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketSet {
    negated: bool,
    icase: bool,
    chars: Vec<char>,
    ranges: Vec<(char, char)>,
    classes: Vec<(CharClass, bool)>,
}

impl BracketSet {
    /// Returns an empty set. Under `icase` a character also matches when
    /// any of its case variants is a member.
    #[must_use]
    pub fn new(icase: bool) -> Self {
        Self {
            icase,
            ..Self::default()
        }
    }

    pub fn negate(&mut self) {
        self.negated = true;
    }

    pub fn add_char(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Adds the inclusive range `start..=end`, failing with
    /// [ErrorKind::Range] when `end` precedes `start`.
    pub fn add_range(&mut self, start: char, end: char) -> Result<(), ErrorKind> {
        if end < start {
            return Err(ErrorKind::Range);
        }

        self.ranges.push((start, end));
        Ok(())
    }

    /// Adds every member of `class`, or when `negated`, every character
    /// outside of it.
    pub fn add_class(&mut self, class: CharClass, negated: bool) {
        self.classes.push((class, negated));
    }

    fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
            || self
                .ranges
                .iter()
                .any(|(start, end)| (*start..=*end).contains(&c))
            || self
                .classes
                .iter()
                .any(|(class, negated)| class.contains(c) != *negated)
    }

    pub fn matches(&self, c: char) -> bool {
        let found = self.contains(c)
            || (self.icase
                && c.to_lowercase()
                    .chain(c.to_uppercase())
                    .any(|variant| variant != c && self.contains(variant)));

        found != self.negated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_class_names() {
        let input_output = [
            ("alpha", Ok(CharClass::Alpha)),
            ("xdigit", Ok(CharClass::Xdigit)),
            ("w", Ok(CharClass::Word)),
            ("d", Ok(CharClass::Digit)),
            ("letter", Err(ErrorKind::Ctype)),
            ("", Err(ErrorKind::Ctype)),
        ];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!((test_id, expected), (test_id, CharClass::from_name(input)))
        }
    }

    #[test]
    fn should_resolve_class_escapes() {
        assert_eq!(Some((CharClass::Digit, false)), CharClass::from_escape('d'));
        assert_eq!(Some((CharClass::Word, true)), CharClass::from_escape('W'));
        assert_eq!(None, CharClass::from_escape('x'));
    }

    #[test]
    fn should_resolve_single_character_collating_elements() {
        assert_eq!(Ok('-'), collating_element("-"));
        assert_eq!(Err(ErrorKind::Collate), collating_element("ch"));
        assert_eq!(Err(ErrorKind::Collate), collating_element(""));
    }

    #[test]
    fn should_match_members_of_bracket_set() {
        let mut set = BracketSet::new(false);
        set.add_char('_');
        set.add_range('a', 'c').unwrap();
        set.add_class(CharClass::Digit, false);

        let input_output = [('_', true), ('b', true), ('7', true), ('d', false), ('B', false)];
        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!((test_id, expected), (test_id, set.matches(input)))
        }

        set.negate();
        assert!(!set.matches('b'));
        assert!(set.matches('d'));
    }

    #[test]
    fn should_reject_reversed_range() {
        assert_eq!(Err(ErrorKind::Range), BracketSet::new(false).add_range('z', 'a'));
    }

    #[test]
    fn should_match_lower_case_class_members_under_icase() {
        let mut set = BracketSet::new(true);
        set.add_class(CharClass::Lower, false);

        // input is upper cased before it reaches the set.
        assert!(set.matches('A'));
        assert!(!set.matches('1'));
    }

    #[test]
    fn should_match_case_variants_of_range_members_under_icase() {
        let mut set = BracketSet::new(true);
        // spans the punctuation between the upper and lower case letters.
        set.add_range('Z', 'a').unwrap();

        let input_output = [
            ('Z', true),
            ('z', true),
            ('a', true),
            ('A', true),
            ('_', true),
            ('`', true),
            ('b', false),
            ('B', false),
        ];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!((test_id, expected), (test_id, set.matches(input)))
        }
    }
}
