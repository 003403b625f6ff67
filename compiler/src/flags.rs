use bitmask::bitmask;

bitmask! {
    /// Options selecting the grammar a pattern is written in and how it is
    /// compiled.
    ///
    /// At most one of the grammar flags (`ECMAScript`, `Basic`, `Extended`,
    /// `Awk`, `Grep`, `Egrep`) is expected to be set. When none is, patterns
    /// are read as ECMAScript.
    #[derive(Debug)]
    pub mask SyntaxFlags: u16 where
    #[derive(Debug)]
    flags SyntaxFlag {
        /// Match without regard to case.
        ICase = 0x0001,
        /// Accepted for compatibility. Sub-expressions are never marked.
        NoSubs = 0x0002,
        /// Accepted for compatibility.
        Optimize = 0x0004,
        /// Accepted for compatibility. Ranges compare code points.
        Collate = 0x0008,
        ECMAScript = 0x0010,
        Basic = 0x0020,
        Extended = 0x0040,
        Awk = 0x0080,
        Grep = 0x0100,
        Egrep = 0x0200,
        /// Accepted for compatibility. Anchors are unsupported.
        Multiline = 0x0400,
    }
}

impl Default for SyntaxFlags {
    fn default() -> Self {
        SyntaxFlags::none()
    }
}

/// The grammar a pattern is tokenized with, resolved from a set of
/// [SyntaxFlags].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// POSIX basic regular expressions.
    Basic,
    /// POSIX extended regular expressions.
    Extended,
    /// Basic regular expressions where a newline separates alternatives.
    Grep,
    /// Extended regular expressions where a newline separates alternatives.
    Egrep,
    /// Extended regular expressions with C style escapes.
    Awk,
    ECMAScript,
}

impl Dialect {
    pub fn from_flags(flags: SyntaxFlags) -> Self {
        if flags.contains(SyntaxFlag::ECMAScript) {
            Dialect::ECMAScript
        } else if flags.contains(SyntaxFlag::Grep) {
            Dialect::Grep
        } else if flags.contains(SyntaxFlag::Egrep) {
            Dialect::Egrep
        } else if flags.contains(SyntaxFlag::Basic) {
            Dialect::Basic
        } else if flags.contains(SyntaxFlag::Extended) {
            Dialect::Extended
        } else if flags.contains(SyntaxFlag::Awk) {
            Dialect::Awk
        } else {
            Dialect::ECMAScript
        }
    }

    /// Returns the grammar flag that selects this dialect.
    pub fn flag(&self) -> SyntaxFlag {
        match self {
            Dialect::Basic => SyntaxFlag::Basic,
            Dialect::Extended => SyntaxFlag::Extended,
            Dialect::Grep => SyntaxFlag::Grep,
            Dialect::Egrep => SyntaxFlag::Egrep,
            Dialect::Awk => SyntaxFlag::Awk,
            Dialect::ECMAScript => SyntaxFlag::ECMAScript,
        }
    }

    /// Returns true for the dialects with basic grammar, where grouping and
    /// counted repetition are spelled with escapes.
    pub fn is_basic(&self) -> bool {
        matches!(self, Dialect::Basic | Dialect::Grep)
    }

    /// Returns true for the dialects where a newline separates alternatives.
    pub fn has_newline_alternation(&self) -> bool {
        matches!(self, Dialect::Grep | Dialect::Egrep)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Dialect::Basic => "basic",
            Dialect::Extended => "extended",
            Dialect::Grep => "grep",
            Dialect::Egrep => "egrep",
            Dialect::Awk => "awk",
            Dialect::ECMAScript => "ECMAScript",
        };

        write!(f, "{}", repr)
    }
}

/// Folds a character to upper case when that maps it onto exactly one
/// character, otherwise returns it unchanged.
pub fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
