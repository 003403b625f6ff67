use thiserror::Error;

/// The class of failure encountered while compiling a pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("invalid collating element")]
    Collate,
    #[error("invalid character class name")]
    Ctype,
    #[error("invalid escape sequence")]
    Escape,
    #[error("invalid back reference")]
    Backref,
    #[error("unmatched bracket")]
    Brack,
    #[error("unmatched parenthesis")]
    Paren,
    #[error("unmatched brace")]
    Brace,
    #[error("invalid repetition count")]
    BadBrace,
    #[error("invalid character range")]
    Range,
    #[error("insufficient memory to compile pattern")]
    Space,
    #[error("repetition has nothing to repeat")]
    BadRepeat,
    #[error("pattern is too complex")]
    Complexity,
    #[error("groups are nested too deeply")]
    Stack,
    #[error("unsupported construct")]
    Unsupported,
}

/// A failed compilation, carrying the character offset into the pattern at
/// which the failure was detected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{kind} at offset {offset}")]
pub struct RegexError {
    kind: ErrorKind,
    offset: usize,
}

impl RegexError {
    #[must_use]
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_error_with_kind_and_offset() {
        assert_eq!(
            "invalid repetition count at offset 2",
            RegexError::new(ErrorKind::BadBrace, 2).to_string()
        )
    }
}
