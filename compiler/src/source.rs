//! Pull based readers over a buffered pattern.

/// A reader over the characters of a pattern.
///
/// The whole pattern is buffered so that any read can be rolled back to an
/// earlier [CharSource::position].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSource {
    chars: Vec<char>,
    position: usize,
}

impl CharSource {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            position: 0,
        }
    }

    /// Returns the next character, advancing past it.
    pub fn get(&mut self) -> Option<char> {
        let next = self.chars.get(self.position).copied()?;
        self.position += 1;
        Some(next)
    }

    /// Steps back over the character returned by the last successful
    /// [CharSource::get].
    pub fn unget(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns true when every character has been read.
    pub fn is_empty(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Greedily reads digits in `radix`, returning `None` when not even one
    /// digit could be read. Values beyond `usize::MAX` saturate.
    pub fn get_int(&mut self, radix: u32) -> Option<usize> {
        let mut value: Option<usize> = None;

        while let Some(digit) = self.peek().and_then(|c| c.to_digit(radix)) {
            self.position += 1;
            value = Some(
                value
                    .unwrap_or(0)
                    .saturating_mul(radix as usize)
                    .saturating_add(digit as usize),
            );
        }

        value
    }

    /// Reads exactly `n` digits in `radix`. On a short read the source is
    /// restored to where it started and `None` is returned.
    pub fn get_n_digit_int(&mut self, n: usize, radix: u32) -> Option<u32> {
        let start = self.position;
        let mut value: u32 = 0;

        for _ in 0..n {
            match self.get().and_then(|c| c.to_digit(radix)) {
                Some(digit) => value = value.saturating_mul(radix).saturating_add(digit),
                None => {
                    self.rewind(start);
                    return None;
                }
            }
        }

        Some(value)
    }

    /// Reads up to and including `delimiter`, returning everything before it
    /// along with whether the delimiter was found. When it isn't, the rest of
    /// the input is returned.
    pub fn get_until(&mut self, delimiter: &str) -> (String, bool) {
        let delimiter: Vec<char> = delimiter.chars().collect();
        let remaining = &self.chars[self.position.min(self.chars.len())..];

        match remaining
            .windows(delimiter.len().max(1))
            .position(|window| window == delimiter.as_slice())
        {
            Some(idx) => {
                let span = remaining[..idx].iter().collect();
                self.position += idx + delimiter.len();
                (span, true)
            }
            None => {
                let span = remaining.iter().collect();
                self.position = self.chars.len();
                (span, false)
            }
        }
    }

    /// Returns the count of characters read so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Restores the source to a position previously returned by
    /// [CharSource::position].
    pub fn rewind(&mut self, position: usize) {
        self.position = position.min(self.chars.len());
    }
}

/// A bounded first-in first-out buffer of values read ahead of their use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookahead<T, const N: usize> {
    items: std::collections::VecDeque<T>,
}

impl<T, const N: usize> Default for Lookahead<T, N> {
    fn default() -> Self {
        Self {
            items: std::collections::VecDeque::with_capacity(N),
        }
    }
}

impl<T, const N: usize> Lookahead<T, N> {
    /// Buffers `item` behind any already held.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.items.len() < N, "lookahead capacity exceeded");
        self.items.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_get_and_unget_characters() {
        let mut src = CharSource::new("ab");

        assert_eq!(Some('a'), src.get());
        src.unget();
        assert_eq!(Some('a'), src.get());
        assert_eq!(Some('b'), src.get());
        assert_eq!(None, src.get());
        assert!(src.is_empty());
    }

    #[test]
    fn should_read_integers_greedily() {
        let input_output = [
            ("123,", 10, Some(123), Some(',')),
            ("7", 10, Some(7), None),
            ("x1", 10, None, Some('x')),
            ("fFg", 16, Some(255), Some('g')),
            ("99999999999999999999999", 10, Some(usize::MAX), None),
        ];

        for (test_id, (input, radix, expected, next)) in input_output.into_iter().enumerate() {
            let mut src = CharSource::new(input);

            assert_eq!((test_id, expected), (test_id, src.get_int(radix)));
            assert_eq!((test_id, next), (test_id, src.get()));
        }
    }

    #[test]
    fn should_roll_back_short_fixed_width_reads() {
        let mut src = CharSource::new("4g1");
        assert_eq!(None, src.get_n_digit_int(2, 16));
        assert_eq!(0, src.position());

        let mut src = CharSource::new("0041z");
        assert_eq!(Some(0x41), src.get_n_digit_int(4, 16));
        assert_eq!(Some('z'), src.get());

        let mut src = CharSource::new("1");
        assert_eq!(None, src.get_n_digit_int(2, 16));
        assert_eq!(Some('1'), src.get());
    }

    #[test]
    fn should_read_until_delimiter() {
        let mut src = CharSource::new("alpha:]x");
        assert_eq!(("alpha".to_string(), true), src.get_until(":]"));
        assert_eq!(Some('x'), src.get());

        let mut src = CharSource::new("alpha:");
        assert_eq!(("alpha:".to_string(), false), src.get_until(":]"));
        assert!(src.is_empty());
    }

    #[test]
    fn should_yield_buffered_items_in_order() {
        let mut buffer = Lookahead::<char, 2>::default();

        buffer.push('a');
        buffer.push('b');
        assert_eq!(Some('a'), buffer.pop());
        buffer.push('c');
        assert_eq!(Some('b'), buffer.pop());
        assert_eq!(Some('c'), buffer.pop());
        assert!(buffer.is_empty());
    }
}
