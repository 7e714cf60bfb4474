/// Peekable, position-tracking walk over the source character sequence.
///
/// Offsets reported by [`Cursor::offset`] are character indices into the
/// source; every [`crate::parser::Expr`] and [`crate::error::LocatedError`]
/// offset originates here.
pub struct Cursor {
    /// Source code as character vector
    chars: Vec<char>,
    /// Current position in source
    current: usize,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            current: 0,
        }
    }

    /// Current character offset.
    pub fn offset(&self) -> usize {
        self.current
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// Returns the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    /// Returns the character after the current one without consuming it.
    pub fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    /// Consumes and returns the current character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.current).copied();
        if c.is_some() {
            self.current += 1;
        }
        c
    }

    /// Skips over any run of whitespace.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.current += 1;
        }
    }

    /// Returns the text between two previously observed offsets.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_next(), Some('b'));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.advance(), Some('b'));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new("  \n\t(");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some('('));
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn test_slice() {
        let mut cursor = Cursor::new("hello world");
        let start = cursor.offset();
        for _ in 0..5 {
            cursor.advance();
        }
        assert_eq!(cursor.slice(start, cursor.offset()), "hello");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
        cursor.skip_whitespace();
        assert_eq!(cursor.offset(), 0);
    }
}
