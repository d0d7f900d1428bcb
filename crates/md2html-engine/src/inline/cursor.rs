/// A cursor for character-by-character scanning with bounded lookahead.
///
/// Operates over the input decoded into `char`s, so multi-byte characters
/// are never split and every index is a character index.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The characters being scanned.
    pub s: &'a [char],
    /// Current index into `s`. Never exceeds `s.len()`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a [char]) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current character index.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peeks `n` characters ahead of the current one.
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.s.get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &[char]) -> bool {
        self.rest().starts_with(pat)
    }

    /// The unconsumed input.
    pub fn rest(&self) -> &'a [char] {
        self.s.get(self.i..).unwrap_or(&[])
    }

    /// Advances by one character, returning the consumed character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += 1;
        Some(c)
    }

    /// Advances by `n` characters, stopping at end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }
}
