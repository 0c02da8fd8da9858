use std::fmt;

/// Number of symbols in the trie alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// A single letter of the fixed lowercase alphabet, stored as its offset from `a`.
///
/// Only `a`-`z` can be represented. Conversion from a byte or a `char` fails for
/// anything else, which is how invalid words are rejected before they reach the trie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Returns the symbol for an ASCII lowercase letter, or `None` for any other byte.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Symbol(byte - b'a'))
        } else {
            None
        }
    }

    /// Returns the symbol with the given alphabet offset, or `None` if it is out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Symbol(index as u8))
        } else {
            None
        }
    }

    /// Offset of this symbol from `a`, usable as a child slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter this symbol represents.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        u8::try_from(ch)
            .ok()
            .and_then(Symbol::from_byte)
            .ok_or(ch)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
