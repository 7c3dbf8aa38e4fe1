// crates/domain/src/classifier/emission.rs

/// Bytes to write for one consumed input byte.
///
/// At most two bytes are ever produced: the held banner marker followed by its
/// space. Everything else emits zero or one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission {
    bytes: [u8; 2],
    len: u8,
    line_completed: bool,
}

impl Emission {
    pub const NONE: Self = Self { bytes: [0; 2], len: 0, line_completed: false };

    #[inline]
    pub const fn one(byte: u8) -> Self {
        Self { bytes: [byte, 0], len: 1, line_completed: false }
    }

    #[inline]
    pub const fn two(first: u8, second: u8) -> Self {
        Self { bytes: [first, second], len: 2, line_completed: false }
    }

    #[inline]
    #[must_use]
    pub const fn completing_line(self) -> Self {
        Self { line_completed: true, ..self }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Set when the consumed byte was the newline ending a line in `Body`.
    #[inline]
    pub const fn line_completed(&self) -> bool {
        self.line_completed
    }
}

impl Default for Emission {
    fn default() -> Self {
        Self::NONE
    }
}
