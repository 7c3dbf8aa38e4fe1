// crates/domain/src/marker.rs

/// Banner markers only count when the next byte is a space.
pub const BANNER_MARKERS: [u8; 4] = *b"#-=+";
/// Directional markers are accepted on sight.
pub const DIRECTIONAL_MARKERS: [u8; 2] = *b"><";

pub const SPACE: u8 = b' ';
pub const NEWLINE: u8 = b'\n';
/// Applied to every emitted body byte.
pub const SEVEN_BIT_MASK: u8 = 0x7f;

/// Class of a byte found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    /// `#`, `-`, `=`, `+`
    Banner,
    /// `>`, `<`
    Directional,
}

impl MarkerClass {
    /// Classify the first byte of a line. `None` means the line is rejected.
    #[inline]
    pub const fn classify(byte: u8) -> Option<Self> {
        match byte {
            b'#' | b'-' | b'=' | b'+' => Some(Self::Banner),
            b'>' | b'<' => Some(Self::Directional),
            _ => None,
        }
    }
}
