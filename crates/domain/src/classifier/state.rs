// crates/domain/src/classifier/state.rs

/// Where the classifier is within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierState {
    /// Next byte is the first byte of a line.
    #[default]
    LineStart,
    /// A banner marker was seen and is waiting for its space.
    MarkerPending(u8),
    /// Rest of the line; the keep/drop decision is fixed.
    Body,
}

impl ClassifierState {
    pub const fn pending(self) -> Option<u8> {
        match self {
            Self::MarkerPending(marker) => Some(marker),
            Self::LineStart | Self::Body => None,
        }
    }
}
