// crates/domain/src/classifier.rs
//! 行分類ステートマシン
//!
//! Every input byte drives exactly one transition. The decision to keep or
//! drop a line is made at its first byte (or second, for banner markers) and
//! never revisited, so at most one byte of unwritten state is ever held.

mod emission;
mod state;

pub use emission::Emission;
pub use state::ClassifierState;

use filter_log_shared_kernel::LineCount;

use crate::marker::{MarkerClass, NEWLINE, SEVEN_BIT_MASK, SPACE};

/// Streaming line classifier / copier.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    state: ClassifierState,
    output: bool,
    lines: LineCount,
    accepted: LineCount,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> ClassifierState {
        self.state
    }

    /// The banner byte held back until the following space is seen.
    pub const fn pending(&self) -> Option<u8> {
        self.state.pending()
    }

    /// Whether the current line is being copied.
    pub const fn is_accepting(&self) -> bool {
        self.output
    }

    /// Newlines consumed in `Body`. Starts at zero.
    pub const fn lines(&self) -> LineCount {
        self.lines
    }

    /// Completed lines that were copied, i.e. newlines emitted so far.
    pub const fn accepted_lines(&self) -> LineCount {
        self.accepted
    }

    /// Consume one byte and return what to write for it.
    pub fn feed(&mut self, byte: u8) -> Emission {
        match self.state {
            ClassifierState::LineStart => self.start_line(byte),
            ClassifierState::MarkerPending(marker) => self.confirm_banner(marker, byte),
            ClassifierState::Body => self.body(byte),
        }
    }

    fn start_line(&mut self, byte: u8) -> Emission {
        match MarkerClass::classify(byte) {
            Some(MarkerClass::Banner) => {
                self.output = true;
                self.state = ClassifierState::MarkerPending(byte);
                Emission::NONE
            }
            Some(MarkerClass::Directional) => {
                self.output = true;
                self.state = ClassifierState::Body;
                Emission::one(byte)
            }
            // A newline here is swallowed as well: the empty line and the one
            // after it are treated as a single rejected line.
            None => {
                self.output = false;
                self.state = ClassifierState::Body;
                Emission::NONE
            }
        }
    }

    fn confirm_banner(&mut self, marker: u8, byte: u8) -> Emission {
        self.state = ClassifierState::Body;
        if byte == SPACE {
            Emission::two(marker, byte)
        } else {
            // Both bytes are dropped; `byte` is not re-examined as a line start.
            self.output = false;
            Emission::NONE
        }
    }

    fn body(&mut self, byte: u8) -> Emission {
        if byte == NEWLINE {
            self.state = ClassifierState::LineStart;
            self.lines = self.lines.incremented();
            if self.output {
                self.accepted = self.accepted.incremented();
                Emission::one(NEWLINE).completing_line()
            } else {
                Emission::NONE.completing_line()
            }
        } else if self.output {
            // 0x8a folds into a newline; it is written as one but does not end the line.
            Emission::one(byte & SEVEN_BIT_MASK)
        } else {
            Emission::NONE
        }
    }

    /// Feed a whole slice, appending every emitted byte to `out`.
    pub fn feed_slice(&mut self, input: &[u8], out: &mut Vec<u8>) {
        for &byte in input {
            out.extend_from_slice(self.feed(byte).as_bytes());
        }
    }
}

/// Run a fresh classifier over `input` and collect its output.
pub fn filter(input: &[u8]) -> Vec<u8> {
    let mut classifier = LineClassifier::new();
    let mut out = Vec::with_capacity(input.len());
    classifier.feed_slice(input, &mut out);
    out
}
