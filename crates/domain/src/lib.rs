//! # Domain
//!
//! The line classifier: a byte-at-a-time state machine that decides, from the
//! first one or two bytes of each line, whether the line is copied to the
//! output (with its body bytes folded into 7-bit range) or dropped entirely.
//!
//! - [`marker`]: recognised line-leading marker bytes
//! - [`classifier`]: the state machine and its per-byte [`Emission`]
//!
//! Nothing in this crate performs I/O.

pub mod classifier;
pub mod marker;

pub use classifier::{ClassifierState, Emission, LineClassifier, filter};
pub use marker::MarkerClass;
