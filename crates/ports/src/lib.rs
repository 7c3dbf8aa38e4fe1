//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`stream`]: sequential byte input and output
//! - [`progress`]: progress reporting for long-running filtering
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
pub mod progress;
pub mod stream;

pub use progress::{FilterSummary, ProgressSink};
pub use stream::{ByteSink, ByteSource};
