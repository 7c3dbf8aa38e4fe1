// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod interval;

pub use counts::{ByteCount, LineCount};
pub use interval::ProgressInterval;
