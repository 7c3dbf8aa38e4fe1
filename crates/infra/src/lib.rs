// crates/infra/src/lib.rs
pub mod persistence;
pub mod reporting;
pub mod timing;

pub use persistence::{FileByteSink, FileByteSource};
pub use reporting::ConsoleProgress;
pub use timing::Stopwatch;
