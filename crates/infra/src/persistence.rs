// crates/infra/src/persistence.rs
mod file_reader;
mod file_writer;

pub use file_reader::FileByteSource;
pub use file_writer::FileByteSink;
