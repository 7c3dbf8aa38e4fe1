// crates/shared-kernel/src/lib.rs
pub use error::{
    ErrorContext, ErrorKind, FilterLogError, InfraResult, InfrastructureError, PresentationError,
    Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{ByteCount, LineCount, ProgressInterval};
