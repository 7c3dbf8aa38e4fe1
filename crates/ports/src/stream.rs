// crates/ports/src/stream.rs
use filter_log_shared_kernel::InfraResult;

/// Sequential reader of one octet at a time.
pub trait ByteSource {
    /// Read the next byte. `Ok(None)` is end-of-stream, reported by the read
    /// itself rather than by a look-ahead check.
    fn next_byte(&mut self) -> InfraResult<Option<u8>>;
}

/// Sequential writer of one octet at a time.
pub trait ByteSink {
    fn write_byte(&mut self, byte: u8) -> InfraResult<()>;

    fn write_all(&mut self, bytes: &[u8]) -> InfraResult<()> {
        bytes.iter().try_for_each(|&b| self.write_byte(b))
    }

    /// Flush everything written so far. Called once after the last byte.
    fn finish(&mut self) -> InfraResult<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> InfraResult<Option<u8>> {
        (**self).next_byte()
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_byte(&mut self, byte: u8) -> InfraResult<()> {
        (**self).write_byte(byte)
    }

    fn write_all(&mut self, bytes: &[u8]) -> InfraResult<()> {
        (**self).write_all(bytes)
    }

    fn finish(&mut self) -> InfraResult<()> {
        (**self).finish()
    }
}
