use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use filter_log_ports::ByteSink;
use filter_log_shared_kernel::{InfraResult, InfrastructureError};

/// Buffered byte sink over an output file.
///
/// Bytes reach the file in write order; `finish` flushes the buffer and
/// reports any deferred write failure.
pub struct FileByteSink<W: Write = BufWriter<File>> {
    path: PathBuf,
    writer: W,
}

impl FileByteSink {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> InfraResult<Self> {
        let file = File::create(path).map_err(|source| InfrastructureError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("created output {}", path.display());
        Ok(Self { path: path.to_path_buf(), writer: BufWriter::new(file) })
    }
}

impl<W: Write> FileByteSink<W> {
    pub fn from_writer(path: impl Into<PathBuf>, writer: W) -> Self {
        Self { path: path.into(), writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_error(&self, source: std::io::Error) -> InfrastructureError {
        InfrastructureError::Write { path: self.path.clone(), source }
    }
}

impl<W: Write> ByteSink for FileByteSink<W> {
    fn write_byte(&mut self, byte: u8) -> InfraResult<()> {
        self.writer.write_all(&[byte]).map_err(|e| self.write_error(e))
    }

    fn write_all(&mut self, bytes: &[u8]) -> InfraResult<()> {
        self.writer.write_all(bytes).map_err(|e| self.write_error(e))
    }

    fn finish(&mut self) -> InfraResult<()> {
        self.writer.flush().map_err(|e| self.write_error(e))?;
        log::debug!("flushed output {}", self.path.display());
        Ok(())
    }
}
