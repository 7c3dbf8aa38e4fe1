use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

use filter_log_ports::ByteSource;
use filter_log_shared_kernel::{InfraResult, InfrastructureError};

/// Buffered byte source over an input file.
pub struct FileByteSource<R = BufReader<File>> {
    path: PathBuf,
    reader: R,
}

impl FileByteSource {
    /// Open the file at `path`. Fails before any byte is read.
    pub fn open(path: &Path) -> InfraResult<Self> {
        let file = File::open(path).map_err(|source| InfrastructureError::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened input {}", path.display());
        Ok(Self { path: path.to_path_buf(), reader: BufReader::new(file) })
    }
}

impl<R: Read> FileByteSource<R> {
    /// Wrap an arbitrary reader; `path` is only used in error messages.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self { path: path.into(), reader }
    }
}

impl<R: Read> ByteSource for FileByteSource<R> {
    fn next_byte(&mut self) -> InfraResult<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(InfrastructureError::Read { path: self.path.clone(), source });
                }
            }
        }
    }
}
