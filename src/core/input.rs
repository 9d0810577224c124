//! Input source detection.
//!
//! Decides whether content is being piped into the process and, if so,
//! drains it. Stdin counts as piped whenever it is not a character device,
//! so `/dev/null` and terminals both read as "nothing piped".

use std::io::{self, Read};

use tracing::debug;

use crate::error::{Error, Result};

const CHUNK: usize = 8 * 1024;

/// Where piped content comes from.
pub trait InputSource {
    /// Whether data is being piped in. Must not consume any input.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the handle cannot be queried.
    fn is_piped(&self) -> io::Result<bool>;

    /// Read everything until EOF.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` naming the number of bytes read before the failure.
    fn drain(&mut self) -> Result<Vec<u8>>;
}

/// The process's standard input.
#[derive(Debug, Default)]
pub struct Stdin;

impl InputSource for Stdin {
    #[cfg(unix)]
    fn is_piped(&self) -> io::Result<bool> {
        use std::os::fd::AsFd;
        use std::os::unix::fs::FileTypeExt;

        let fd = io::stdin().as_fd().try_clone_to_owned()?;
        let metadata = std::fs::File::from(fd).metadata()?;
        Ok(!metadata.file_type().is_char_device())
    }

    #[cfg(not(unix))]
    fn is_piped(&self) -> io::Result<bool> {
        use std::io::IsTerminal;

        Ok(!io::stdin().is_terminal())
    }

    fn drain(&mut self) -> Result<Vec<u8>> {
        drain(io::stdin().lock())
    }
}

/// Read `reader` to EOF, tracking how much arrived before any failure.
///
/// # Errors
///
/// Returns `Error::Io` with "failed to copy after N bytes" if a read fails.
pub fn drain<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; CHUNK];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(Error::io(
                    format!("failed to copy after {} bytes", buf.len()),
                    e,
                ))
            }
        }
    }

    debug!(bytes = buf.len(), "drained piped input");
    Ok(buf)
}

/// Check the source once and drain it if data is being piped in.
///
/// Returns `None` when nothing is piped.
///
/// # Errors
///
/// Returns `Error::Io` if the source cannot be queried or the drain fails.
pub fn read_piped(source: &mut dyn InputSource) -> Result<Option<Vec<u8>>> {
    let piped = source
        .is_piped()
        .map_err(|e| Error::io("failed to stat stdin", e))?;

    if !piped {
        return Ok(None);
    }

    source.drain().map(Some)
}
