//! # Null stream handler
//!
//! `vfs-null` provides [`NullStreamHandler`], a stream handler that
//! accepts every passive operation and performs none of them: writes
//! report zero bytes consumed, reads come back empty at immediate
//! end-of-stream, seeks land on position zero. Anything that would
//! change persistent state (locking, renaming, deleting, metadata
//! changes) is refused.
//!
//! Generic stream code runs against it unmodified while all data
//! vanishes, which makes the handler useful as a sink target for code
//! paths that must produce no output.
//!
//! ```no_run
//! use vfs_null::NullStreamHandler;
//! use vfs_stream::Stream;
//!
//! NullStreamHandler::register_default().expect("Failed to register");
//!
//! let mut stream = Stream::open("null://sink", "w").expect("Failed to open");
//! let written = stream.write(b"Content").expect("Failed to write");
//! assert_eq!(written, 0);
//! ```

use std::sync::Arc;

use url::Url;

use vfs_error::{Result, VfsError};
use vfs_stream::{
    registry, LockKind, Metadata, OpenMode, OpenOptions, StreamHandler,
    Whence,
};

/// Scheme [`NullStreamHandler::register_default`] installs the handler
/// under.
pub const NULL_SCHEME: &str = "null";

/// A stream handler that discards all data and holds no state.
///
/// Every call is answered with the same fixed result regardless of call
/// history, so a single instance serves any number of concurrent
/// streams.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStreamHandler;

impl NullStreamHandler {
    pub fn new() -> Self {
        Self
    }

    /// Register the handler under the [`NULL_SCHEME`] scheme.
    pub fn register_default() -> Result<()> {
        registry::register(NULL_SCHEME, Arc::new(NullStreamHandler))
    }
}

impl StreamHandler for NullStreamHandler {
    /// Opening always succeeds; there is no path to resolve.
    fn open(
        &self,
        target: &Url,
        mode: OpenMode,
        _options: OpenOptions,
    ) -> Result<Option<String>> {
        log::debug!("Discarding stream {} opened in mode `{}`", target, mode);
        Ok(None)
    }

    /// There is never anything to read.
    fn read(&self, _len: usize) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    /// Every byte is discarded, and none is reported as consumed.
    fn write(&self, buf: &[u8]) -> Result<usize> {
        log::debug!("Discarding {} bytes", buf.len());
        Ok(0)
    }

    /// The stream is exhausted from the moment it is opened.
    fn eof(&self) -> bool {
        true
    }

    /// Any offset is accepted; no position is tracked.
    fn seek(&self, _offset: i64, _whence: Whence) -> Result<()> {
        Ok(())
    }

    /// The position is pinned at the start.
    fn tell(&self) -> u64 {
        0
    }

    /// Nothing is buffered, so there is never anything to flush.
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// No lock is ever granted, shared or otherwise.
    fn lock(&self, _kind: LockKind) -> Result<()> {
        Err(VfsError::NotPermitted("lock"))
    }

    /// There is no metadata to change.
    fn set_metadata(&self, _target: &Url, _op: Metadata) -> Result<()> {
        Err(VfsError::NotPermitted("metadata change"))
    }

    /// Null targets have no identity to move.
    fn rename(&self, _from: &Url, _to: &Url) -> Result<()> {
        Err(VfsError::NotPermitted("rename"))
    }

    /// There is nothing to delete.
    fn unlink(&self, _target: &Url) -> Result<()> {
        Err(VfsError::NotPermitted("unlink"))
    }
}
