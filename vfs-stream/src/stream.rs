use std::sync::Arc;

use url::Url;

use vfs_error::{Result, VfsError};

use crate::{
    handler::{LockKind, Metadata, OpenOptions, StreamHandler, Whence},
    mode::OpenMode,
    registry,
};

/// An open stream: per-handle state plus the scheme handler it
/// dispatches to.
///
/// The handle owns everything the handler is stateless about: target
/// URL, parsed mode and the resolved path reported at open time. No real
/// resource is held; dropping the stream releases only the handler
/// reference.
pub struct Stream {
    target: Url,
    mode: OpenMode,
    resolved_path: Option<String>,
    handler: Arc<dyn StreamHandler>,
}

impl Stream {
    /// Open `target` (a `scheme://…` URL) in an `fopen`-style `mode`.
    pub fn open(target: &str, mode: &str) -> Result<Self> {
        Self::open_with(target, mode, OpenOptions::default())
    }

    /// Open with explicit host option flags.
    pub fn open_with(
        target: &str,
        mode: &str,
        options: OpenOptions,
    ) -> Result<Self> {
        let target = Url::parse(target)?;
        let mode: OpenMode = mode.parse()?;
        let handler = registry::resolve(target.scheme())?;
        let resolved_path = handler.open(&target, mode, options)?;

        log::debug!("Opened stream {} in mode `{}`", target, mode);
        Ok(Stream {
            target,
            mode,
            resolved_path,
            handler,
        })
    }

    /// Read up to `len` bytes.
    pub fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        self.handler.read(len)
    }

    /// Write `buf`, returning how many bytes the handler accepted.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.handler.write(buf)
    }

    /// Whether the stream is exhausted.
    pub fn eof(&self) -> bool {
        self.handler.eof()
    }

    /// Move the stream position.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<()> {
        self.handler.seek(offset, whence)
    }

    /// Seek back to the start of the stream.
    pub fn rewind(&mut self) -> Result<()> {
        self.seek(0, Whence::Start)
    }

    /// Current stream position.
    pub fn tell(&self) -> u64 {
        self.handler.tell()
    }

    /// Push buffered data down to the handler.
    pub fn flush(&mut self) -> Result<()> {
        self.handler.flush()
    }

    /// Acquire or release an advisory lock on the stream.
    pub fn lock(&mut self, kind: LockKind) -> Result<()> {
        self.handler.lock(kind)
    }

    /// Truncate the stream to `size` bytes.
    ///
    /// Truncation is not part of the handler operation set, so the host
    /// answers for the handler: a warning diagnostic and `Unsupported`.
    pub fn truncate(&mut self, size: u64) -> Result<()> {
        log::warn!(
            "Handler for scheme `{}` does not support truncation to {} bytes",
            self.target.scheme(),
            size
        );
        Err(VfsError::Unsupported("truncate"))
    }

    /// Stat the stream.
    ///
    /// Like [`Stream::truncate`], stat is absent from the handler
    /// operation set and is diagnosed by the host.
    pub fn stat(&self) -> Result<()> {
        log::warn!(
            "Handler for scheme `{}` does not support stat",
            self.target.scheme()
        );
        Err(VfsError::Unsupported("stat"))
    }

    /// Flush and consume the stream. Handlers hold no per-stream
    /// resources, so flushing is all closing amounts to.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// The location the handler resolved at open time, if any.
    pub fn resolved_path(&self) -> Option<&str> {
        self.resolved_path.as_deref()
    }
}

/// Rename `from` to `to` through the handler registered for their scheme.
/// Both targets must live under the same scheme.
pub fn rename(from: &str, to: &str) -> Result<()> {
    let from = Url::parse(from)?;
    let to = Url::parse(to)?;

    if from.scheme() != to.scheme() {
        return Err(VfsError::Scheme(format!(
            "cannot rename across schemes `{}` and `{}`",
            from.scheme(),
            to.scheme()
        )));
    }

    registry::resolve(from.scheme())?.rename(&from, &to)
}

/// Remove `target` through the handler registered for its scheme.
pub fn unlink(target: &str) -> Result<()> {
    let target = Url::parse(target)?;
    registry::resolve(target.scheme())?.unlink(&target)
}

/// Apply a metadata mutation to `target` through the handler registered
/// for its scheme.
pub fn set_metadata(target: &str, op: Metadata) -> Result<()> {
    let target = Url::parse(target)?;
    registry::resolve(target.scheme())?.set_metadata(&target, op)
}
