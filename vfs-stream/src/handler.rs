use std::time::SystemTime;

use url::Url;

use vfs_error::Result;

use crate::mode::OpenMode;

/// Position reference for [`StreamHandler::seek`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Whence {
    /// Absolute offset from the start of the stream.
    #[default]
    Start,
    /// Offset relative to the current position.
    Current,
    /// Offset relative to the end of the stream.
    End,
}

/// Advisory lock request forwarded from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockKind {
    Shared,
    Exclusive,
    Unlock,
}

/// Numeric or symbolic owner/group value for ownership changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Owner {
    Id(u32),
    Name(String),
}

/// Metadata mutation forwarded from the host to
/// [`StreamHandler::set_metadata`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Metadata {
    /// Update access/modification times. `None` means "now".
    Touch {
        mtime: Option<SystemTime>,
        atime: Option<SystemTime>,
    },
    /// Change permission bits.
    Chmod(u32),
    /// Change the owning user.
    Chown(Owner),
    /// Change the owning group.
    Chgrp(Owner),
}

/// Option flags the host forwards to [`StreamHandler::open`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenOptions {
    /// The handler should raise its own diagnostics on open failure
    /// instead of failing quietly.
    pub report_errors: bool,
    /// The handler may resolve the target against a search path and
    /// report the resolved location back.
    pub use_path: bool,
}

/// The operation set a host routes stream calls to, keyed by URI scheme.
///
/// One instance serves every stream opened under its scheme. All
/// per-handle state (position, mode, target) is owned by the host-side
/// [`Stream`](crate::Stream), so implementations are shared across
/// threads and must not rely on call history.
pub trait StreamHandler: Send + Sync {
    /// Open `target` with an already-parsed `mode`. Returns the resolved
    /// location when `options.use_path` asks for one and the handler can
    /// provide it.
    fn open(
        &self,
        target: &Url,
        mode: OpenMode,
        options: OpenOptions,
    ) -> Result<Option<String>>;

    /// Read up to `len` bytes from the current position.
    fn read(&self, len: usize) -> Result<Vec<u8>>;

    /// Consume bytes from `buf`, returning how many were accepted.
    fn write(&self, buf: &[u8]) -> Result<usize>;

    /// Whether the stream is exhausted.
    fn eof(&self) -> bool;

    /// Move the stream position.
    fn seek(&self, offset: i64, whence: Whence) -> Result<()>;

    /// Current stream position.
    fn tell(&self) -> u64;

    /// Push any buffered data down to the backing store.
    fn flush(&self) -> Result<()>;

    /// Acquire or release an advisory lock.
    fn lock(&self, kind: LockKind) -> Result<()>;

    /// Apply a metadata mutation to `target`.
    fn set_metadata(&self, target: &Url, op: Metadata) -> Result<()>;

    /// Move `from` to `to`. Both targets share the handler's scheme;
    /// the host rejects cross-scheme renames before dispatch.
    fn rename(&self, from: &Url, to: &Url) -> Result<()>;

    /// Remove `target`.
    fn unlink(&self, target: &Url) -> Result<()>;
}
