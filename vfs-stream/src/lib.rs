//! # Stream host abstraction
//!
//! `vfs-stream` is the host side of scheme-keyed stream dispatch: arbitrary
//! code registers a [`StreamHandler`] for a URI scheme prefix, and every
//! stream operation against a `scheme://target` URL is routed to the
//! handler registered for that scheme.
//!
//! The pieces:
//!
//! - [`StreamHandler`]: the operation set a handler must answer.
//! - [`registry`]: the global scheme → handler mapping.
//! - [`Stream`]: an open handle. All per-handle state (target, mode,
//!   resolved path) lives here, never in the handler.

pub mod handler;
mod mode;
pub mod registry;
pub mod stream;

pub use handler::{
    LockKind, Metadata, OpenOptions, Owner, StreamHandler, Whence,
};
pub use mode::OpenMode;
pub use stream::{rename, set_metadata, unlink, Stream};

#[cfg(test)]
mod tests;
