use std::sync::Arc;

use url::Url;

use vfs_error::{Result, VfsError};

use crate::{
    handler::{LockKind, Metadata, OpenOptions, StreamHandler, Whence},
    mode::OpenMode,
    registry,
    stream::{self, Stream},
};

/// In-memory fixture with recognizable answers, so dispatch through the
/// registry and the `Stream` façade can be told apart from defaults.
struct FixtureHandler;

const FIXTURE_TELL: u64 = 42;

impl StreamHandler for FixtureHandler {
    fn open(
        &self,
        target: &Url,
        _mode: OpenMode,
        options: OpenOptions,
    ) -> Result<Option<String>> {
        if options.use_path {
            Ok(Some(format!("{}#resolved", target)))
        } else {
            Ok(None)
        }
    }

    fn read(&self, len: usize) -> Result<Vec<u8>> {
        Ok(vec![0x2a; len])
    }

    fn write(&self, buf: &[u8]) -> Result<usize> {
        Ok(buf.len())
    }

    fn eof(&self) -> bool {
        false
    }

    fn seek(&self, _offset: i64, _whence: Whence) -> Result<()> {
        Ok(())
    }

    fn tell(&self) -> u64 {
        FIXTURE_TELL
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn lock(&self, _kind: LockKind) -> Result<()> {
        Ok(())
    }

    fn set_metadata(&self, _target: &Url, _op: Metadata) -> Result<()> {
        Ok(())
    }

    fn rename(&self, _from: &Url, _to: &Url) -> Result<()> {
        Ok(())
    }

    fn unlink(&self, _target: &Url) -> Result<()> {
        Ok(())
    }
}

// The registry is process-global and tests run in parallel, so every
// test registers its own scheme.
fn register_fixture(scheme: &str) {
    registry::register(scheme, Arc::new(FixtureHandler))
        .expect("Fixture scheme should be free");
}

#[test]
fn register_then_resolve_round_trips() {
    register_fixture("fix-resolve");

    let handler =
        registry::resolve("fix-resolve").expect("Scheme should resolve");
    assert_eq!(handler.tell(), FIXTURE_TELL);
}

#[test]
fn duplicate_registration_is_rejected() {
    register_fixture("fix-dup");

    let result = registry::register("fix-dup", Arc::new(FixtureHandler));
    assert!(matches!(result, Err(VfsError::Scheme(_))));
}

#[test]
fn unregister_releases_the_scheme() {
    register_fixture("fix-release");
    assert!(registry::is_registered("fix-release"));

    registry::unregister("fix-release").expect("Scheme should unregister");
    assert!(!registry::is_registered("fix-release"));

    // The released scheme is free for a new handler
    register_fixture("fix-release");
}

#[test]
fn unregistering_unknown_scheme_is_an_error() {
    let result = registry::unregister("fix-never-registered");
    assert!(matches!(result, Err(VfsError::Scheme(_))));
}

#[test]
fn registered_schemes_lists_active_handlers() {
    register_fixture("fix-listed");

    let schemes = registry::registered_schemes();
    assert!(schemes.contains(&"fix-listed".to_owned()));
    assert!(!schemes.contains(&"fix-unlisted".to_owned()));
}

#[test]
fn open_delegates_to_the_registered_handler() {
    register_fixture("fix-open");

    let mut stream = Stream::open("fix-open://target", "w+")
        .expect("Stream should open");

    assert_eq!(stream.write(b"payload").unwrap(), 7);
    assert_eq!(stream.read(3).unwrap(), vec![0x2a; 3]);
    assert_eq!(stream.tell(), FIXTURE_TELL);
    assert!(!stream.eof());
    assert!(stream.seek(-5, Whence::End).is_ok());
    assert!(stream.flush().is_ok());
    assert!(stream.lock(LockKind::Shared).is_ok());
}

#[test]
fn open_records_handle_state_on_the_host_side() {
    register_fixture("fix-state");

    let stream = Stream::open("fix-state://target", "a+b")
        .expect("Stream should open");

    assert_eq!(stream.target().scheme(), "fix-state");
    assert!(stream.mode().readable());
    assert!(stream.mode().appends());
    assert_eq!(stream.resolved_path(), None);
}

#[test]
fn open_with_use_path_reports_the_resolved_location() {
    register_fixture("fix-path");

    let options = OpenOptions {
        use_path: true,
        ..Default::default()
    };
    let stream = Stream::open_with("fix-path://target", "r", options)
        .expect("Stream should open");

    assert_eq!(
        stream.resolved_path(),
        Some("fix-path://target#resolved")
    );
}

#[test]
fn opening_unknown_scheme_fails() {
    let result = Stream::open("fix-unknown://target", "r");
    assert!(matches!(result, Err(VfsError::Scheme(_))));
}

#[test]
fn opening_malformed_target_fails() {
    register_fixture("fix-badurl");

    let result = Stream::open("not a url at all", "r");
    assert!(matches!(result, Err(VfsError::Url(_))));
}

#[test]
fn opening_with_malformed_mode_fails() {
    register_fixture("fix-badmode");

    let result = Stream::open("fix-badmode://target", "rw");
    assert!(matches!(result, Err(VfsError::Mode(_))));
}

#[test]
fn truncate_is_diagnosed_as_unsupported() {
    register_fixture("fix-trunc");

    let mut stream =
        Stream::open("fix-trunc://target", "r").expect("Stream should open");
    assert!(matches!(
        stream.truncate(100),
        Err(VfsError::Unsupported("truncate"))
    ));
}

#[test]
fn stat_is_diagnosed_as_unsupported() {
    register_fixture("fix-stat");

    let stream =
        Stream::open("fix-stat://target", "r").expect("Stream should open");
    assert!(matches!(
        stream.stat(),
        Err(VfsError::Unsupported("stat"))
    ));
}

#[test]
fn path_scoped_operations_dispatch_by_scheme() {
    register_fixture("fix-paths");

    assert!(
        stream::rename("fix-paths://old", "fix-paths://new").is_ok()
    );
    assert!(stream::unlink("fix-paths://gone").is_ok());
    assert!(stream::set_metadata(
        "fix-paths://meta",
        Metadata::Chmod(0o644)
    )
    .is_ok());
}

#[test]
fn rename_across_schemes_is_rejected() {
    register_fixture("fix-rename-a");
    register_fixture("fix-rename-b");

    let result =
        stream::rename("fix-rename-a://old", "fix-rename-b://new");
    assert!(matches!(result, Err(VfsError::Scheme(_))));
}
