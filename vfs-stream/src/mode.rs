use core::{fmt::Display, str::FromStr};

use vfs_error::VfsError;

/// Parsed form of an `fopen`-style mode string.
///
/// The base letter picks the access pattern, `+` upgrades it to
/// read-write, and a trailing `b` or `t` is accepted and ignored
/// (streams here carry bytes either way):
///
/// | mode | effect |
/// |------|--------|
/// | `r`  | read from the start |
/// | `w`  | write, create, truncate to zero length |
/// | `a`  | write, create, every write goes to the end |
/// | `x`  | write, create, refuse an existing target |
/// | `c`  | write, create, keep existing contents |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenMode {
    read: bool,
    write: bool,
    append: bool,
    create: bool,
    create_new: bool,
    truncate: bool,
}

impl OpenMode {
    pub fn readable(&self) -> bool {
        self.read
    }

    pub fn writable(&self) -> bool {
        self.write
    }

    pub fn appends(&self) -> bool {
        self.append
    }

    pub fn creates(&self) -> bool {
        self.create
    }

    /// Whether opening must fail if the target already exists (`x` modes).
    pub fn exclusive(&self) -> bool {
        self.create_new
    }

    pub fn truncates(&self) -> bool {
        self.truncate
    }

    fn base(letter: char) -> Option<Self> {
        let mode = match letter {
            'r' => OpenMode {
                read: true,
                write: false,
                append: false,
                create: false,
                create_new: false,
                truncate: false,
            },
            'w' => OpenMode {
                read: false,
                write: true,
                append: false,
                create: true,
                create_new: false,
                truncate: true,
            },
            'a' => OpenMode {
                read: false,
                write: true,
                append: true,
                create: true,
                create_new: false,
                truncate: false,
            },
            'x' => OpenMode {
                read: false,
                write: true,
                append: false,
                create: true,
                create_new: true,
                truncate: false,
            },
            'c' => OpenMode {
                read: false,
                write: true,
                append: false,
                create: true,
                create_new: false,
                truncate: false,
            },
            _ => return None,
        };
        Some(mode)
    }
}

impl FromStr for OpenMode {
    type Err = VfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let mut mode = chars
            .next()
            .and_then(OpenMode::base)
            .ok_or_else(|| VfsError::Mode(s.to_owned()))?;

        let mut update_seen = false;
        let mut translation_seen = false;
        for flag in chars {
            match flag {
                '+' if !update_seen => {
                    update_seen = true;
                    mode.read = true;
                    mode.write = true;
                }
                'b' | 't' if !translation_seen => translation_seen = true,
                _ => return Err(VfsError::Mode(s.to_owned())),
            }
        }
        Ok(mode)
    }
}

impl Display for OpenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = if self.create_new {
            'x'
        } else if self.append {
            'a'
        } else if self.truncate {
            'w'
        } else if self.create {
            'c'
        } else {
            'r'
        };
        write!(f, "{}", base)?;
        if self.read && self.write {
            write!(f, "+")?;
        }
        Ok(())
    }
}
