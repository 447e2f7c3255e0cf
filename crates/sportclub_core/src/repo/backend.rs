//! Storage backends for whole-file record persistence.
//!
//! # Invariants
//! - `read_lines` returns `Ok(None)` for a missing file, never an error.
//! - `write_lines` replaces the whole file content.

use crate::model::entity::EntityKind;
use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Line-oriented storage for the four record files.
pub trait StoreBackend {
    /// Reads all lines of a family's file, or `None` when it does not exist.
    fn read_lines(&self, kind: EntityKind) -> io::Result<Option<Vec<String>>>;
    /// Overwrites a family's file with `lines`.
    fn write_lines(&mut self, kind: EntityKind, lines: &[String]) -> io::Result<()>;
}

/// Plain-text files in one data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl StoreBackend for FileBackend {
    fn read_lines(&self, kind: EntityKind) -> io::Result<Option<Vec<String>>> {
        match fs::read(self.path_for(kind)) {
            Ok(bytes) => Ok(Some(split_lines(&bytes))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write_lines(&mut self, kind: EntityKind, lines: &[String]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(self.path_for(kind), content)
    }
}

/// Splits raw file content into lines.
///
/// Each line is decoded on its own; invalid UTF-8 becomes U+FFFD so the rest
/// of that record still decodes. A trailing `\r` is stripped.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    if body.is_empty() {
        return Vec::new();
    }
    body.split(|byte| *byte == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}

/// In-process backend for tests and ephemeral sessions.
///
/// Reads and writes can be switched to fail to simulate an unreadable or
/// read-only data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    files: HashMap<EntityKind, Vec<String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one family's file content.
    pub fn with_lines<I, S>(mut self, kind: EntityKind, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files
            .insert(kind, lines.into_iter().map(Into::into).collect());
        self
    }

    /// Current file content for a family, if it has been written.
    pub fn lines(&self, kind: EntityKind) -> Option<&[String]> {
        self.files.get(&kind).map(Vec::as_slice)
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl StoreBackend for MemoryBackend {
    fn read_lines(&self, kind: EntityKind) -> io::Result<Option<Vec<String>>> {
        if self.fail_reads {
            return Err(io::Error::new(
                ErrorKind::PermissionDenied,
                format!("{} is not readable", kind.file_name()),
            ));
        }
        Ok(self.files.get(&kind).cloned())
    }

    fn write_lines(&mut self, kind: EntityKind, lines: &[String]) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                ErrorKind::PermissionDenied,
                format!("{} is read-only", kind.file_name()),
            ));
        }
        self.files.insert(kind, lines.to_vec());
        Ok(())
    }
}
