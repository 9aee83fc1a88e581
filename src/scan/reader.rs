//! Directory listing primitive

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;

/// One immediate entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: OsString,
    pub is_dir: bool,
    /// Byte size as reported by the entry's metadata (ignored for directories)
    pub size: u64,
}

impl DirEntryInfo {
    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size: 0,
        }
    }
}

/// Lists the immediate contents of a directory.
///
/// A failure anywhere in the listing fails the whole directory.
pub trait DirReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

/// Reads directories from the local filesystem.
///
/// Entry metadata does not traverse symlinks, so a symlink is reported as a
/// non-directory sized by the link itself. An entry removed between listing
/// and stat is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirReader for FsReader {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if let Some(info) = entry_info(entry.file_name(), entry.metadata())? {
                entries.push(info);
            }
        }
        Ok(entries)
    }
}

/// Build an entry from its stat result. A vanished entry (NotFound) yields
/// `None`; any other failure fails the listing.
fn entry_info(
    name: OsString,
    meta: io::Result<fs::Metadata>,
) -> io::Result<Option<DirEntryInfo>> {
    match meta {
        Ok(meta) => Ok(Some(DirEntryInfo {
            name,
            is_dir: meta.is_dir(),
            size: meta.len(),
        })),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            trace!(name = ?name, "entry vanished before stat");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
