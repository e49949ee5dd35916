use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to compressed outputs, also used to spot files already compressed
pub const GZ_SUFFIX: &str = ".gz";

/// File names that are never compressed. Matched exactly, case-sensitive.
pub const RESERVED_NAMES: [&str; 2] = ["metadata.json", "readme.md"];

/// Why a directory entry was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Reserved,
    Directory,
    AlreadyCompressed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::Reserved => write!(f, "reserved file name"),
            SkipReason::Directory => write!(f, "directory"),
            SkipReason::AlreadyCompressed => write!(f, "already compressed"),
        }
    }
}

/// Decide whether the entry at `path` should be skipped, returning `None` if it is to be
/// compressed. Rules are checked in order: reserved name, directory, `.gz` suffix.
pub fn classify(path: &Path) -> Option<SkipReason> {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

    if RESERVED_NAMES.contains(&&*name) {
        return Some(SkipReason::Reserved);
    }

    if path.is_dir() {
        return Some(SkipReason::Directory);
    }

    if name.ends_with(GZ_SUFFIX) {
        return Some(SkipReason::AlreadyCompressed);
    }

    None
}

/// The path a compressed copy of `source` is written to: the full file name with ".gz" appended
pub fn destination_for(source: &Path) -> PathBuf {
    let mut destination: OsString = source.as_os_str().to_owned();
    destination.push(GZ_SUFFIX);
    PathBuf::from(destination)
}
