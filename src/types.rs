/*!
 * Core types for the filetree application
 */

use std::path::PathBuf;

/// Classification of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory, or a symlink resolving to one
    Directory,
    /// Anything else, including broken symlinks
    File,
}

/// A named entry found while listing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name, lossily converted to UTF-8
    pub name: String,
    /// Full path of the entry
    pub path: PathBuf,
    /// Directory or file
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Counters collected while writing a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directory lines written
    pub directories: usize,
    /// File lines written
    pub files: usize,
    /// Entries dropped by the filter (descendants of skipped directories are not counted)
    pub skipped: usize,
}
