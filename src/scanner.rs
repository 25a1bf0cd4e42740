/*!
 * Directory listing
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::types::{Entry, EntryKind};

/// List the immediate children of `dir`, sorted by file name.
///
/// Entries are classified by probing the filesystem, so a symlink to a
/// directory counts as a directory and a dangling symlink as a file. Any
/// listing error aborts with `FileTreeError::Walk`.
pub fn list_entries(dir: &Path) -> Result<Vec<Entry>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.into_path();
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        entries.push(Entry { name, path, kind });
    }

    Ok(entries)
}
