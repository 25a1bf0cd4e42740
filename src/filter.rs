/*!
 * Fixed exclusion rules applied to listed entries
 *
 * Rules only apply to children found while listing; the root handed to the
 * walker is never filtered, even when its own name is hidden or excluded.
 */

use crate::types::Entry;

/// Directory names that are never listed nor descended into
pub const EXCLUDED_DIRS: [&str; 4] = ["__pycache__", ".git", ".vscode", "node_modules"];

/// File suffixes that are never listed (case-sensitive)
pub const EXCLUDED_EXTENSIONS: [&str; 2] = [".log", ".tmp"];

/// Names starting with a dot
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub fn should_skip_dir(name: &str) -> bool {
    is_hidden(name) || EXCLUDED_DIRS.contains(&name)
}

pub fn should_skip_file(name: &str) -> bool {
    is_hidden(name) || EXCLUDED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Check whether an entry is dropped from the listing
pub fn should_skip(entry: &Entry) -> bool {
    if entry.is_dir() {
        should_skip_dir(&entry.name)
    } else {
        should_skip_file(&entry.name)
    }
}
