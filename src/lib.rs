/*!
 * filetree - Write an indented plain-text listing of a directory tree
 *
 * The walk is depth-first and sorted by name. Hidden entries, a fixed set of
 * tooling directories and `.log`/`.tmp` files are left out.
 */

pub mod config;
pub mod error;
pub mod filter;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, LogLevel};
pub use error::{FileTreeError, Result};
pub use scanner::list_entries;
pub use types::{Entry, EntryKind, WalkSummary};
pub use writer::{generate, TreeWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
