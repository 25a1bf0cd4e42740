/*!
 * Plain-text tree writer for filetree
 *
 * The walk streams straight into the sink: no tree is kept in memory, each
 * kept entry becomes one `<indent>|-- <name>` line as soon as it is listed.
 */

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{FileTreeError, Result};
use crate::filter::should_skip;
use crate::scanner::list_entries;
use crate::types::WalkSummary;

/// Marker written before every entry name
pub const BRANCH: &str = "|-- ";

/// Indentation added per nesting level
pub const INDENT_STEP: &str = "    ";

/// Depth-first writer of indented directory listings
pub struct TreeWriter<W: Write> {
    sink: W,
    summary: WalkSummary,
}

impl<W: Write> TreeWriter<W> {
    /// Create a new tree writer on top of `sink`
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            summary: WalkSummary::default(),
        }
    }

    /// Write the `Directory tree for: <root>` header line
    pub fn write_header(&mut self, root: &Path) -> Result<()> {
        writeln!(self.sink, "Directory tree for: {}", root.display())
            .map_err(FileTreeError::OutputWrite)
    }

    /// Write the listing of `dir` below `indent`, recursing into kept directories.
    ///
    /// `dir` itself is never filtered and gets no line of its own.
    pub fn write_tree(&mut self, dir: &Path, indent: &str) -> Result<()> {
        debug!("Listing {}", dir.display());

        for entry in list_entries(dir)? {
            if should_skip(&entry) {
                debug!("Skipping {}", entry.path.display());
                self.summary.skipped += 1;
                continue;
            }

            self.write_line(indent, &entry.name)?;

            if entry.is_dir() {
                self.summary.directories += 1;
                let nested = format!("{indent}{INDENT_STEP}");
                self.write_tree(&entry.path, &nested)?;
            } else {
                self.summary.files += 1;
            }
        }

        Ok(())
    }

    fn write_line(&mut self, indent: &str, name: &str) -> Result<()> {
        writeln!(self.sink, "{indent}{BRANCH}{name}").map_err(FileTreeError::OutputWrite)
    }

    /// Counters for everything written so far
    pub fn summary(&self) -> WalkSummary {
        self.summary
    }

    /// Flush and hand back the sink
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush().map_err(FileTreeError::OutputWrite)?;
        Ok(self.sink)
    }
}

/// Replace `config.output_file` with a fresh listing of `config.root`.
///
/// A stale output file is removed first. The file is created before the walk
/// starts, so it shows up in the listing when it lives under the root. On
/// failure whatever was already written stays on disk.
pub fn generate(config: &Config) -> Result<WalkSummary> {
    let output = &config.output_file;

    match fs::remove_file(output) {
        Ok(()) => debug!("Removed previous {}", output.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(FileTreeError::OutputWrite(e)),
    }

    let file = File::create(output).map_err(FileTreeError::OutputWrite)?;
    let mut writer = TreeWriter::new(BufWriter::new(file));

    let root = std::path::absolute(&config.root)?;
    info!("Writing directory tree for {} to {}", root.display(), output.display());

    writer.write_header(&root)?;
    writer.write_tree(&config.root, "")?;

    let summary = writer.summary();
    writer.finish()?;

    info!(
        "Wrote {} directories and {} files ({} entries skipped)",
        summary.directories, summary.files, summary.skipped
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn render(dir: &Path) -> String {
        let mut writer = TreeWriter::new(Vec::new());
        writer.write_tree(dir, "").unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_depth_first_ordering() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();
        fs::write(temp_dir.path().join("a").join("x"), "").unwrap();
        fs::write(temp_dir.path().join("b"), "").unwrap();

        assert_eq!(render(temp_dir.path()), "|-- a\n    |-- x\n|-- b\n");
    }

    #[test]
    fn test_write_header() {
        let mut writer = TreeWriter::new(Vec::new());
        writer.write_header(Path::new("/srv/project")).unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "Directory tree for: /srv/project\n");
    }

    #[test]
    fn test_summary_counts() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("src").join("bin")).unwrap();
        fs::write(temp_dir.path().join("src").join("lib.rs"), "").unwrap();
        fs::write(temp_dir.path().join("build.log"), "").unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(temp_dir.path().join(".git").join("HEAD"), "").unwrap();

        let mut writer = TreeWriter::new(Vec::new());
        writer.write_tree(temp_dir.path(), "").unwrap();
        assert_eq!(
            writer.summary(),
            WalkSummary {
                directories: 2,
                files: 1,
                skipped: 2,
            }
        );
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("file.txt"), "").unwrap();

        let mut writer = TreeWriter::new(FailingSink);
        let result = writer.write_tree(temp_dir.path(), "");
        assert!(matches!(result, Err(FileTreeError::OutputWrite(_))));
    }
}
