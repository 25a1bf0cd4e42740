/*!
 * Configuration handling for filetree
 */

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::Result;

/// Default directory to list
pub const DEFAULT_ROOT: &str = ".";

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "file_tree.txt";

/// Verbosity of the diagnostic log written to stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Command-line arguments for filetree
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "filetree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Write an indented listing of a directory tree to a file",
    long_about = "Lists a directory recursively, skipping hidden entries, tooling directories \
                  (__pycache__, .git, .vscode, node_modules) and .log/.tmp files, and writes \
                  the result as indented plain text."
)]
pub struct Args {
    /// Directory to list
    #[clap(default_value = DEFAULT_ROOT)]
    pub directory_path: String,

    /// Output text file, replaced on every run
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Diagnostic log level
    #[clap(long, value_enum, default_value_t = LogLevel::default())]
    pub log_level: LogLevel,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory whose contents are listed
    pub root: PathBuf,

    /// Output text file path
    pub output_file: PathBuf,

    /// Diagnostic log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            root: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
            log_level: args.log_level,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.root.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.root.display()
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            crate::ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                PathNotFound,
                "Output directory not found: {}",
                parent.display()
            );
        }

        crate::ensure!(
            !self.output_file.is_dir(),
            Config,
            "Output file is a directory: {}",
            self.output_file.display()
        );

        Ok(())
    }
}
