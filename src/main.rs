/*!
 * Command-line interface for filetree
 */

use std::io;

use clap::Parser;
use tracing::debug;

use filetree::config::{Args, Config, LogLevel};
use filetree::writer::generate;

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    generate(&config)?;

    println!("Directory tree saved to {}", config.output_file.display());

    Ok(())
}

fn setup_tracing(log_level: LogLevel) {
    if let Some(level) = log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
