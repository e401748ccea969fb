//! # bbconvert
//!
//! Command-line converter from XML rich text to BBCode.
//!
//! ## Usage
//!
//! ```bash
//! # Convert xml/story.xml and print the BBCode
//! bbconvert convert story.xml
//!
//! # Convert to a file with Windows line endings
//! bbconvert convert notes/story.xml story.txt --crlf
//!
//! # Dump the parse events of a document
//! bbconvert inspect story.xml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
