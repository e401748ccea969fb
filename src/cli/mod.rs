use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

use bbconvert::{LineEnding, TagConverter, TagVocabulary};

mod config;
mod convert;
mod inspect;
mod tags;

pub use config::Config;

/// bbconvert - XML rich text to BBCode converter
#[derive(Parser)]
#[command(name = "bbconvert")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an XML document to BBCode
    Convert {
        /// Input XML file, looked up in the input directory if not found as given
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (prints to stdout when omitted)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Directory searched for INPUT (default: ./xml)
        #[arg(short = 'd', long, value_name = "DIR")]
        input_dir: Option<PathBuf>,

        /// Write CRLF line breaks instead of LF
        #[arg(long)]
        crlf: bool,

        /// Print conversion statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Print the parse events of an XML document
    Inspect {
        /// Input XML file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Emit one JSON object per event
        #[arg(long)]
        json: bool,
    },

    /// List the tags rendered as BBCode
    Tags,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Convert {
            input,
            output,
            input_dir,
            crlf,
            stats,
        } => {
            let line_ending = if crlf {
                LineEnding::CrLf
            } else {
                config.output.line_ending.unwrap_or_default()
            };
            let converter = build_converter(&config).with_line_ending(line_ending);
            let input_dir = input_dir
                .or_else(|| config.input.directory.clone())
                .unwrap_or_else(|| PathBuf::from(convert::DEFAULT_INPUT_DIR));
            convert::run(&converter, input, output, input_dir, stats)
        }
        Commands::Inspect { input, json } => inspect::run(input, json),
        Commands::Tags => tags::run(&build_vocabulary(&config)),
    }
}

/// Vocabulary after applying the `[vocabulary]` config section
fn build_vocabulary(config: &Config) -> TagVocabulary {
    let base = match &config.vocabulary.tags {
        Some(tags) => TagVocabulary::new(tags.iter().cloned()),
        None => TagVocabulary::default(),
    };
    let vocabulary = base.extended(config.vocabulary.extra.iter().cloned());
    debug!("Vocabulary has {} tags", vocabulary.len());
    vocabulary
}

fn build_converter(config: &Config) -> TagConverter {
    TagConverter::new(build_vocabulary(config))
}
