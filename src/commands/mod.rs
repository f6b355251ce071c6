use clap::{Parser, Subcommand};
use cue_converto::document::DocumentFormat;
use std::path::PathBuf;

/// CLI for converting CD cue sheets to and from a structured document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Eq, PartialEq)]
pub enum Commands {
    Parse(ParseCommand),
    Unparse(UnparseCommand),
}

/// Parses a .cue file into a structured document.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ParseCommand {
    /// Input cue sheet path
    #[arg(value_name = "INPUT_CUE")]
    pub input_cue: PathBuf,

    /// Output document path, defaults to stdout
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Encoding of the written document
    #[arg(long, value_enum, default_value_t = DocumentFormat::Binary)]
    pub format: DocumentFormat,

    /// Force overwrite of the output file if it already exists
    #[arg(long, short = 'f', value_name = "FORCE", default_value_t = false)]
    pub force: bool,
}

/// Writes a structured document back out as a .cue file.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Writes a structured document back out as a .cue file\n\nNote: The output is canonical, so comments without a tag, spacing and quoting of the original cue sheet are not preserved"
)]
pub struct UnparseCommand {
    /// Input document path
    #[arg(value_name = "INPUT_DOCUMENT")]
    pub input_document: PathBuf,

    /// Output cue sheet path, defaults to stdout
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Encoding of the read document
    #[arg(long, value_enum, default_value_t = DocumentFormat::Binary)]
    pub format: DocumentFormat,

    /// Force overwrite of the output file if it already exists
    #[arg(long, short = 'f', value_name = "FORCE", default_value_t = false)]
    pub force: bool,
}
