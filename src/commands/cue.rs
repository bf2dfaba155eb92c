use clap::Parser;
use std::path::PathBuf;

/// Parses CUE sheets and prints their contents.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ShowCommand {
    /// CUE sheets to show
    #[arg(value_name = "CUE", required = true)]
    pub input: Vec<PathBuf>,

    /// Print the parsed sheets as JSON
    #[arg(long, short = 'j', default_value_t = false)]
    pub json: bool,
}

/// Computes the disc signature of CUE sheets.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Computes the disc signature of CUE sheets\n\nBy default only the track layout (index positions) is signed, so renamed or re-tagged rips of the same disc share a signature"
)]
pub struct SignCommand {
    /// CUE sheets to sign
    #[arg(value_name = "CUE", required = true)]
    pub input: Vec<PathBuf>,

    /// Include file/track counts, performer and title
    #[arg(long, default_value_t = false)]
    pub head: bool,

    /// Include file names
    #[arg(long, default_value_t = false)]
    pub files: bool,

    /// Include track titles
    #[arg(long, default_value_t = false)]
    pub titles: bool,
}

/// Checks CUE sheets for missing metadata.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct CheckCommand {
    /// CUE sheets to check
    #[arg(value_name = "CUE", required = true)]
    pub input: Vec<PathBuf>,
}

/// Re-writes a CUE sheet in another encoding.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ConvertCommand {
    /// Input CUE sheet
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CUE sheet
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Encoding of the output
    #[arg(long, short = 'o', value_name = "ENCODING", default_value = "utf-8")]
    pub output_encoding: String,

    /// Do not write a byte order mark
    #[arg(long, default_value_t = false)]
    pub no_bom: bool,

    /// Force overwrite of the output file if it already exists
    #[arg(long, short = 'f', default_value_t = false)]
    pub force: bool,
}
