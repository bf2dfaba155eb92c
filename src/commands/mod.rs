use crate::commands::cue::{CheckCommand, ConvertCommand, ShowCommand, SignCommand};
use clap::{Parser, Subcommand};
use cuetools::Config;
use cuetools::cue::constants::DEFAULT_ENCODING;
use cuetools::cue::{ParseOptions, SignOptions, WriteOptions};

pub mod cue;

/// CLI for parsing, checking, re-encoding and signing CUE sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Encoding assumed for input sheets when detection is off or inconclusive
    #[arg(
        long,
        short = 'e',
        global = true,
        value_name = "ENCODING",
        env = "CUETOOLS_DEFAULT_ENCODING",
        default_value = DEFAULT_ENCODING
    )]
    pub encoding: String,

    /// Always decode input sheets with --encoding, without detection
    #[arg(long, short = 's', global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Show(ShowCommand),
    Sign(SignCommand),
    Check(CheckCommand),
    Convert(ConvertCommand),
}

impl Cli {
    pub fn config(&self) -> Config {
        let mut config = Config {
            parse: ParseOptions {
                default_encoding: self.encoding.clone(),
                strict: self.strict,
            },
            ..Default::default()
        };

        match &self.command {
            Commands::Sign(cmd) => {
                config.sign = SignOptions {
                    ignore_head: !cmd.head,
                    ignore_files: !cmd.files,
                    ignore_tracks: !cmd.titles,
                };
            }
            Commands::Convert(cmd) => {
                config.write = WriteOptions {
                    encoding: cmd.output_encoding.clone(),
                    bom: !cmd.no_bom,
                };
            }
            Commands::Show(_) | Commands::Check(_) => {}
        }

        config
    }
}
