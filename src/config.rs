use crate::cue::encoding::lookup;
use crate::cue::error::CueResult;
use crate::cue::{ParseOptions, SignOptions, WriteOptions};

/// Settings for one run, built by the caller and handed to parser, writer and signer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub parse: ParseOptions,
    pub write: WriteOptions,
    pub sign: SignOptions,
}

impl Config {
    /// Fails early on encoding labels that would otherwise only be rejected per file.
    pub fn validate(&self) -> CueResult<()> {
        lookup(&self.parse.default_encoding)?;
        lookup(&self.write.encoding)?;
        Ok(())
    }
}
