//! Parsing, checking, re-encoding and signing of CUE sheets.
//!
//! Everything in here works on in-memory buffers; reading and writing files is left to the
//! caller.

pub mod cd;
pub mod config;
pub mod cue;

pub use config::Config;
pub use cue::{Cue, CueError, CueResult};
