pub mod check;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod models;
pub mod parser;
pub mod signature;
pub mod text;
pub mod writer;

pub use check::{CheckReport, Classification, check, classify};
pub use error::{CueError, CueResult};
pub use models::{Cue, CueFile, CueIndex, CueTrack, Remarks, TrackOptions};
pub use parser::{CueParser, ParseOptions, parse, parse_str};
pub use signature::{SignOptions, hex_sign, sign};
pub use writer::{WriteOptions, dumps};
