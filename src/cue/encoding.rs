use crate::cue::constants::{BOM_UTF8, BOM_UTF16BE, BOM_UTF16LE, UNRELIABLE_ENCODINGS};
use crate::cue::error::{CueError, CueResult};
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use log::{debug, trace};
use std::borrow::Cow;

/// Raw input of the parser, either still encoded or already decoded.
#[derive(Debug, Clone, Copy)]
pub enum RawCue<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for RawCue<'a> {
    fn from(value: &'a [u8]) -> Self {
        RawCue::Bytes(value)
    }
}

impl<'a> From<&'a str> for RawCue<'a> {
    fn from(value: &'a str) -> Self {
        RawCue::Text(value)
    }
}

/// Looks up a WHATWG encoding label such as `utf-8`, `cp1251` or `utf-16le`.
pub fn lookup(label: &str) -> CueResult<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CueError::UnknownEncoding(label.to_string()))
}

pub fn encoding_name(encoding: &'static Encoding) -> String {
    encoding.name().to_ascii_lowercase()
}

/// Number of leading bytes taken up by a UTF-8 or UTF-16 byte order mark.
pub fn bom_len(buffer: &[u8]) -> usize {
    if buffer.starts_with(&BOM_UTF8) {
        BOM_UTF8.len()
    } else if buffer.starts_with(&BOM_UTF16LE) || buffer.starts_with(&BOM_UTF16BE) {
        BOM_UTF16LE.len()
    } else {
        0
    }
}

/// Guesses the encoding of `buffer`, falling back to `default` when the guess is worthless.
pub fn detect(buffer: &[u8], default: &'static Encoding) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(buffer) {
        trace!("Byte order mark found: {}", encoding.name());
        return encoding;
    }

    if buffer.is_ascii() {
        trace!("Plain ASCII input, using {}", default.name());
        return default;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(buffer, true);
    let guess = detector.guess(None, true);

    if UNRELIABLE_ENCODINGS
        .iter()
        .any(|name| guess.name().eq_ignore_ascii_case(name))
    {
        debug!(
            "Ignoring unreliable encoding guess {}, using {}",
            guess.name(),
            default.name()
        );
        return default;
    }

    guess
}

/// Decodes `raw` and returns the text together with the name of the encoding used.
///
/// Text input is passed through with an empty encoding name.
pub fn resolve<'a>(
    raw: RawCue<'a>,
    default_encoding: &str,
    strict: bool,
) -> CueResult<(Cow<'a, str>, String)> {
    let buffer = match raw {
        RawCue::Text(text) => return Ok((Cow::Borrowed(text), String::new())),
        RawCue::Bytes(buffer) => buffer,
    };

    let default = lookup(default_encoding)?;
    let encoding = if strict {
        default
    } else {
        detect(buffer, default)
    };

    let skip = bom_len(buffer);
    debug!(
        "Decoding {} bytes as {} (skipping {skip} BOM bytes)",
        buffer.len(),
        encoding.name()
    );

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&buffer[skip..])
        .ok_or_else(|| CueError::EncodingError(encoding_name(encoding)))?;

    Ok((text, encoding_name(encoding)))
}
