use crate::cd::{FRAMES_PER_MINUTE, FRAMES_PER_SECOND, SECONDS_PER_MINUTE};
use crate::cue::error::{CueError, CueResult};

/// Decodes a `MM:SS:FF` timestamp (or a bare frame count) into frames.
pub fn decode(text: &str) -> CueResult<u32> {
    let malformed = || CueError::MalformedTimestamp(text.to_string());

    if !text.contains(':') {
        return text.parse().map_err(|_| malformed());
    }

    let fields = text
        .split(':')
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;

    let &[minutes, seconds, frames] = fields.as_slice() else {
        return Err(malformed());
    };

    minutes
        .checked_mul(FRAMES_PER_MINUTE)
        .zip(seconds.checked_mul(FRAMES_PER_SECOND))
        .and_then(|(m, s)| m.checked_add(s))
        .and_then(|ms| ms.checked_add(frames))
        .ok_or_else(malformed)
}

/// Encodes a frame count as `MM:SS:FF`. Minutes above 99 are printed at full width.
pub fn encode(frames: u32) -> String {
    let seconds = frames / FRAMES_PER_SECOND;

    format!(
        "{:02}:{:02}:{:02}",
        seconds / SECONDS_PER_MINUTE,
        seconds % SECONDS_PER_MINUTE,
        frames % FRAMES_PER_SECOND
    )
}
