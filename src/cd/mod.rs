// src/cd/mod.rs
pub mod msf;

/// Red Book audio: 75 sectors ("frames") per second of playback.
pub const FRAMES_PER_SECOND: u32 = 75;
pub const SECONDS_PER_MINUTE: u32 = 60;
pub const FRAMES_PER_MINUTE: u32 = FRAMES_PER_SECOND * SECONDS_PER_MINUTE;
