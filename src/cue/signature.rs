use crate::cue::models::Cue;
use sha2::{Digest, Sha256};

/// Parts of a sheet left out of its signature. By default only the track layout counts, so
/// re-ripped or renamed copies of a disc still match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOptions {
    /// Skip file/track counts, performer and title.
    pub ignore_head: bool,
    /// Skip file names.
    pub ignore_files: bool,
    /// Skip track titles.
    pub ignore_tracks: bool,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            ignore_head: true,
            ignore_files: true,
            ignore_tracks: true,
        }
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase().replace(' ', "")
}

fn head_segment(cue: &Cue) -> String {
    fold(&format!(
        "{:03}{:03}{}{}",
        cue.files.len(),
        cue.tracks.len(),
        cue.performer,
        cue.title
    ))
}

fn files_segment(cue: &Cue) -> String {
    fold(&cue.files.iter().map(|file| file.name.as_str()).collect::<String>())
}

fn titles_segment(cue: &Cue) -> String {
    fold(&cue.tracks.iter().map(|track| track.title.as_str()).collect::<String>())
}

/// Track count followed by the frame position of every index, e.g. `02,000000,0012A5.0012F6`.
fn layout_segment(cue: &Cue) -> String {
    let mut layout = format!("{:02X}", cue.tracks.len());

    for track in &cue.tracks {
        let frames: Vec<String> = track
            .indexes()
            .iter()
            .map(|index| format!("{:06X}", index.frames()))
            .collect();

        layout.push(',');
        layout.push_str(&frames.join("."));
    }

    layout
}

/// SHA-256 disc signature of a sheet.
pub fn sign(cue: &Cue, options: SignOptions) -> [u8; 32] {
    let mut hasher = Sha256::new();

    if !options.ignore_head {
        hasher.update(head_segment(cue));
    }

    if !options.ignore_files {
        hasher.update(files_segment(cue));
    }

    if !options.ignore_tracks {
        hasher.update(titles_segment(cue));
    }

    hasher.update(layout_segment(cue));

    hasher.finalize().into()
}

/// Upper case hex form of [`sign`].
pub fn hex_sign(cue: &Cue, options: SignOptions) -> String {
    hex::encode_upper(sign(cue, options))
}

impl Cue {
    pub fn sign(&self, options: SignOptions) -> [u8; 32] {
        sign(self, options)
    }

    pub fn hex_sign(&self, options: SignOptions) -> String {
        hex_sign(self, options)
    }
}
