// src/cue/models
use crate::cd::msf;
use crate::cue::constants::{DEFAULT_FILE_TYPE, DEFAULT_TRACK_TYPE};
use crate::cue::error::{CueError, CueResult};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

/// A parsed CUE sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cue {
    /// Source buffer the sheet was parsed from.
    #[serde(skip)]
    pub data: Vec<u8>,
    /// Encoding `data` was decoded with, empty if the sheet was parsed from text.
    pub encoding: String,
    pub rems: Remarks,
    pub catalog: String,
    pub performer: String,
    pub title: String,
    pub files: Vec<CueFile>,
    pub tracks: Vec<CueTrack>,
}

impl Cue {
    /// Total number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn track(&self, index: usize) -> Option<&CueTrack> {
        self.tracks.get(index)
    }

    /// File a track refers to.
    pub fn file_of(&self, track: &CueTrack) -> Option<&CueFile> {
        self.files.get(track.file)
    }
}

impl Index<usize> for Cue {
    type Output = CueTrack;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tracks[index]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueFile {
    pub name: String,
    pub file_type: String,
}

impl CueFile {
    /// A `WAVE` file.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_type(name, DEFAULT_FILE_TYPE)
    }

    pub fn with_type(name: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_type: file_type.into(),
        }
    }
}

/// Everything a track can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackOptions {
    pub file: usize,
    pub number: String,
    pub track_type: String,
    pub performer: String,
    pub title: String,
    pub isrc: String,
    pub flags: String,
    pub rems: Remarks,
    pub indexes: Vec<CueIndex>,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            file: 0,
            number: String::new(),
            track_type: DEFAULT_TRACK_TYPE.to_string(),
            performer: String::new(),
            title: String::new(),
            isrc: String::new(),
            flags: String::new(),
            rems: Remarks::default(),
            indexes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueTrack {
    /// Position of the track's file in [`Cue::files`].
    pub file: usize,
    /// Track number as written, zero padding included.
    pub number: String,
    pub track_type: String,
    pub performer: String,
    pub title: String,
    pub isrc: String,
    pub flags: String,
    pub rems: Remarks,
    indexes: Vec<CueIndex>,
}

impl CueTrack {
    pub fn new(options: TrackOptions) -> CueResult<Self> {
        if options.indexes.is_empty() {
            return Err(CueError::NoIndexForTrack(options.number));
        }

        Ok(Self {
            file: options.file,
            number: options.number,
            track_type: options.track_type,
            performer: options.performer,
            title: options.title,
            isrc: options.isrc,
            flags: options.flags,
            rems: options.rems,
            indexes: options.indexes,
        })
    }

    /// Never empty.
    pub fn indexes(&self) -> &[CueIndex] {
        &self.indexes
    }

    pub fn index_mut(&mut self, position: usize) -> Option<&mut CueIndex> {
        self.indexes.get_mut(position)
    }

    pub fn push_index(&mut self, index: CueIndex) {
        self.indexes.push(index);
    }

    /// Looks an index up by its name, e.g. `"01"`.
    pub fn find_index(&self, name: &str) -> Option<&CueIndex> {
        self.indexes.iter().find(|index| index.name == name)
    }
}

/// A named position inside a track.
///
/// `frames` and `timestamp` always describe the same position, both setters keep them in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueIndex {
    pub name: String,
    frames: u32,
    timestamp: String,
}

impl CueIndex {
    /// Builds an index from a `MM:SS:FF` timestamp or a bare frame count.
    pub fn new(name: impl Into<String>, timestamp: &str) -> CueResult<Self> {
        Ok(Self::from_frames(name, msf::decode(timestamp)?))
    }

    pub fn from_frames(name: impl Into<String>, frames: u32) -> Self {
        Self {
            name: name.into(),
            frames,
            timestamp: msf::encode(frames),
        }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Canonical `MM:SS:FF` form of [`CueIndex::frames`].
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn set_frames(&mut self, frames: u32) {
        self.frames = frames;
        self.timestamp = msf::encode(frames);
    }

    pub fn set_timestamp(&mut self, timestamp: &str) -> CueResult<()> {
        self.set_frames(msf::decode(timestamp)?);
        Ok(())
    }
}

/// `REM` entries in insertion order. Keys are case sensitive; setting an existing key
/// overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remarks {
    entries: Vec<(String, String)>,
}

impl Remarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, or `""` when the remark is missing.
    pub fn get(&self, key: &str) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Drops every remark and takes over `remarks` instead.
    pub fn replace<K, V>(&mut self, remarks: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.clear();
        for (key, value) in remarks {
            self.set(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Remarks {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut remarks = Remarks::new();
        remarks.replace(iter);
        remarks
    }
}

impl Serialize for Remarks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
