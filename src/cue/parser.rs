use crate::cue::constants::DEFAULT_ENCODING;
use crate::cue::encoding::{RawCue, resolve};
use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{Cue, CueFile, CueIndex, CueTrack, TrackOptions};
use crate::cue::text::{attribute, file_fields, token};
use log::{debug, trace};
use std::mem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Encoding label used when detection is off or inconclusive.
    pub default_encoding: String,
    /// Skip detection and always decode with `default_encoding`.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_encoding: DEFAULT_ENCODING.to_string(),
            strict: false,
        }
    }
}

pub struct CueParser {
    options: ParseOptions,
}

impl CueParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn parse(&self, buffer: &[u8]) -> CueResult<Cue> {
        parse(buffer, &self.options)
    }

    pub fn parse_str(&self, text: &str) -> CueResult<Cue> {
        parse_str(text)
    }
}

/// Lines of one `TRACK` block, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackGroup {
    pub number: String,
    pub track_type: String,
    /// Most recently declared file when the `TRACK` line was read.
    pub file: Option<usize>,
    pub lines: Vec<String>,
}

/// Output of the first parser pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineGroups {
    pub head: Vec<String>,
    pub files: Vec<CueFile>,
    pub tracks: Vec<TrackGroup>,
}

impl LineGroups {
    fn close(&mut self, group: TrackGroup) {
        // a TRACK line followed by nothing but another TRACK line is dropped
        if !group.lines.is_empty() {
            self.tracks.push(group);
        }
    }
}

enum GroupState {
    Head,
    InTrack(TrackGroup),
}

/// Sorts the lines of a sheet into head lines, files and per track groups.
pub fn group_lines(text: &str) -> CueResult<LineGroups> {
    let mut groups = LineGroups::default();
    let mut state = GroupState::Head;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("TRACK ") {
            if let GroupState::InTrack(group) = mem::replace(&mut state, GroupState::Head) {
                groups.close(group);
            }

            let mut id = attribute("TRACK", line, ' ', 2)?.into_iter();
            let (Some(number), Some(track_type)) = (id.next(), id.next()) else {
                return Err(CueError::MalformedAttribute {
                    keyword: "TRACK".to_string(),
                    line: line.to_string(),
                });
            };

            trace!("Track {number} starts");
            state = GroupState::InTrack(TrackGroup {
                number,
                track_type,
                file: groups.files.len().checked_sub(1),
                lines: Vec::new(),
            });
        } else if line.starts_with("FILE ") {
            let (name, file_type) = file_fields(line)?;
            trace!("File {name} ({file_type})");
            groups.files.push(CueFile::with_type(name, file_type));
        } else {
            match &mut state {
                GroupState::Head => groups.head.push(line.to_string()),
                GroupState::InTrack(group) => group.lines.push(line.to_string()),
            }
        }
    }

    if let GroupState::InTrack(group) = state {
        groups.close(group);
    }

    if groups.head.is_empty() {
        return Err(CueError::EmptyHead);
    }

    if groups.files.is_empty() {
        return Err(CueError::NoFiles);
    }

    if groups.tracks.is_empty() {
        return Err(CueError::NoTracks);
    }

    Ok(groups)
}

/// Builds a document from its head lines.
pub fn parse_head(lines: &[String]) -> CueResult<Cue> {
    let mut cue = Cue::default();

    for line in lines {
        let (keyword, rest) = token(line)?;

        match keyword.as_str() {
            "PERFORMER" => cue.performer = rest,
            "TITLE" => cue.title = rest,
            "CATALOG" => cue.catalog = rest,
            "REM" => {
                let (name, value) = token(&rest)?;
                cue.rems.set(name, value);
            }
            _ => return Err(CueError::UnknownAttribute(keyword)),
        }
    }

    Ok(cue)
}

/// Resolves one track group. `cue` supplies the performer fallback.
pub fn parse_track(cue: &Cue, group: &TrackGroup) -> CueResult<CueTrack> {
    let file = group
        .file
        .ok_or_else(|| CueError::NoFileForTrack(group.number.clone()))?;

    let mut options = TrackOptions {
        file,
        number: group.number.clone(),
        track_type: group.track_type.clone(),
        ..Default::default()
    };

    for line in &group.lines {
        let (keyword, rest) = token(line)?;

        match keyword.as_str() {
            "PERFORMER" => options.performer = rest,
            "TITLE" => options.title = rest,
            "ISRC" => options.isrc = rest,
            "FLAGS" => options.flags = rest,
            "INDEX" => {
                let (name, timestamp) = token(&rest)?;
                options.indexes.push(CueIndex::new(name, &timestamp)?);
            }
            "REM" => {
                let (name, value) = token(&rest)?;
                options.rems.set(name, value);
            }
            _ => return Err(CueError::UnknownAttribute(keyword)),
        }
    }

    if options.performer.is_empty() {
        options.performer = cue.performer.clone();
    }

    CueTrack::new(options)
}

fn parse_text(text: &str) -> CueResult<Cue> {
    let groups = group_lines(text)?;
    debug!(
        "Grouped {} head lines, {} files, {} tracks",
        groups.head.len(),
        groups.files.len(),
        groups.tracks.len()
    );

    let mut cue = parse_head(&groups.head)?;
    cue.tracks = groups
        .tracks
        .iter()
        .map(|group| parse_track(&cue, group))
        .collect::<CueResult<Vec<_>>>()?;
    cue.files = groups.files;

    Ok(cue)
}

/// Parses a raw `.cue` buffer. The buffer and the encoding it was decoded with are kept on
/// the returned document.
pub fn parse(buffer: &[u8], options: &ParseOptions) -> CueResult<Cue> {
    let (text, encoding) = resolve(
        RawCue::Bytes(buffer),
        &options.default_encoding,
        options.strict,
    )?;

    let mut cue = parse_text(&text)?;
    cue.data = buffer.to_vec();
    cue.encoding = encoding;

    Ok(cue)
}

/// Parses an already decoded sheet.
pub fn parse_str(text: &str) -> CueResult<Cue> {
    let (text, encoding) = resolve(RawCue::Text(text), DEFAULT_ENCODING, true)?;

    let mut cue = parse_text(&text)?;
    cue.data = text.as_bytes().to_vec();
    cue.encoding = encoding;

    Ok(cue)
}
