use crate::cue::constants::{
    ATTRIBUTE_INDENT, BOM_UTF8, BOM_UTF16BE, BOM_UTF16LE, DEFAULT_ENCODING, TRACK_INDENT,
};
use crate::cue::encoding::{encoding_name, lookup};
use crate::cue::error::{CueError, CueResult};
use crate::cue::models::Cue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Encoding label of the output.
    pub encoding: String,
    /// Prefix the output with the byte order mark of `encoding`.
    pub bom: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            bom: true,
        }
    }
}

/// BOM prefix for an encoding label and the label the body gets encoded with.
///
/// The prefix is picked from the requested label only, it is not derived from the encoder
/// actually used for the body. Asking for e.g. `utf-8` with a body encoder that produces
/// something else would yield a BOM that does not match the bytes following it.
fn bom_prefix(encoding: &str) -> (&'static [u8], String) {
    let label = encoding.trim().to_ascii_lowercase();

    match label.as_str() {
        "utf-8" => (&BOM_UTF8[..], label),
        "utf-16le" => (&BOM_UTF16LE[..], label),
        "utf-16be" => (&BOM_UTF16BE[..], label),
        "utf-16" => (&BOM_UTF16LE[..], "utf-16le".to_string()),
        _ => (&[][..], label),
    }
}

fn encode_body(text: &str, label: &str) -> CueResult<Vec<u8>> {
    match label {
        "utf-16le" => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        "utf-16be" => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
        // the bare label behaves like a UTF-16 codec and writes its own (little endian) mark
        "utf-16" => Ok(BOM_UTF16LE
            .into_iter()
            .chain(text.encode_utf16().flat_map(u16::to_le_bytes))
            .collect()),
        _ => {
            let encoding = lookup(label)?;
            let (bytes, used, unmappable) = encoding.encode(text);
            if unmappable || used != encoding {
                return Err(CueError::EncodingError(encoding_name(encoding)));
            }
            Ok(bytes.into_owned())
        }
    }
}

/// Renders the lines of a sheet, ending with an empty line.
pub fn render_lines(cue: &Cue) -> CueResult<Vec<String>> {
    let mut out = Vec::new();

    for (key, value) in cue.rems.iter() {
        out.push(format!("REM {key} \"{value}\""));
    }

    for (keyword, value) in [
        ("CATALOG", &cue.catalog),
        ("PERFORMER", &cue.performer),
        ("TITLE", &cue.title),
    ] {
        if !value.is_empty() {
            out.push(format!("{keyword} \"{value}\""));
        }
    }

    let mut current_file = None;

    for track in &cue.tracks {
        if current_file != Some(track.file) {
            let file = cue
                .file_of(track)
                .ok_or_else(|| CueError::NoFileForTrack(track.number.clone()))?;
            out.push(format!("FILE \"{}\" {}", file.name, file.file_type));
            current_file = Some(track.file);
        }

        out.push(format!(
            "{TRACK_INDENT}TRACK {} {}",
            track.number, track.track_type
        ));

        for (keyword, value) in [
            ("TITLE", &track.title),
            ("PERFORMER", &track.performer),
            ("ISRC", &track.isrc),
        ] {
            if !value.is_empty() {
                out.push(format!("{ATTRIBUTE_INDENT}{keyword} \"{value}\""));
            }
        }

        if !track.flags.is_empty() {
            out.push(format!("{ATTRIBUTE_INDENT}FLAGS {}", track.flags));
        }

        for index in track.indexes() {
            out.push(format!(
                "{ATTRIBUTE_INDENT}INDEX {} {}",
                index.name,
                index.timestamp()
            ));
        }

        for (key, value) in track.rems.iter() {
            out.push(format!("{ATTRIBUTE_INDENT}REM {key} \"{value}\""));
        }
    }

    out.push(String::new());

    Ok(out)
}

/// Serializes `cue` into `encoding`, optionally prefixed with a byte order mark.
pub fn dumps(cue: &Cue, encoding: &str, bom: bool) -> CueResult<Vec<u8>> {
    let text = render_lines(cue)?.join("\n");

    let (prefix, label) = if bom {
        bom_prefix(encoding)
    } else {
        (&[][..], encoding.trim().to_ascii_lowercase())
    };

    let mut out = prefix.to_vec();
    out.extend(encode_body(&text, &label)?);

    Ok(out)
}

impl Cue {
    pub fn dumps(&self, options: &WriteOptions) -> CueResult<Vec<u8>> {
        dumps(self, &options.encoding, options.bom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::models::{CueFile, CueIndex, CueTrack, TrackOptions};
    use crate::cue::parser::parse_str;

    fn track(file: usize, number: &str, frames: u32) -> CueTrack {
        CueTrack::new(TrackOptions {
            file,
            number: number.to_string(),
            indexes: vec![CueIndex::from_frames("01", frames)],
            ..Default::default()
        })
        .unwrap()
    }

    fn two_file_cue() -> Cue {
        let mut cue = Cue {
            performer: "Artist".to_string(),
            title: "Album".to_string(),
            files: vec![CueFile::new("01.wav"), CueFile::new("02.wav")],
            tracks: vec![track(0, "01", 0), track(1, "02", 0)],
            ..Default::default()
        };
        cue.rems.set("GENRE", "Rock");
        cue.tracks[0].title = "One".to_string();
        cue.tracks[0].flags = "DCP".to_string();
        cue.tracks[1].rems.set("COMMENT", "x");
        cue
    }

    #[test]
    fn dumps_two_file_sheet_byte_exact() {
        let expected = "REM GENRE \"Rock\"\n\
                        PERFORMER \"Artist\"\n\
                        TITLE \"Album\"\n\
                        FILE \"01.wav\" WAVE\n  \
                        TRACK 01 AUDIO\n    \
                        TITLE \"One\"\n    \
                        FLAGS DCP\n    \
                        INDEX 01 00:00:00\n\
                        FILE \"02.wav\" WAVE\n  \
                        TRACK 02 AUDIO\n    \
                        INDEX 01 00:00:00\n    \
                        REM COMMENT \"x\"\n";

        let out = dumps(&two_file_cue(), "utf-8", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn file_line_is_written_once_per_run_of_tracks() {
        let text = "TITLE \"x\"\nFILE \"a.wav\" WAVE\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n  TRACK 02 AUDIO\n    INDEX 01 03:00:00\n";
        let lines = render_lines(&parse_str(text).unwrap()).unwrap();

        assert_eq!(lines.iter().filter(|l| l.starts_with("FILE ")).count(), 1);
        assert_eq!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn dumps_then_parse_keeps_the_document() {
        let cue = two_file_cue();
        let reparsed = parse_str(&String::from_utf8(dumps(&cue, "utf-8", false).unwrap()).unwrap())
            .unwrap();

        assert_eq!(reparsed.files, cue.files);
        assert_eq!(reparsed.rems, cue.rems);
        assert_eq!(reparsed[0].title, "One");
        assert_eq!(reparsed[1].rems.get("COMMENT"), "x");
    }

    #[test]
    fn bom_table() {
        let cue = two_file_cue();

        assert!(dumps(&cue, "UTF-8", true).unwrap().starts_with(&BOM_UTF8));
        assert!(!dumps(&cue, "utf-8", false).unwrap().starts_with(&BOM_UTF8));
        assert!(
            !dumps(&cue, "windows-1251", true)
                .unwrap()
                .starts_with(&BOM_UTF8)
        );

        let be = dumps(&cue, "utf-16be", true).unwrap();
        assert_eq!(&be[..4], &[0xFE, 0xFF, 0x00, b'R']);

        let le = dumps(&cue, "utf-16le", true).unwrap();
        assert_eq!(&le[..4], &[0xFF, 0xFE, b'R', 0x00]);
    }

    #[test]
    fn plain_utf16_aliases_little_endian() {
        let cue = two_file_cue();

        let with_bom = dumps(&cue, "utf-16", true).unwrap();
        assert_eq!(with_bom, dumps(&cue, "utf-16le", true).unwrap());

        // the codec itself adds a mark when no BOM is requested
        let without_bom = dumps(&cue, "utf-16", false).unwrap();
        assert_eq!(with_bom, without_bom);
    }

    #[test]
    fn unmappable_characters_fail() {
        let mut cue = two_file_cue();
        cue.title = "日本".to_string();

        assert_eq!(
            dumps(&cue, "windows-1251", false),
            Err(CueError::EncodingError("windows-1251".to_string()))
        );
    }

    #[test]
    fn encodes_single_byte_charsets() {
        let mut cue = two_file_cue();
        cue.performer = "Кино".to_string();

        let out = cue
            .dumps(&WriteOptions {
                encoding: "cp1251".to_string(),
                bom: true,
            })
            .unwrap();
        assert!(out.windows(4).any(|w| w == [0xCA, 0xE8, 0xED, 0xEE]));
    }

    #[test]
    fn dangling_file_reference_is_an_error() {
        let mut cue = two_file_cue();
        cue.tracks[1].file = 7;

        assert_eq!(
            render_lines(&cue),
            Err(CueError::NoFileForTrack("02".to_string()))
        );
    }
}
