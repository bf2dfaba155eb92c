use crate::cue::models::Cue;
use serde::Serialize;

pub const NO_FILES: &str = "no file(s)";
pub const NO_TRACKS: &str = "no track(s)";
pub const NO_PERFORMER: &str = "no performer (head)";
pub const NO_TITLE: &str = "no title (head)";
pub const NO_GENRE: &str = "no genre";
pub const NO_DATE: &str = "no date";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Layout of the sheet: one image file, one file per track, both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub image: bool,
    pub tracks: bool,
}

pub fn check(cue: &Cue) -> CheckReport {
    let mut report = CheckReport::default();

    for (missing, message) in [
        (cue.files.is_empty(), NO_FILES),
        (cue.tracks.is_empty(), NO_TRACKS),
        (cue.performer.is_empty(), NO_PERFORMER),
        (cue.title.is_empty(), NO_TITLE),
    ] {
        if missing {
            report.errors.push(message.to_string());
        }
    }

    for (key, message) in [("GENRE", NO_GENRE), ("DATE", NO_DATE)] {
        if cue.rems.get(key).is_empty() {
            report.warnings.push(message.to_string());
        }
    }

    report
}

pub fn classify(cue: &Cue) -> Classification {
    Classification {
        image: cue.is_image(),
        tracks: cue.is_tracks(),
    }
}

impl Cue {
    /// Exactly one file backs every track.
    pub fn is_image(&self) -> bool {
        self.files.len() == 1
    }

    /// One file per track.
    pub fn is_tracks(&self) -> bool {
        self.files.len() == self.tracks.len()
    }

    pub fn check(&self) -> CheckReport {
        check(self)
    }
}
