use crate::cue::error::SyntaxError;
use binrw::{BinRead, BinWrite};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueSheet {
    pub catalog: String,
    pub cd_text_file: Option<String>,
    pub tags: Tags,
    pub files: Vec<CueFile>,
}

impl CueSheet {
    /// The FILE block new tracks are appended to.
    pub fn last_file_mut(&mut self) -> Result<&mut CueFile, SyntaxError> {
        self.files.last_mut().ok_or(SyntaxError::NoFiles)
    }

    /// The TRACK block that per-track commands apply to.
    pub fn last_track_mut(&mut self) -> Result<&mut Track, SyntaxError> {
        let file = self.last_file_mut()?;
        let path = &file.path;

        match file.tracks.last_mut() {
            Some(track) => Ok(track),
            None => Err(SyntaxError::NoTracks(path.clone())),
        }
    }

    /// Tags of the current track, or of the whole sheet when there is no track yet.
    pub fn current_tags_mut(&mut self) -> &mut Tags {
        match self
            .files
            .last_mut()
            .and_then(|file| file.tracks.last_mut())
        {
            Some(track) => &mut track.tags,
            None => &mut self.tags,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueFile {
    pub path: String,
    pub file_type: FileType,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub number: i32,
    pub track_type: TrackType,
    pub tags: Tags,
    pub isrc: Option<String>,
    pub flags: Vec<Flag>,
    /// All-zero means no PREGAP was given.
    pub pregap: MSF,
    /// All-zero means no POSTGAP was given.
    pub postgap: MSF,
    pub indices: Vec<Index>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BinRead, BinWrite)]
#[serde(default)]
pub struct Index {
    pub number: i32,
    pub position: MSF,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BinRead, BinWrite)]
#[serde(default)]
pub struct MSF {
    pub minute: i32,
    pub second: i32,
    pub frame: i32,
}

impl MSF {
    pub fn new(minute: i32, second: i32, frame: i32) -> Self {
        Self {
            minute,
            second,
            frame,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.minute == 0 && self.second == 0 && self.frame == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tags {
    pub title: Option<String>,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub comment_tags: Vec<CommentTag>,
}

/// A `REM <KEY> <value>` line carrying metadata the format has no command for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentTag {
    pub name: String,
    pub value: String,
}

impl CommentTag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, BinRead, BinWrite,
)]
#[brw(repr = i32)]
pub enum FileType {
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified = 0,
    #[serde(rename = "TYPE_WAVE")]
    Wave = 1,
    #[serde(rename = "TYPE_MP3")]
    Mp3 = 2,
    #[serde(rename = "TYPE_AIFF")]
    Aiff = 3,
    #[serde(rename = "TYPE_BINARY")]
    Binary = 4,
    #[serde(rename = "TYPE_MOTOROLA")]
    Motorola = 5,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, BinRead, BinWrite,
)]
#[brw(repr = i32)]
pub enum TrackType {
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified = 0,
    #[serde(rename = "TYPE_AUDIO")]
    Audio = 1,
    #[serde(rename = "TYPE_CDG")]
    CdG = 2,
    #[serde(rename = "TYPE_MODE1_2048")]
    Mode1_2048 = 3,
    #[serde(rename = "TYPE_MODE1_2352")]
    Mode1_2352 = 4,
    #[serde(rename = "TYPE_MODE2_2336")]
    Mode2_2336 = 5,
    #[serde(rename = "TYPE_MODE2_2352")]
    Mode2_2352 = 6,
    #[serde(rename = "TYPE_CDI_2336")]
    CdI2336 = 7,
    #[serde(rename = "TYPE_CDI_2352")]
    CdI2352 = 8,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, BinRead, BinWrite,
)]
#[brw(repr = i32)]
pub enum Flag {
    #[default]
    #[serde(rename = "FLAG_UNSPECIFIED")]
    Unspecified = 0,
    /// Digital copy permitted
    #[serde(rename = "FLAG_DCP")]
    Dcp = 1,
    /// Four channel audio
    #[serde(rename = "FLAG_4CH")]
    FourChannel = 2,
    /// Pre-emphasis enabled
    #[serde(rename = "FLAG_PRE")]
    Pre = 3,
}
