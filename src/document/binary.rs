use crate::cue::models::{CommentTag, CueFile, CueSheet, FileType, Flag, Index, MSF, Tags, Track, TrackType};
use crate::document::error::{DocumentError, DocumentResult};
use binrw::binrw;

pub const DOCUMENT_VERSION: u16 = 1;

/// Binary document layout. All integers are little-endian, every sequence is
/// preceded by its element count and every string by its byte length.
#[binrw]
#[brw(little, magic = b"CUE\0")]
#[derive(Debug, Clone, PartialEq)]
pub struct WireCueSheet {
    pub version: u16,
    pub catalog: WireString,
    pub cd_text_file: WireOptionalString,
    pub tags: WireTags,

    #[bw(calc = files.len() as u32)]
    #[br(temp)]
    file_count: u32,

    #[br(count = file_count)]
    pub files: Vec<WireFile>,
}

#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct WireString {
    #[bw(calc = bytes.len() as u32)]
    #[br(temp)]
    len: u32,

    #[br(count = len)]
    pub bytes: Vec<u8>,
}

#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct WireOptionalString {
    #[bw(calc = value.is_some() as u8)]
    #[br(temp)]
    present: u8,

    #[br(if(present != 0))]
    pub value: Option<WireString>,
}

#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct WireTags {
    pub title: WireOptionalString,
    pub performer: WireOptionalString,
    pub songwriter: WireOptionalString,

    #[bw(calc = comment_tags.len() as u32)]
    #[br(temp)]
    comment_tag_count: u32,

    #[br(count = comment_tag_count)]
    pub comment_tags: Vec<WireCommentTag>,
}

#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct WireCommentTag {
    pub name: WireString,
    pub value: WireString,
}

#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct WireFile {
    pub path: WireString,
    pub file_type: FileType,

    #[bw(calc = tracks.len() as u32)]
    #[br(temp)]
    track_count: u32,

    #[br(count = track_count)]
    pub tracks: Vec<WireTrack>,
}

#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct WireTrack {
    pub number: i32,
    pub track_type: TrackType,
    pub tags: WireTags,
    pub isrc: WireOptionalString,

    #[bw(calc = flags.len() as u32)]
    #[br(temp)]
    flag_count: u32,

    #[br(count = flag_count)]
    pub flags: Vec<Flag>,

    pub pregap: MSF,
    pub postgap: MSF,

    #[bw(calc = indices.len() as u32)]
    #[br(temp)]
    index_count: u32,

    #[br(count = index_count)]
    pub indices: Vec<Index>,
}

impl WireString {
    fn encode(value: &str) -> Self {
        Self {
            bytes: value.as_bytes().to_vec(),
        }
    }

    fn decode(self) -> DocumentResult<String> {
        Ok(String::from_utf8(self.bytes)?)
    }
}

impl WireOptionalString {
    fn encode(value: Option<&str>) -> Self {
        Self {
            value: value.map(WireString::encode),
        }
    }

    fn decode(self) -> DocumentResult<Option<String>> {
        self.value.map(WireString::decode).transpose()
    }
}

impl WireTags {
    fn encode(tags: &Tags) -> Self {
        Self {
            title: WireOptionalString::encode(tags.title.as_deref()),
            performer: WireOptionalString::encode(tags.performer.as_deref()),
            songwriter: WireOptionalString::encode(tags.songwriter.as_deref()),
            comment_tags: tags
                .comment_tags
                .iter()
                .map(|tag| WireCommentTag {
                    name: WireString::encode(&tag.name),
                    value: WireString::encode(&tag.value),
                })
                .collect(),
        }
    }

    fn decode(self) -> DocumentResult<Tags> {
        let comment_tags = self
            .comment_tags
            .into_iter()
            .map(|tag| -> DocumentResult<CommentTag> {
                Ok(CommentTag::new(tag.name.decode()?, tag.value.decode()?))
            })
            .collect::<DocumentResult<Vec<_>>>()?;

        Ok(Tags {
            title: self.title.decode()?,
            performer: self.performer.decode()?,
            songwriter: self.songwriter.decode()?,
            comment_tags,
        })
    }
}

impl WireTrack {
    fn encode(track: &Track) -> Self {
        Self {
            number: track.number,
            track_type: track.track_type,
            tags: WireTags::encode(&track.tags),
            isrc: WireOptionalString::encode(track.isrc.as_deref()),
            flags: track.flags.clone(),
            pregap: track.pregap,
            postgap: track.postgap,
            indices: track.indices.clone(),
        }
    }

    fn decode(self) -> DocumentResult<Track> {
        Ok(Track {
            number: self.number,
            track_type: self.track_type,
            tags: self.tags.decode()?,
            isrc: self.isrc.decode()?,
            flags: self.flags,
            pregap: self.pregap,
            postgap: self.postgap,
            indices: self.indices,
        })
    }
}

impl WireFile {
    fn encode(file: &CueFile) -> Self {
        Self {
            path: WireString::encode(&file.path),
            file_type: file.file_type,
            tracks: file.tracks.iter().map(WireTrack::encode).collect(),
        }
    }

    fn decode(self) -> DocumentResult<CueFile> {
        Ok(CueFile {
            path: self.path.decode()?,
            file_type: self.file_type,
            tracks: self
                .tracks
                .into_iter()
                .map(WireTrack::decode)
                .collect::<DocumentResult<Vec<_>>>()?,
        })
    }
}

impl WireCueSheet {
    pub fn encode(cue_sheet: &CueSheet) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            catalog: WireString::encode(&cue_sheet.catalog),
            cd_text_file: WireOptionalString::encode(cue_sheet.cd_text_file.as_deref()),
            tags: WireTags::encode(&cue_sheet.tags),
            files: cue_sheet.files.iter().map(WireFile::encode).collect(),
        }
    }

    pub fn decode(self) -> DocumentResult<CueSheet> {
        if self.version != DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion(self.version));
        }

        Ok(CueSheet {
            catalog: self.catalog.decode()?,
            cd_text_file: self.cd_text_file.decode()?,
            tags: self.tags.decode()?,
            files: self
                .files
                .into_iter()
                .map(WireFile::decode)
                .collect::<DocumentResult<Vec<_>>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binrw::{BinRead, BinReaderExt, BinWriterExt};
    use std::io::Cursor;

    fn write(wire: &WireCueSheet) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        cursor.write_le(wire).unwrap();
        cursor.into_inner()
    }

    fn one_track_sheet() -> CueSheet {
        CueSheet {
            files: vec![CueFile {
                path: "a.bin".to_string(),
                file_type: FileType::Binary,
                tracks: vec![Track {
                    number: 1,
                    track_type: TrackType::CdI2352,
                    flags: vec![Flag::Pre, Flag::Dcp],
                    indices: vec![Index {
                        number: 1,
                        position: MSF::new(0, 2, 74),
                    }],
                    ..Default::default()
                }],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn empty_sheet_layout() {
        let bytes = write(&WireCueSheet::encode(&CueSheet::default()));

        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            b'C', b'U', b'E', 0,
            1, 0,                   // version
            0, 0, 0, 0,             // catalog length
            0,                      // cd_text_file absent
            0, 0, 0,                // title, performer, songwriter absent
            0, 0, 0, 0,             // comment tag count
            0, 0, 0, 0,             // file count
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn optional_string_layout() {
        let sheet = CueSheet {
            cd_text_file: Some("ab".to_string()),
            ..Default::default()
        };
        let bytes = write(&WireCueSheet::encode(&sheet));
        assert_eq!(&bytes[10..17], &[1, 2, 0, 0, 0, b'a', b'b']);
    }

    #[test]
    fn counts_are_derived_from_contents() {
        let bytes = write(&WireCueSheet::encode(&one_track_sheet()));

        // header, empty catalog, absent cd_text_file and sheet tags
        let file = &bytes[18..];
        assert_eq!(&file[..4], &[1, 0, 0, 0]); // file count
        assert_eq!(&file[4..13], &[5, 0, 0, 0, b'a', b'.', b'b', b'i', b'n']);
        assert_eq!(&file[13..17], &[4, 0, 0, 0]); // FileType::Binary
        assert_eq!(&file[17..21], &[1, 0, 0, 0]); // track count

        let track = &file[21..];
        assert_eq!(&track[4..8], &[8, 0, 0, 0]); // TrackType::CdI2352
        // tags (3 absent + 4 count) and absent isrc
        let flags = &track[16..];
        assert_eq!(&flags[..12], &[2, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0]);
        // pregap and postgap
        let indices = &flags[36..];
        assert_eq!(&indices[..4], &[1, 0, 0, 0]); // index count
        assert_eq!(indices.len(), 4 + 16);
    }

    #[test]
    fn wire_round_trip_keeps_enums() {
        let sheet = one_track_sheet();
        let bytes = write(&WireCueSheet::encode(&sheet));
        let wire = WireCueSheet::read(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(wire.decode().unwrap(), sheet);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = write(&WireCueSheet::encode(&CueSheet::default()));
        bytes[0] = b'X';
        assert!(WireCueSheet::read(&mut Cursor::new(bytes)).is_err());
    }

    #[test]
    fn rejects_other_versions() {
        let mut bytes = write(&WireCueSheet::encode(&CueSheet::default()));
        bytes[4] = 2;
        let wire = WireCueSheet::read(&mut Cursor::new(bytes)).unwrap();
        assert!(matches!(
            wire.decode(),
            Err(DocumentError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn rejects_unknown_enum_numbers() {
        let mut cursor = Cursor::new(9i32.to_le_bytes());
        assert!(matches!(
            cursor.read_le::<FileType>(),
            Err(binrw::Error::NoVariantMatch { .. })
        ));

        let mut cursor = Cursor::new((-1i32).to_le_bytes());
        assert!(cursor.read_le::<TrackType>().is_err());

        let mut cursor = Cursor::new(4i32.to_le_bytes());
        assert!(cursor.read_le::<Flag>().is_err());
    }

    #[test]
    fn unknown_enum_number_in_document_fails_to_read() {
        let mut bytes = write(&WireCueSheet::encode(&one_track_sheet()));
        // FileType of the first file
        bytes[18 + 13] = 42;
        assert!(WireCueSheet::read(&mut Cursor::new(bytes)).is_err());
    }

    #[test]
    fn enum_numbers_match_discriminants() {
        for (file_type, value) in [(FileType::Unspecified, 0), (FileType::Motorola, 5)] {
            let mut cursor = Cursor::new(Vec::new());
            cursor.write_le(&file_type).unwrap();
            assert_eq!(cursor.into_inner(), (value as i32).to_le_bytes());
        }

        let mut cursor = Cursor::new(7i32.to_le_bytes());
        assert_eq!(cursor.read_le::<TrackType>().unwrap(), TrackType::CdI2336);

        let mut cursor = Cursor::new(2i32.to_le_bytes());
        assert_eq!(cursor.read_le::<Flag>().unwrap(), Flag::FourChannel);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let wire = WireString {
            bytes: vec![0xC3, 0x28],
        };
        assert!(matches!(wire.decode(), Err(DocumentError::InvalidUtf8(_))));
    }
}
