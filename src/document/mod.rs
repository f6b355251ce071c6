use crate::cue::models::CueSheet;
use crate::document::binary::WireCueSheet;
use crate::document::error::DocumentResult;
use binrw::{BinRead, BinWrite};
use clap::ValueEnum;
use std::fmt::Display;
use std::io::Cursor;

pub mod binary;
pub mod error;

/// Encoding of the structured form of a cue sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// Compact little-endian binary records
    #[default]
    Binary,
    /// Human readable JSON
    Text,
}

impl Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Binary => write!(f, "binary"),
            DocumentFormat::Text => write!(f, "text"),
        }
    }
}

pub fn read_document(data: &[u8], format: DocumentFormat) -> DocumentResult<CueSheet> {
    match format {
        DocumentFormat::Binary => {
            let wire = WireCueSheet::read(&mut Cursor::new(data))?;
            wire.decode()
        }
        DocumentFormat::Text => Ok(serde_json::from_slice(data)?),
    }
}

pub fn write_document(cue_sheet: &CueSheet, format: DocumentFormat) -> DocumentResult<Vec<u8>> {
    match format {
        DocumentFormat::Binary => {
            let mut cursor = Cursor::new(Vec::new());
            WireCueSheet::encode(cue_sheet).write(&mut cursor)?;
            Ok(cursor.into_inner())
        }
        DocumentFormat::Text => {
            let mut data = serde_json::to_vec_pretty(cue_sheet)?;
            data.push(b'\n');
            Ok(data)
        }
    }
}
