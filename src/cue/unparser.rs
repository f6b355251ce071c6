use crate::cue::error::{UnparseError, UnparseResult};
use crate::cue::grammar::{format_msf, quote_if_needed};
use crate::cue::keywords::{FILE_TYPES, FLAGS, TRACK_TYPES};
use crate::cue::models::{CueFile, CueSheet, Index, Tags, Track};
use std::io::Write;

/// Writes `cue_sheet` as canonical cue sheet text.
///
/// On error, lines written before the failure stay in `out`.
pub fn unparse_cue_sheet(cue_sheet: &CueSheet, out: &mut impl Write) -> UnparseResult<()> {
    unparse_tags(&cue_sheet.tags, out)?;

    if !cue_sheet.catalog.is_empty() {
        writeln!(out, "CATALOG {}", cue_sheet.catalog)?;
    }

    if let Some(cd_text_file) = cue_sheet.cd_text_file.as_deref().filter(|s| !s.is_empty()) {
        writeln!(out, "CDTEXTFILE {}", quote_if_needed(cd_text_file))?;
    }

    for file in &cue_sheet.files {
        unparse_file(file, out)?;
    }

    Ok(())
}

pub fn unparse_cue_sheet_to_string(cue_sheet: &CueSheet) -> UnparseResult<String> {
    let mut out = Vec::new();
    unparse_cue_sheet(cue_sheet, &mut out)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn unparse_tags(tags: &Tags, out: &mut impl Write) -> UnparseResult<()> {
    for tag in &tags.comment_tags {
        writeln!(out, "REM {} {}", tag.name, quote_if_needed(&tag.value))?;
    }

    if let Some(title) = &tags.title {
        writeln!(out, "TITLE {}", quote_if_needed(title))?;
    }

    if let Some(performer) = &tags.performer {
        writeln!(out, "PERFORMER {}", quote_if_needed(performer))?;
    }

    if let Some(songwriter) = &tags.songwriter {
        writeln!(out, "SONGWRITER {}", quote_if_needed(songwriter))?;
    }

    Ok(())
}

fn unparse_file(file: &CueFile, out: &mut impl Write) -> UnparseResult<()> {
    let file_type = FILE_TYPES
        .keyword(file.file_type)
        .ok_or(UnparseError::UnknownFileType(file.file_type))?;

    writeln!(out, "FILE \"{}\" {}", file.path, file_type)?;

    for track in &file.tracks {
        unparse_track(track, out)?;
    }

    Ok(())
}

fn unparse_track(track: &Track, out: &mut impl Write) -> UnparseResult<()> {
    let track_type = TRACK_TYPES
        .keyword(track.track_type)
        .ok_or(UnparseError::UnknownTrackType(track.track_type))?;

    writeln!(out, "TRACK {:02} {}", track.number, track_type)?;

    unparse_tags(&track.tags, out)?;

    if let Some(isrc) = track.isrc.as_deref().filter(|s| !s.is_empty()) {
        writeln!(out, "ISRC {isrc}")?;
    }

    let flags = track
        .flags
        .iter()
        .map(|flag| FLAGS.keyword(*flag).ok_or(UnparseError::UnknownFlag(*flag)))
        .collect::<UnparseResult<Vec<_>>>()?;
    if !flags.is_empty() {
        writeln!(out, "FLAGS {}", flags.join(" "))?;
    }

    if !track.pregap.is_zero() {
        writeln!(out, "PREGAP {}", format_msf(&track.pregap))?;
    }

    if !track.postgap.is_zero() {
        writeln!(out, "POSTGAP {}", format_msf(&track.postgap))?;
    }

    for index in &track.indices {
        unparse_index(index, out)?;
    }

    Ok(())
}

fn unparse_index(index: &Index, out: &mut impl Write) -> UnparseResult<()> {
    writeln!(out, "INDEX {:02} {}", index.number, format_msf(&index.position))?;
    Ok(())
}
