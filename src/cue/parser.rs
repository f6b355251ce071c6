use crate::cue::error::{CueError, CueResult, SyntaxError, SyntaxResult};
use crate::cue::grammar::{
    parse_int, parse_lenient_string, parse_msf, parse_optionally_quoted, parse_quoted,
    split_token,
};
use crate::cue::keywords::{FILE_TYPES, FLAGS, TRACK_TYPES};
use crate::cue::models::{CommentTag, CueFile, CueSheet, Index, Track};
use lazy_static::lazy_static;
use log::{debug, trace};
use std::collections::HashMap;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Catalog,
    CdTextFile,
    File,
    Flags,
    Index,
    Isrc,
    Performer,
    Postgap,
    Pregap,
    Rem,
    Songwriter,
    Title,
    Track,
}

lazy_static! {
    static ref COMMANDS: HashMap<&'static str, Command> = HashMap::from([
        ("CATALOG", Command::Catalog),
        ("CDTEXTFILE", Command::CdTextFile),
        ("FILE", Command::File),
        ("FLAGS", Command::Flags),
        ("INDEX", Command::Index),
        ("ISRC", Command::Isrc),
        ("PERFORMER", Command::Performer),
        ("POSTGAP", Command::Postgap),
        ("PREGAP", Command::Pregap),
        ("REM", Command::Rem),
        ("SONGWRITER", Command::Songwriter),
        ("TITLE", Command::Title),
        ("TRACK", Command::Track),
    ]);
}

#[derive(Debug, Clone, Copy)]
enum TagField {
    Title,
    Performer,
    Songwriter,
}

/// Builds a [`CueSheet`] from cue sheet text in a single forward pass.
#[derive(Debug, Default)]
pub struct CueParser {
    cue_sheet: CueSheet,
}

impl CueParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an already split sequence of lines. Line numbers in errors are 1-based.
    pub fn parse_lines<I, S>(lines: I) -> CueResult<CueSheet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Self::new();

        for (idx, line) in lines.into_iter().enumerate() {
            parser
                .parse_line(line.as_ref())
                .map_err(|error| CueError::Syntax {
                    line: idx + 1,
                    error,
                })?;
        }

        Ok(parser.finish())
    }

    pub fn parse_reader(reader: impl BufRead) -> CueResult<CueSheet> {
        let mut parser = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            parser.parse_line(&line).map_err(|error| CueError::Syntax {
                line: idx + 1,
                error,
            })?;
        }

        Ok(parser.finish())
    }

    pub fn parse_str(input: &str) -> CueResult<CueSheet> {
        Self::parse_lines(input.lines())
    }

    /// The document built so far.
    pub fn cue_sheet(&self) -> &CueSheet {
        &self.cue_sheet
    }

    pub fn finish(self) -> CueSheet {
        self.cue_sheet
    }

    pub fn parse_line(&mut self, line: &str) -> SyntaxResult<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let (command, rest) = split_token(line);
        let Some(&command_kind) = COMMANDS.get(command) else {
            return Err(SyntaxError::InvalidCommand(command.to_string()));
        };

        trace!("Dispatching {command} with '{rest}'");

        match command_kind {
            Command::Catalog => self.parse_catalog(rest),
            Command::CdTextFile => self.parse_cd_text_file(rest),
            Command::File => self.parse_file(rest),
            Command::Flags => self.parse_flags(rest),
            Command::Index => self.parse_index(rest),
            Command::Isrc => self.parse_isrc(rest),
            Command::Performer => self.parse_tag(TagField::Performer, rest),
            Command::Postgap => self.parse_postgap(rest),
            Command::Pregap => self.parse_pregap(rest),
            Command::Rem => self.parse_comment(rest),
            Command::Songwriter => self.parse_tag(TagField::Songwriter, rest),
            Command::Title => self.parse_tag(TagField::Title, rest),
            Command::Track => self.parse_track(rest),
        }
    }

    fn parse_catalog(&mut self, rest: &str) -> SyntaxResult<()> {
        self.cue_sheet.catalog = rest.to_string();
        Ok(())
    }

    fn parse_cd_text_file(&mut self, rest: &str) -> SyntaxResult<()> {
        let value = parse_optionally_quoted(rest)?;
        self.cue_sheet.cd_text_file = Some(value.to_string());
        Ok(())
    }

    fn parse_file(&mut self, rest: &str) -> SyntaxResult<()> {
        let (path, type_str) = if rest.starts_with('"') {
            parse_quoted(rest)?
        } else {
            split_token(rest)
        };
        let type_str = type_str.trim();

        let file_type = FILE_TYPES
            .parse(type_str)
            .ok_or_else(|| SyntaxError::UnknownFileType(type_str.to_string()))?;

        self.cue_sheet.files.push(CueFile {
            path: path.to_string(),
            file_type,
            tracks: Vec::new(),
        });

        Ok(())
    }

    fn parse_track(&mut self, rest: &str) -> SyntaxResult<()> {
        let file = self.cue_sheet.last_file_mut()?;

        let (number_str, type_str) = split_token(rest);
        let number = parse_int(number_str)?;
        let track_type = TRACK_TYPES
            .parse(type_str)
            .ok_or_else(|| SyntaxError::UnknownTrackType(type_str.to_string()))?;

        file.tracks.push(Track {
            number,
            track_type,
            ..Default::default()
        });

        Ok(())
    }

    fn parse_index(&mut self, rest: &str) -> SyntaxResult<()> {
        let track = self.cue_sheet.last_track_mut()?;

        let (number_str, msf_str) = split_token(rest);
        let number = parse_int(number_str)?;
        let position = parse_msf(msf_str)?;

        track.indices.push(Index { number, position });

        Ok(())
    }

    fn parse_isrc(&mut self, rest: &str) -> SyntaxResult<()> {
        let track = self.cue_sheet.last_track_mut()?;
        track.isrc = Some(rest.to_string());
        Ok(())
    }

    fn parse_flags(&mut self, rest: &str) -> SyntaxResult<()> {
        let track = self.cue_sheet.last_track_mut()?;

        let flags = rest
            .split_whitespace()
            .map(|flag| {
                FLAGS
                    .parse(flag)
                    .ok_or_else(|| SyntaxError::UnknownFlag(flag.to_string()))
            })
            .collect::<SyntaxResult<Vec<_>>>()?;

        track.flags.extend(flags);

        Ok(())
    }

    fn parse_pregap(&mut self, rest: &str) -> SyntaxResult<()> {
        let msf = parse_msf(rest)?;
        self.cue_sheet.last_track_mut()?.pregap = msf;
        Ok(())
    }

    fn parse_postgap(&mut self, rest: &str) -> SyntaxResult<()> {
        let msf = parse_msf(rest)?;
        self.cue_sheet.last_track_mut()?.postgap = msf;
        Ok(())
    }

    fn parse_tag(&mut self, field: TagField, rest: &str) -> SyntaxResult<()> {
        let value = Some(parse_optionally_quoted(rest)?.to_string());
        let tags = self.cue_sheet.current_tags_mut();

        match field {
            TagField::Title => tags.title = value,
            TagField::Performer => tags.performer = value,
            TagField::Songwriter => tags.songwriter = value,
        }

        Ok(())
    }

    /// `REM <KEY> <value>` with an all-uppercase key is kept as a comment tag,
    /// everything else is an ordinary comment and dropped.
    fn parse_comment(&mut self, rest: &str) -> SyntaxResult<()> {
        let (key, value) = split_token(rest);

        if value.is_empty() || !key.chars().all(|c| c.is_ascii_uppercase()) {
            debug!("Skipping comment: {rest}");
            return Ok(());
        }

        let value = parse_lenient_string(value);
        self.cue_sheet
            .current_tags_mut()
            .comment_tags
            .push(CommentTag::new(key, value));

        Ok(())
    }
}
