use crate::convert::error::{ConvertError, ConvertResult};
use crate::cue::models::CueSheet;
use crate::cue::{CueParser, unparse_cue_sheet};
use crate::document::{DocumentFormat, read_document, write_document};
use log::{debug, info};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod error;

/// Parses the cue sheet at `input` and writes its structured document to
/// `output`, or to stdout when no output is given.
pub async fn cue_to_document(
    input: &Path,
    output: Option<PathBuf>,
    format: DocumentFormat,
    force: bool,
) -> ConvertResult<()> {
    ensure_writable(output.as_deref(), force).await?;

    debug!("Parsing cue sheet: {input:?}");
    let data = fs::read(input).await?;
    let cue_sheet = CueParser::parse_reader(Cursor::new(data))?;
    log_summary(&cue_sheet);

    debug!("Encoding document as {format}");
    let document = write_document(&cue_sheet, format)?;

    write_output(output.as_deref(), &document).await?;

    info!("Converted {input:?} to a {format} document");
    Ok(())
}

/// Reads the structured document at `input` and writes it back as cue sheet
/// text to `output`, or to stdout when no output is given.
pub async fn document_to_cue(
    input: &Path,
    output: Option<PathBuf>,
    format: DocumentFormat,
    force: bool,
) -> ConvertResult<()> {
    ensure_writable(output.as_deref(), force).await?;

    debug!("Reading {format} document: {input:?}");
    let data = fs::read(input).await?;
    let cue_sheet = read_document(&data, format)?;
    log_summary(&cue_sheet);

    let mut text = Vec::new();
    unparse_cue_sheet(&cue_sheet, &mut text)?;

    write_output(output.as_deref(), &text).await?;

    info!("Converted {input:?} to a cue sheet");
    Ok(())
}

async fn ensure_writable(output: Option<&Path>, force: bool) -> ConvertResult<()> {
    let Some(output) = output else {
        return Ok(());
    };

    if fs::metadata(output).await.is_ok() && !force {
        return Err(ConvertError::OutputFileAlreadyExists(output.to_path_buf()));
    }

    Ok(())
}

async fn write_output(output: Option<&Path>, data: &[u8]) -> ConvertResult<()> {
    match output {
        Some(path) => {
            debug!("Writing {} bytes to {path:?}", data.len());
            fs::write(path, data).await?;
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(data).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

fn log_summary(cue_sheet: &CueSheet) {
    let tracks: usize = cue_sheet.files.iter().map(|file| file.tracks.len()).sum();
    debug!(
        "Cue sheet has {} file(s) and {} track(s)",
        cue_sheet.files.len(),
        tracks
    );
}
