use crate::cue::error::{SyntaxError, SyntaxResult};
use crate::cue::models::MSF;

/// Splits `input` once on its first run of whitespace.
///
/// The second half has its leading whitespace removed and is empty when
/// `input` holds a single token.
pub fn split_token(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (input, ""),
    }
}

/// Reads a `"`-quoted string from the start of `input`.
///
/// Returns the text between the quotes and whatever follows the closing
/// quote. A quote preceded by a backslash does not close the string, and the
/// backslash is kept as part of the value.
pub fn parse_quoted(input: &str) -> SyntaxResult<(&str, &str)> {
    let bytes = input.as_bytes();
    debug_assert_eq!(bytes.first(), Some(&b'"'));

    let close = (1..bytes.len()).find(|&i| bytes[i] == b'"' && bytes[i - 1] != b'\\');

    match close {
        Some(close) => Ok((&input[1..close], &input[close + 1..])),
        None => Err(SyntaxError::MissingClosingQuote(input.to_string())),
    }
}

/// A value that is either fully quoted, or taken verbatim when unquoted.
pub fn parse_optionally_quoted(input: &str) -> SyntaxResult<&str> {
    if !input.starts_with('"') {
        return Ok(input);
    }

    let (value, trailing) = parse_quoted(input)?;
    if !trailing.is_empty() {
        return Err(SyntaxError::TrailingGarbage(trailing.to_string()));
    }

    Ok(value)
}

/// Like [`parse_optionally_quoted`], but never fails: malformed quoting
/// yields the raw input.
pub fn parse_lenient_string(input: &str) -> &str {
    parse_optionally_quoted(input).unwrap_or(input)
}

pub fn parse_int(input: &str) -> SyntaxResult<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| SyntaxError::InvalidInt(input.to_string()))
}

pub fn parse_msf(input: &str) -> SyntaxResult<MSF> {
    let parts: Vec<&str> = input.split(':').collect();
    let [minute, second, frame] = parts.as_slice() else {
        return Err(SyntaxError::InvalidMSF(input.to_string()));
    };

    Ok(MSF {
        minute: parse_int(minute)?,
        second: parse_int(second)?,
        frame: parse_int(frame)?,
    })
}

pub fn format_msf(msf: &MSF) -> String {
    format!("{:02}:{:02}:{:02}", msf.minute, msf.second, msf.frame)
}

/// Quotes `value` when it would not survive being read back unquoted.
pub fn quote_if_needed(value: &str) -> String {
    if value.is_empty() || value.contains(' ') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}
