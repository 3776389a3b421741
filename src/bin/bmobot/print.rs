#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use bmobot::presentation::output::{OutputMode, format_output};
use bmobot::presentation::style::Style;

use crate::client::{CliError, Reply};

/// Write a reply to stdout: JSON through the formatter, anything else as raw
/// bytes without a trailing newline.
pub fn reply(reply: &Reply, mode: OutputMode, style: Style) -> Result<(), CliError> {
    match reply {
        Reply::Json(value) => {
            let text = format_output(value, mode, style).map_err(CliError::Decode)?;
            line(&text)
        }
        Reply::Raw(bytes) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(CliError::Output)
        }
    }
}

pub fn line(text: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")
        .and_then(|()| stdout.flush())
        .map_err(CliError::Output)
}

pub fn error(err: &CliError) {
    let style = Style::for_stderr();
    eprintln!("{}", style.failure(&format!("Error: {err}")));
}
