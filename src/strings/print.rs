use std::io::{self, Write};

use super::{Argument, PrintError, format};

/// Formats `template` (see [`format()`]) and writes the result to `out`. Nothing is written if
/// formatting fails.
///
/// # Errors
/// Returns [`PrintError::Format`] if the template can't be formatted, or [`PrintError::IO`] if
/// writing to `out` fails.
pub fn write_format<W: Write + ?Sized>(
    out: &mut W,
    template: &str,
    arguments: &[Argument<'_>],
) -> Result<(), PrintError> {
    let formatted = format(template, arguments)?;
    out.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Like [`write_format`], but terminates the line.
///
/// # Errors
/// See [`write_format`].
pub fn write_formatln<W: Write + ?Sized>(
    out: &mut W,
    template: &str,
    arguments: &[Argument<'_>],
) -> Result<(), PrintError> {
    let formatted = format(template, arguments)?;
    writeln!(out, "{formatted}")?;
    Ok(())
}

/// Formats `template` and prints it to stdout.
///
/// # Errors
/// See [`write_format`].
pub fn print_format(template: &str, arguments: &[Argument<'_>]) -> Result<(), PrintError> {
    write_format(&mut io::stdout().lock(), template, arguments)
}

/// Formats `template` and prints it to stdout, terminating the line.
///
/// # Errors
/// See [`write_format`].
pub fn print_formatln(template: &str, arguments: &[Argument<'_>]) -> Result<(), PrintError> {
    write_formatln(&mut io::stdout().lock(), template, arguments)
}
