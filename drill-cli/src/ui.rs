//! Print colored text.
//!
//! Diagnostics go to `stderr` with a bold colored tag in front, like `cargo` does.

use error::Error;

use termcolor::*;

use std::fmt;
use std::io::{Result, Write};

/// Prints a warning (yellow `warning:` tag) to `stderr`.
macro_rules! warning {
    ($($args:tt)*) => {
        ::ui::warn(format_args!($($args)*))
    }
}

/// Writes `tag` in bold `color`, then the message in the default style.
fn write_tagged<W: WriteColor>(out: &mut W, tag: &str, color: Color, message: fmt::Arguments) -> Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}: ", tag)?;
    out.reset()?;
    writeln!(out, "{}", message)
}

/// Backend of the `warning!` macro.
pub fn warn(message: fmt::Arguments) {
    let stream = StandardStream::stderr(ColorChoice::Auto);
    let mut lock = stream.lock();
    write_tagged(&mut lock, "warning", Color::Yellow, message).expect("print warning");
}

/// Writes an error followed by its chain of causes.
fn write_error<W: WriteColor>(out: &mut W, error: &Error) -> Result<()> {
    for (i, e) in error.iter().enumerate() {
        let tag = if i == 0 { "error" } else { "caused by" };
        write_tagged(out, tag, Color::Red, format_args!("{}", e))?;
    }
    if let Some(backtrace) = error.backtrace() {
        writeln!(out, "\n{:?}", backtrace)?;
    }
    Ok(())
}

/// Prints an error and the causes to `stderr`.
pub fn print_error(error: &Error) -> Result<()> {
    let stream = StandardStream::stderr(ColorChoice::Auto);
    let mut lock = stream.lock();
    write_error(&mut lock, error)
}

#[test]
fn test_write_error_chain() {
    use drill::ErrorKind as DrillErrorKind;
    use error::ErrorKind;

    let inner: Error = ErrorKind::Drill(DrillErrorKind::InvalidRange(9, 3)).into();
    let error = Error::with_chain(inner, "cannot parse `drill prime` arguments");

    let mut buffer = Buffer::no_color();
    write_error(&mut buffer, &error).unwrap();
    let text = String::from_utf8_lossy(buffer.as_slice());
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("error: cannot parse `drill prime` arguments"));
    assert_eq!(
        lines.next(),
        Some("caused by: invalid range [9, 3], the lower bound must not exceed the upper bound")
    );
}
