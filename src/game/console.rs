//! Console helpers for the interactive scenario.

use std::io::{self, BufRead, Write};

/// Wraps a message in ANSI bold escapes.
pub fn bold(msg: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", msg)
}

/// Writes a bold line to the output.
pub fn write_bold(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", bold(msg))
}

/// Reads one trimmed line, failing on end of input.
pub fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended while the game was waiting for a choice",
        ));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bold_wraps_in_escapes() {
        assert_eq!(bold("Mission:"), "\x1b[1mMission:\x1b[0m");
    }

    #[test]
    fn test_read_line_trims() {
        let mut input = Cursor::new("  3  \n");
        assert_eq!(read_line(&mut input).unwrap(), "3");
    }

    #[test]
    fn test_read_line_eof_is_error() {
        let mut input = Cursor::new("");
        assert!(read_line(&mut input).is_err());
    }
}
