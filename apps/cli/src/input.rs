//! Safe console input parsing.
//!
//! Every reader consumes one full line and classifies it; garbage after a
//! number rejects the whole line instead of silently truncating it.
//! Decimal input accepts both `,` and `.` as the separator, since catalog
//! prices are routinely typed with a comma.

use std::io::{self, BufRead, Write};

/// Prints a prompt (no newline) and reads one line, without the trailing
/// line break.
pub fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

/// Reads a line and parses an integer. `None` when the line is empty, not a
/// number, or carries trailing garbage.
pub fn read_i32(label: &str) -> io::Result<Option<i32>> {
    let line = prompt_line(label)?;
    Ok(parse_i32(&line))
}

/// Reads a line and parses a decimal amount. `None` on malformed input.
pub fn read_decimal(label: &str) -> io::Result<Option<f64>> {
    let line = prompt_line(label)?;
    Ok(parse_decimal(&line))
}

/// Parses an integer from user input.
pub fn parse_i32(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Parses a decimal amount, accepting `,` or `.` as the separator.
///
/// Normalizing the comma keeps `7,50` and `7.50` equivalent; input with
/// more than one separator ends up malformed after the replacement and is
/// rejected by the float parse.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok().filter(|value: &f64| value.is_finite())
}
