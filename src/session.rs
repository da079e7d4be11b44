use std::io::{self, BufRead, Write};

use crate::{
    error::{Error, RuntimeError},
    eval_line,
};

/// Maximum number of characters of an input line that are processed.
///
/// Matches the original serial receiver's 32-byte line buffer (one byte
/// reserved for the terminator); characters beyond the limit are dropped.
pub const MAX_LINE_LEN: usize = 31;

/// The command that ends an interactive session. It is intercepted by the
/// session loop and never reaches the expression pipeline.
pub const EXIT_COMMAND: &str = "exit";

/// Diagnostic reported for lines that fail tokenization or parsing.
pub const INVALID_INPUT: &str = "invalid input";
/// Diagnostic reported for expressions that divide by zero.
pub const DIVISION_BY_ZERO: &str = "division by zero";

/// An interactive calculator session over a line reader and a sink.
///
/// The session reads one line at a time, runs it through the expression
/// pipeline, and writes the echoed line followed by its result or a
/// diagnostic. It holds no state between lines: each line's token stream and
/// tree are allocated inside [`eval_line`] and released before the next line
/// is read, so memory use is bounded by a single line regardless of session
/// length.
pub struct Session<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the session until `exit` or end of input.
    ///
    /// Each non-empty line is truncated to [`MAX_LINE_LEN`] characters,
    /// checked against [`EXIT_COMMAND`], and otherwise evaluated. The reply
    /// line echoes the (truncated) expression, a space, and the result or
    /// diagnostic. Malformed lines never end the session; only `exit`, end
    /// of input, or an I/O failure on the reader or writer do.
    ///
    /// # Errors
    /// Returns an `io::Error` if reading or writing fails.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.writer, "Hello! I'm a simple calculator.")?;
        writeln!(self.writer,
                 "Give me an expression or type 'exit' to leave and press enter:")?;

        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                break;
            }

            let line = truncate_line(buf.trim_end_matches(['\r', '\n']));

            // The original line assembly never emits an empty message.
            if line.is_empty() {
                continue;
            }

            if line == EXIT_COMMAND {
                writeln!(self.writer, "Quitting...")?;
                break;
            }

            writeln!(self.writer, "{line} {}", respond(line))?;
        }

        Ok(())
    }
}

/// Evaluates one line and renders the reply text.
///
/// On success this is the decimal value; on failure it is the fixed
/// diagnostic for the failing phase. Tokenization and syntax failures share
/// one diagnostic, division by zero gets its own.
///
/// # Example
/// ```
/// use linecalc::session::respond;
///
/// assert_eq!(respond("2+3*4"), "14");
/// assert_eq!(respond("2+x"), "invalid input");
/// assert_eq!(respond("5/0"), "division by zero");
/// ```
#[must_use]
pub fn respond(line: &str) -> String {
    match eval_line(line) {
        Ok(value) => value.to_string(),
        Err(Error::Parse(_)) => INVALID_INPUT.to_string(),
        Err(Error::Runtime(RuntimeError::DivisionByZero { .. })) => DIVISION_BY_ZERO.to_string(),
    }
}

/// Truncates a line to [`MAX_LINE_LEN`] characters, on a character boundary.
fn truncate_line(line: &str) -> &str {
    match line.char_indices().nth(MAX_LINE_LEN) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
