use std::io::{self, BufRead, Write};

// ---------------------------------------------------------------------------
// Line prompts
// ---------------------------------------------------------------------------

/// Reads answers from `input` after writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` (no newline) and read one line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    pub fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print one line of output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Whether `answer` is the quit key (case-insensitive).
pub fn is_quit(answer: &str, key: char) -> bool {
    let mut chars = answer.trim().chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.eq_ignore_ascii_case(&key))
}

/// Whether `answer` is a yes (`y`, case-insensitive).
pub fn is_yes(answer: &str) -> bool {
    is_quit(answer, 'y')
}
