/// Line-oriented prompting over any reader/writer pair
///
/// The session and the command handlers only talk to the user through this
/// type, so tests can drive them with a `Cursor` and a `Vec<u8>`.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Fixed answer for yes/no questions when nobody is at the keyboard
    assume: Option<bool>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, assume: None }
    }

    /// Prompter for one-shot commands: confirmations get `assume_yes`
    pub fn non_interactive(input: R, output: W, assume_yes: bool) -> Self {
        Self { input, output, assume: Some(assume_yes) }
    }

    /// Print a question and read one line
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask a yes/no question; only "y" counts as yes
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        if let Some(answer) = self.assume {
            writeln!(self.output, "{}{}", question, if answer { "y" } else { "n" })?;
            return Ok(answer);
        }

        Ok(matches!(self.ask(question)?, Some(answer) if answer.trim().eq_ignore_ascii_case("y")))
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
