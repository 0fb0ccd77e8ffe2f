//! Line-based prompts for the interactive `generate` flow.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Asks questions on `output` and reads answers from `input`, one line each.
///
/// End of input counts as an empty answer, so every prompt falls back to its
/// default instead of blocking.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `question [default]: `, returning the trimmed answer or `default`.
    pub fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        write!(self.output, "{question} [{default}]: ")?;
        self.output.flush()?;

        let answer = self.read_answer()?;
        Ok(if answer.is_empty() {
            default.to_owned()
        } else {
            answer
        })
    }

    /// `question [Y/n]: ` or `question [y/N]: `.
    ///
    /// Any answer starting with `y` (case-insensitive) is a yes; any other
    /// non-empty answer is a no.
    pub fn confirm(&mut self, question: &str, default_yes: bool) -> io::Result<bool> {
        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        write!(self.output, "{question} {hint}: ")?;
        self.output.flush()?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(default_yes);
        }
        Ok(answer.to_ascii_lowercase().starts_with('y'))
    }

    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_owned())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
