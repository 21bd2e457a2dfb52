use std::io::{BufRead, Write};
use usrmgr::error::Result;
use usrmgr::screen::Confirm;

/// Asks on stdout and reads the answer from the session's own input, so scripted
/// sessions can answer prompts inline.
pub struct LinePrompt<'a, R: BufRead> {
    input: &'a mut R,
}

impl<'a, R: BufRead> LinePrompt<'a, R> {
    pub fn new(input: &'a mut R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Confirm for LinePrompt<'_, R> {
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}: {} [y/N] ", title, message)?;
        stdout.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(stdout)?;
            return Ok(false);
        }
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
