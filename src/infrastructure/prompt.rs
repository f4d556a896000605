//! Line-based prompts for values missing from the command line

use crate::error::{BackfillError, Result};
use std::io::{BufRead, Write};

/// Asks one question per line on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Ask a question; blank answers and end of input give `None`
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let answer = line.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    /// Ask a question that must be answered
    pub fn ask_required(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)?.ok_or_else(|| {
            BackfillError::InvalidInput(format!(
                "no value entered for '{}'",
                prompt.trim_end_matches([':', ' '])
            ))
        })
    }

    /// Print an informational line between questions
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("  octocat \n"), &mut output);
        assert_eq!(
            prompter.ask("Username: ").unwrap(),
            Some("octocat".to_string())
        );
        drop(prompter);
        assert_eq!(String::from_utf8(output).unwrap(), "Username: ");
    }

    #[test]
    fn test_ask_blank_is_none() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("Lightest: ").unwrap(), None);
    }

    #[test]
    fn test_ask_end_of_input_is_none() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("Lightest: ").unwrap(), None);
    }

    #[test]
    fn test_ask_required_rejects_blank() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        match prompter.ask_required("Repository name: ").unwrap_err() {
            BackfillError::InvalidInput(msg) => assert!(msg.contains("Repository name")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_sequential_questions() {
        let mut prompter = Prompter::new(Cursor::new("first\nsecond\n"), Vec::new());
        assert_eq!(prompter.ask_required("A: ").unwrap(), "first");
        assert_eq!(prompter.ask_required("B: ").unwrap(), "second");
    }
}
