use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use log::trace;

use super::{InputHandler, UserInput};

/// Input handler over a caller-owned reader and writer
pub struct StreamHandler<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamHandler<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> InputHandler for StreamHandler<R, W> {
    fn display(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;
        Ok(())
    }

    fn get_user_input(&mut self) -> Result<UserInput> {
        let mut text = String::new();
        let read = self
            .input
            .read_line(&mut text)
            .context("Failed to read user input")?;
        trace!("read {} bytes of user input", read);
        Ok(UserInput { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_a_single_line() {
        let mut handler = StreamHandler::new(Cursor::new("first\nsecond\n"), Vec::new());

        let input = handler.get_user_input().unwrap();
        assert_eq!(input.text, "first\n");

        let (mut rest, _) = handler.into_inner();
        let mut remaining = String::new();
        rest.read_line(&mut remaining).unwrap();
        assert_eq!(remaining, "second\n");
    }

    #[test]
    fn test_exhausted_input_is_empty() {
        let mut handler = StreamHandler::new(Cursor::new(""), Vec::new());
        assert!(handler.get_user_input().unwrap().is_empty());
    }

    #[test]
    fn test_display_writes_without_terminator() {
        let mut handler = StreamHandler::new(Cursor::new(""), Vec::new());
        handler.display("Name?").unwrap();
        handler.display(" ").unwrap();

        let (_, output) = handler.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Name? ");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut handler = StreamHandler::new(Cursor::new(vec![0xff, 0xfe, b'\n']), Vec::new());
        let err = handler.get_user_input().unwrap_err();
        assert!(err.to_string().contains("Failed to read user input"));
    }
}
