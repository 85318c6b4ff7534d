mod prompt;
mod stream;

pub use prompt::{Prompt, UserInput};
pub use stream::StreamHandler;

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use anyhow::Result;

/// Trait for talking to whoever answers the prompt
pub trait InputHandler {
    /// Show text to the user, without a line terminator
    fn display(&mut self, text: &str) -> Result<()>;

    /// Read one line of input from the user
    fn get_user_input(&mut self) -> Result<UserInput>;
}

/// Default implementation reading stdin and writing stdout
pub fn create_default_input_handler() -> StreamHandler<StdinLock<'static>, Stdout> {
    StreamHandler::new(io::stdin().lock(), io::stdout())
}

/// Write `prompt + separator` to `output`, read one line from `input` and
/// return it, or `default` when the line is empty.
///
/// The line is returned as read, including its terminator. An exhausted
/// input stream counts as an empty line.
pub fn ask<R, W>(
    prompt: &str,
    default: Option<&str>,
    separator: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    let mut handler = StreamHandler::new(input, output);
    Prompt::new(prompt)
        .separator(separator)
        .default(default)
        .ask_with(&mut handler)
}
