pub mod config;

use anyhow::Result;
use clap::Parser;
use log::debug;

use crate::input::{InputHandler, Prompt};

/// User iNquiry Prompt: asks for input and prints it to stdout
#[derive(Parser, Debug)]
#[command(name = "unprompt", author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(override_usage = "unprompt [OPTIONS] <PROMPT>")]
pub struct Cli {
    /// Prompt to show to the user
    #[arg(value_name = "PROMPT", required_unless_present = "version")]
    pub prompt: Option<String>,

    /// Value used if the user enters nothing; without one an empty line is printed
    #[arg(short, long, value_name = "DEFAULT", allow_hyphen_values = true)]
    pub default: Option<String>,

    /// Text between the prompt and the user's answer [default: " "]
    #[arg(short, long, value_name = "SEPARATOR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,
}

pub fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Run the command, asking and printing through `handler`
pub fn run<H: InputHandler + ?Sized>(cli: &Cli, handler: &mut H) -> Result<()> {
    if cli.version {
        handler.display(&format!("{}\n", version_line()))?;
        return Ok(());
    }

    let prompt = cli
        .prompt
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Missing prompt"))?;
    let separator = config::resolve_separator(cli.separator.as_deref());
    debug!("asking {:?} with separator {:?}", prompt, separator);

    let answer = Prompt::new(prompt)
        .separator(separator)
        .default(cli.default.as_deref())
        .ask_with(handler)?;
    handler.display(&format!("{}\n", answer.unwrap_or_default()))?;
    Ok(())
}
