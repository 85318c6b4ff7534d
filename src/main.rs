use clap::Parser;
use colored::*;

use unprompt::cli::{self, config, Cli};
use unprompt::create_default_input_handler;

fn main() {
    let args = Cli::parse();
    config::init_logging();

    let mut handler = create_default_input_handler();
    if let Err(err) = cli::run(&args, &mut handler) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
