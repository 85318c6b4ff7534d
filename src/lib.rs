pub mod cli;
pub mod input;

// Re-export commonly used items
pub use input::{ask, create_default_input_handler, InputHandler, Prompt, StreamHandler, UserInput};
