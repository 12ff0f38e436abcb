pub mod config;
pub mod input;
pub mod prompts;
pub mod shell;
