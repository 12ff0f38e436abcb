use color_eyre::Result;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of typed lines for the interactive shell.
///
/// `Ok(None)` signals end of input; the shell ends the session when it
/// sees it.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Raised by the prompt helpers when the input source is exhausted
#[derive(Debug, thiserror::Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Interactive terminal prompts
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(color_eyre::eyre::eyre!("Failed to read input: {}", e)),
        }
    }
}

/// Line-oriented input from any reader (piped stdin, scripted sessions)
pub struct LineInput<R> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R, echo_prompts: bool) -> Self {
        Self { reader, echo_prompts }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.echo_prompts {
            print!("{}: ", prompt);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Terminal prompts when attached to a TTY, plain line reads otherwise.
/// `echo_prompts` only applies to plain line reads.
pub fn stdin_source(echo_prompts: bool) -> Box<dyn InputSource> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        Box::new(TerminalInput)
    } else {
        Box::new(LineInput::new(io::stdin().lock(), echo_prompts))
    }
}
