use super::input::{InputClosed, InputSource};
use crate::output::Output;
use color_eyre::Result;
use std::fmt::Display;
use std::str::FromStr;

/// Prompt for a string value
pub fn prompt_string(input: &mut dyn InputSource, prompt: &str) -> Result<String> {
    input.read_line(prompt)?.ok_or_else(|| InputClosed.into())
}

/// Prompt for an integer, re-prompting until the input parses
pub fn prompt_int(input: &mut dyn InputSource, prompt: &str, output: &Output) -> Result<i32> {
    loop {
        let line = prompt_string(input, prompt)?;
        match line.trim().parse::<i32>() {
            Ok(num) => return Ok(num),
            Err(_) => {
                output.error("Invalid input. Please enter a number.");
                continue;
            }
        }
    }
}

/// Prompt for a non-negative count, re-prompting on negative or non-numeric input
pub fn prompt_count(input: &mut dyn InputSource, prompt: &str, output: &Output) -> Result<u32> {
    loop {
        let value = prompt_int(input, prompt, output)?;
        match u32::try_from(value) {
            Ok(count) => return Ok(count),
            Err(_) => {
                output.error("Invalid input. Please enter a number of zero or more.");
                continue;
            }
        }
    }
}

/// Prompt for one of `options`, re-prompting until the text parses.
/// The prompt lists the accepted values, e.g. "Status (WATCHED, TO_WATCH)".
pub fn prompt_choice<T>(input: &mut dyn InputSource, prompt: &str, options: &[T], output: &Output) -> Result<T>
where
    T: FromStr + Display,
{
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let full_prompt = format!("{} ({})", prompt, labels.join(", "));

    loop {
        let line = prompt_string(input, &full_prompt)?;
        match line.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                output.error("Invalid input. Please choose from the given options.");
                continue;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::input::LineInput;
    use crate::output::OutputFormat;
    use media_tracker_models::MovieStatus;
    use std::io::Cursor;

    fn output() -> Output {
        Output::new(OutputFormat::Human, true)
    }

    #[test]
    fn test_prompt_int_reprompts_on_garbage() {
        let mut input = LineInput::new(Cursor::new("abc\n\n42\n"), false);
        assert_eq!(prompt_int(&mut input, "Number", &output()).unwrap(), 42);
    }

    #[test]
    fn test_prompt_count_rejects_negative() {
        let mut input = LineInput::new(Cursor::new("-3\n7\n"), false);
        assert_eq!(prompt_count(&mut input, "Count", &output()).unwrap(), 7);
    }

    #[test]
    fn test_prompt_choice_reprompts_on_unknown_status() {
        let mut input = LineInput::new(Cursor::new("maybe\nto watch\n"), false);
        let status = prompt_choice(&mut input, "Status", MovieStatus::ALL, &output()).unwrap();
        assert_eq!(status, MovieStatus::ToWatch);
    }

    #[test]
    fn test_prompt_fails_when_input_closes() {
        let mut input = LineInput::new(Cursor::new("abc\n"), false);
        let err = prompt_int(&mut input, "Number", &output()).unwrap_err();
        assert!(err.downcast_ref::<InputClosed>().is_some());
    }
}
