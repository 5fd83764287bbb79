use inquire::Text;

use crate::error::Result;

/// Source of interactive answers. The console implementation blocks on
/// the terminal; tests substitute a scripted queue of answers.
pub trait Prompt {
    fn line(&mut self, message: &str, help: Option<&str>) -> Result<String>;
}

/// Terminal-backed prompt.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn line(&mut self, message: &str, help: Option<&str>) -> Result<String> {
        let mut text = Text::new(message);
        if let Some(help) = help {
            text = text.with_help_message(help);
        }
        Ok(text.prompt()?)
    }
}
