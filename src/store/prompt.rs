use std::io::BufRead;

use snafu::ResultExt;

use crate::common::{
    is_email_address, is_kindle_address, ConfigSnafu, PromptSnafu, Result, DEFAULT_SENDER,
};

pub const PROMPT_ATTEMPTS: usize = 3;

/// Source of answers for the first-run questions.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String>;
    fn notify(&mut self, message: &str);
}

/// Answers read line by line from a reader, e.g. piped stdin.
/// End of input reads as a blank answer.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, question: &str) -> Result<String> {
        eprint!("{question}: ");
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .context(PromptSnafu { field: question })?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Interactive prompt on a terminal, plain line reads when stdin is piped.
#[cfg(feature = "cli")]
pub struct TerminalPrompt;

#[cfg(feature = "cli")]
impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        use std::io::IsTerminal;

        if !std::io::stdin().is_terminal() {
            return LinePrompt::new(std::io::stdin().lock()).ask(question);
        }

        dialoguer::Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .context(PromptSnafu { field: question })
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

pub(super) fn ask_kindle_email(prompt: &mut dyn Prompt) -> Result<String> {
    for _ in 0..PROMPT_ATTEMPTS {
        let email = prompt.ask("Kindle email")?.trim().to_string();
        if is_kindle_address(&email) {
            return Ok(email);
        }
        if email.is_empty() {
            prompt.notify("A Kindle email address is required");
        } else {
            prompt.notify(&format!("Invalid Kindle email address: {email}"));
        }
    }

    ConfigSnafu {
        message: "Too many tries, no Kindle email address configured",
    }
    .fail()
}

pub(super) fn ask_send_from(prompt: &mut dyn Prompt) -> Result<String> {
    let question = format!("Send from (blank for {DEFAULT_SENDER})");
    for _ in 0..PROMPT_ATTEMPTS {
        let send_from = prompt.ask(&question)?.trim().to_string();
        if send_from.is_empty() {
            return Ok(DEFAULT_SENDER.to_string());
        }
        if is_email_address(&send_from) {
            return Ok(send_from);
        }
        prompt.notify(&format!("Invalid 'from' email address: {send_from}"));
    }

    prompt.notify(&format!("Too many tries. Using default: {DEFAULT_SENDER}"));
    Ok(DEFAULT_SENDER.to_string())
}
