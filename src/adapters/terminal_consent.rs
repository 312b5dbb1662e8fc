use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError};

use crate::domain::AppError;
use crate::ports::ConsentPrompt;

/// Consent source for the CLI.
///
/// A preset answer (from `--yes` / `--no-install`) wins. Otherwise the operator
/// is asked on the terminal; without a terminal the answer is "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConsent {
    preset: Option<bool>,
}

impl TerminalConsent {
    pub fn new(preset: Option<bool>) -> Self {
        Self { preset }
    }
}

impl ConsentPrompt for TerminalConsent {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        if let Some(answer) = self.preset {
            return Ok(answer);
        }

        if !std::io::stdin().is_terminal() {
            println!("{} (no terminal, assuming no; pass --yes to install)", question);
            return Ok(false);
        }

        match Confirm::new().with_prompt(question).default(false).interact_opt() {
            Ok(answer) => Ok(answer.unwrap_or(false)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
            Err(err) => Err(AppError::Prompt(format!("Failed to read answer: {}", err))),
        }
    }
}
