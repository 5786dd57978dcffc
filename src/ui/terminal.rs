//! `dialoguer` + `colored` terminal implementation of `UserInterface`.

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::error::{DeckError, DeckResult};

use super::traits::UserInterface;

/// Bad input (empty text, non-numeric, out-of-range choice) is recovered
/// locally by re-prompting, up to this many attempts (§7 InputValidation).
const MAX_RETRIES: u32 = 3;

pub struct TerminalUi;

impl TerminalUi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUi {
    fn prompt_text(&self, message: &str) -> DeckResult<String> {
        for attempt in 0..MAX_RETRIES {
            let answer: String = Input::new()
                .with_prompt(message.cyan().to_string())
                .interact_text()
                .map_err(|e| DeckError::InputValidation { message: e.to_string() })?;
            if !answer.trim().is_empty() {
                return Ok(answer.trim().to_string());
            }
            eprintln!("{}", format!("input cannot be empty ({attempt}/{MAX_RETRIES})").yellow());
        }
        Err(DeckError::InputValidation {
            message: format!("no valid input after {MAX_RETRIES} attempts"),
        })
    }

    fn prompt_number(&self, message: &str, default: f64) -> DeckResult<f64> {
        for attempt in 0..MAX_RETRIES {
            let answer: String = Input::new()
                .with_prompt(message.cyan().to_string())
                .default(default.to_string())
                .interact_text()
                .map_err(|e| DeckError::InputValidation { message: e.to_string() })?;
            match answer.trim().parse::<f64>() {
                Ok(n) => return Ok(n),
                Err(_) => {
                    eprintln!("{}", format!("not a number ({attempt}/{MAX_RETRIES})").yellow());
                }
            }
        }
        Err(DeckError::InputValidation {
            message: format!("no valid number after {MAX_RETRIES} attempts"),
        })
    }

    fn prompt_choice(&self, message: &str, choices: &[String]) -> DeckResult<String> {
        let index = Select::new()
            .with_prompt(message.cyan().to_string())
            .items(choices)
            .default(0)
            .interact()
            .map_err(|e| DeckError::InputValidation { message: e.to_string() })?;
        choices.get(index).cloned().ok_or_else(|| DeckError::InputValidation {
            message: "selection out of range".to_string(),
        })
    }

    fn prompt_confirm(&self, message: &str, default: bool) -> DeckResult<bool> {
        Confirm::new()
            .with_prompt(message.cyan().to_string())
            .default(default)
            .interact()
            .map_err(|e| DeckError::InputValidation { message: e.to_string() })
    }

    fn display(&self, message: &str) {
        println!("{}", message.bold());
    }
}
