use std::io::{self, BufRead, ErrorKind, Write};

use console::Term;
use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::Operator;

/// Operator front-end backed by `dialoguer` prompts.
///
/// When stdout is not a terminal (piped sessions), every answer is read as a plain line from
/// stdin: `y`/`yes` confirms, and selections take the 1-based number of the listed choice.
pub struct TerminalOperator {
    term: Term,
}

impl TerminalOperator {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }

    fn read_piped_line(&self, prompt: &str) -> Result<Option<String>, AppError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt} ")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Default for TerminalOperator {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret a typed confirmation; anything other than `y`/`yes` declines.
fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Interpret a typed 1-based choice; blank, non-numeric or out-of-range input cancels.
fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(choice) if (1..=count).contains(&choice) => Some(choice - 1),
        _ => None,
    }
}

fn prompt_error(err: DialoguerError) -> AppError {
    AppError::Prompt(err.to_string())
}

fn is_cancel(err: &DialoguerError) -> bool {
    matches!(
        err,
        DialoguerError::IO(io_err)
            if matches!(io_err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof)
    )
}

impl Operator for TerminalOperator {
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if !self.term.is_term() {
            return self.read_piped_line(prompt);
        }

        let line = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term);
        match line {
            Ok(line) => Ok(Some(line)),
            Err(err) if is_cancel(&err) => Ok(None),
            Err(err) => Err(prompt_error(err)),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        if !self.term.is_term() {
            let answer = self.read_piped_line(&format!("{prompt} [y/N]"))?;
            return Ok(answer.as_deref().is_some_and(parse_confirmation));
        }

        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_on_opt(&self.term)
            .map_err(prompt_error)?;
        Ok(answer.unwrap_or(false))
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        if !self.term.is_term() {
            self.term.write_line(prompt)?;
            for (number, item) in items.iter().enumerate() {
                self.term.write_line(&format!("  {}) {item}", number + 1))?;
            }
            let answer = self.read_piped_line("Choice (blank to cancel):")?;
            return Ok(answer.and_then(|line| parse_selection(&line, items.len())));
        }

        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on_opt(&self.term)
            .map_err(prompt_error)
    }
}
